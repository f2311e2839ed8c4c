//! Utility functions for induced-tree tables

use crate::graph::{GraphSpec, WorkingGraph};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Save object to JSON file
pub fn save_json<T: Serialize, P: AsRef<Path>>(obj: &T, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(obj)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Load object from JSON file
pub fn load_json<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<T> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let obj = serde_json::from_str(&contents)?;
    Ok(obj)
}

/// Load a graph stored as a [`GraphSpec`], validating its edges
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<WorkingGraph> {
    let spec: GraphSpec = load_json(path)?;
    WorkingGraph::try_from(spec)
}

/// Store a graph as a [`GraphSpec`]
pub fn save_graph<P: AsRef<Path>>(graph: &WorkingGraph, path: P) -> Result<()> {
    save_json(&graph.to_spec(), path)
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::debug;

    /// Timer that logs its elapsed time when dropped
    pub struct Timer {
        start: Instant,
        name: String,
    }

    impl Timer {
        /// Start new timer
        pub fn new(name: &str) -> Self {
            Timer {
                start: Instant::now(),
                name: name.to_string(),
            }
        }

        /// Get elapsed time in seconds
        pub fn elapsed(&self) -> f32 {
            self.start.elapsed().as_secs_f32()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            debug!(timer = %self.name, seconds = self.elapsed(), "timer finished");
        }
    }
}
