//! # Induced Trees: maximum leaves of induced subtrees
//!
//! For a graph `G` on the vertices `0..n`, this crate computes the table
//! `L[0..=n]` where `L[m]` is the largest number of leaves of an induced
//! subgraph of `G` that has exactly `m` vertices and is a tree.
//!
//! ## Features
//!
//! - **Analyzer**: forest test, leaf count and connectivity signal for an induced subgraph
//! - **Search**: inclusion/exclusion branch and bound over a mutable working graph
//! - **Orchestrator**: table setup, private graph copy, batch runs over many graphs
//!
//! ```
//! use induced_trees::prelude::*;
//!
//! let path = generators::path(4);
//! let table = compute_leaf_table(&path);
//! assert_eq!(table.as_slice(), &[0, 0, 2, 2, 2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Induced-subgraph statistics and the exhaustive reference table
pub mod analysis;

/// Working graph, scoped vertex exclusion and graph generators
pub mod graph;

/// Branch-and-bound search over inclusion/exclusion decisions
pub mod search;

/// Result table and the orchestrating entry points
pub mod table;

/// Search configuration
pub mod config;

/// Running the orchestrator over many graphs
pub mod batch;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use analysis::{analyze, exhaustive_leaf_table, ForestStats};
pub use batch::compute_leaf_tables;
pub use config::{PruningBound, SearchConfig};
pub use graph::{generators, GraphSpec, VertexExclusion, WorkingGraph};
pub use search::{LeafSearch, SearchOutcome, SearchStats};
pub use table::{compute_leaf_table, compute_leaf_table_in_place, compute_leaf_table_with, LeafTable};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum LeafTableError {
    /// An edge endpoint lies outside `0..vertex_count`
    #[error("Vertex {vertex} out of range for a graph on {vertex_count} vertices")]
    VertexOutOfRange {
        /// Offending vertex id
        vertex: usize,
        /// Size of the vertex universe
        vertex_count: usize,
    },

    /// Edge from a vertex to itself
    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(usize),

    /// Graph exceeds what an exhaustive enumeration can handle
    #[error("Graph with {vertex_count} vertices exceeds the limit of {limit}")]
    GraphTooLarge {
        /// Number of vertices in the graph
        vertex_count: usize,
        /// Largest accepted vertex count
        limit: usize,
    },

    /// Malformed result table
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// Configuration rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, LeafTableError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        analysis::{analyze, exhaustive_leaf_table, ForestStats},
        batch::compute_leaf_tables,
        config::{PruningBound, SearchConfig},
        graph::{generators, GraphSpec, VertexExclusion, WorkingGraph},
        search::{LeafSearch, SearchOutcome, SearchStats},
        table::{compute_leaf_table, compute_leaf_table_in_place, compute_leaf_table_with, LeafTable},
        LeafTableError, Result,
    };
}
