//! Search configuration

use crate::{LeafTableError, Result};
use serde::{Deserialize, Serialize};

/// Upper bound used to decide whether a search node is worth expanding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruningBound {
    /// Each further vertex adds at most one leaf, minus the connexity lack.
    ///
    /// Fast, but not a true upper bound: a lone included vertex gains two
    /// leaves from one neighbor, so some optima can be pruned away.
    #[default]
    Heuristic,
    /// Size-based cap that never underestimates, giving an exact table
    Admissible,
}

/// Configuration for [`crate::LeafSearch`] and the orchestrating entry points
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Bound used by the promising test
    pub bound: PruningBound,
    /// Minimum batch size before graphs are searched in parallel
    pub parallel_threshold: usize,
}

impl SearchConfig {
    /// Original heuristic bound
    pub fn heuristic() -> Self {
        SearchConfig {
            bound: PruningBound::Heuristic,
            parallel_threshold: 4,
        }
    }

    /// Exact tables at the cost of a larger search
    pub fn admissible() -> Self {
        SearchConfig {
            bound: PruningBound::Admissible,
            ..Self::heuristic()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(LeafTableError::InvalidConfig(
                "parallel threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::heuristic()
    }
}
