//! Induced-subgraph analysis

mod subgraph_stats;
mod exhaustive;

pub use subgraph_stats::{analyze, signed_pair, ForestStats};
pub use exhaustive::{exhaustive_leaf_table, EXHAUSTIVE_LIMIT};
