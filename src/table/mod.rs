//! Result table and the entry points that fill it

mod leaf_table;
mod orchestrator;

pub use leaf_table::LeafTable;
pub use orchestrator::{compute_leaf_table, compute_leaf_table_in_place, compute_leaf_table_with};
