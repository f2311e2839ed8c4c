//! Branch-and-bound search over inclusion/exclusion decisions

mod bound;
mod stats;
mod leaf_search;

pub use stats::SearchStats;
pub use leaf_search::{LeafSearch, SearchOutcome};
