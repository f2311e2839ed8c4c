//! Graph collaborator for the leaf search

mod working_graph;
mod exclusion;
pub mod generators;

pub use working_graph::{GraphSpec, WorkingGraph};
pub use exclusion::VertexExclusion;
