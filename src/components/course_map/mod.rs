//! Prerequisite map: validated course graph, edge geometry, hover state and
//! the ambient pulse that animates unhovered tiles.

mod component;
mod error;
mod geometry;
mod loader;
mod pulse;
mod render;
mod state;
mod types;

pub use component::CourseMap;
pub use loader::load_graph;
