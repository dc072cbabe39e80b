mod component;
mod editor;
mod graph;
mod nearest;
mod point;
mod render;
mod segment;
mod surface;
mod types;

pub use component::GraphEditorCanvas;
pub use types::{GraphData, GraphLink, GraphPoint};
