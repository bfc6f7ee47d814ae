//! WebGPU rendering
//!
//! A single triangle-list pipeline with per-vertex color; the whole scene is
//! rebuilt as rects and circles each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::build_scene;
pub use vertex::{Vertex, colors};
