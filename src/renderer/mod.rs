//! WebGPU rendering module
//!
//! Draw lists are tessellated on the CPU into colored triangles and drawn
//! with a single pass-through pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::tessellate;
pub use vertex::Vertex;
