//! WebGPU rendering module
//!
//! Flat-colored triangles in canvas pixel space. `scene` turns a read-only
//! `GameState` into vertices; `pipeline` uploads and draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod starfield;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use starfield::Starfield;
pub use vertex::Vertex;
