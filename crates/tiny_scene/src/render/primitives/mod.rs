//! Core rendering primitives
//!
//! Value types shared by the scene and renderers: colors, meshes and the
//! perspective camera.

pub mod camera;
pub mod color;
pub mod mesh;

pub use camera::Camera;
pub use color::Color;
pub use mesh::{Mesh, Vertex};
