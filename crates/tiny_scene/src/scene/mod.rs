//! Scene management
//!
//! Holds the objects and lights a renderer draws.

pub mod scene_graph;

pub use scene_graph::{MeshObject, ObjectKey, Scene};
