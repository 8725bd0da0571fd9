//! Lighting system

pub mod lighting;

pub use lighting::{Light, LightType};
