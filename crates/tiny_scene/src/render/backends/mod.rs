//! Backend implementations for the render module
//!
//! Currently only the headless CPU rasterizer ships with the crate; GPU
//! backends implement [`crate::render::api::Renderer`] out of tree.

/// Headless CPU rendering backend
pub mod headless;

pub use headless::HeadlessRenderer;
