//! Public rendering API
//!
//! Traits a rendering backend implements to be driven by a session.

pub mod render_backend;

pub use render_backend::{Renderer, RendererFactory, RendererOptions};
