//! # Rendering System
//!
//! Rendering abstractions used by the scene session.
//!
//! ## Architecture
//!
//! - **api**: the `Renderer` / `RendererFactory` traits a backend implements
//! - **primitives**: camera, colors and meshes
//! - **resources**: materials
//! - **systems**: lighting
//! - **window**: the display surface a renderer's output node attaches to
//! - **backends**: the headless CPU renderer
//!
//! The session only talks to these traits, never to a concrete backend.

pub mod api;
pub mod backends;
pub mod primitives;
pub mod resources;
pub mod systems;
pub mod window;

pub use api::{Renderer, RendererFactory, RendererOptions};
pub use backends::HeadlessRenderer;
pub use primitives::{Camera, Color, Mesh, Vertex};
pub use resources::materials::{Material, MaterialType};
pub use systems::lighting::{Light, LightType};
pub use window::{DisplaySurface, HeadlessSurface, OutputNode, SurfaceError, SurfaceRef};

use thiserror::Error;

/// Rendering system errors
///
/// Comprehensive error type covering renderer construction, frame rendering
/// and resource lifetime failures. Session teardown reports these through
/// the log instead of returning them.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Renderer initialization failed during setup
    ///
    /// Occurs when a backend cannot be constructed, typically due to a
    /// missing graphics device or an invalid configuration.
    #[error("Renderer initialization failed: {0}")]
    InitializationFailed(String),

    /// A rendering operation failed during execution
    #[error("Rendering failed: {0}")]
    RenderingFailed(String),

    /// Resource creation or management failed
    #[error("Resource creation failed: {0}")]
    ResourceCreationFailed(String),

    /// Releasing graphics resources failed
    #[error("Renderer dispose failed: {0}")]
    DisposeFailed(String),

    /// The session state is borrowed by a live accessor guard
    #[error("Session state is borrowed")]
    StateBorrowed,

    /// The renderer's resources were already released
    #[error("Renderer has been disposed")]
    RendererDisposed,

    /// `dispose` was called on a renderer that was already disposed
    #[error("Renderer was already disposed")]
    AlreadyDisposed,

    /// Writing a frame out failed
    #[error("Frame export failed: {0}")]
    Export(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
