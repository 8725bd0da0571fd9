//! Renderer abstraction traits
//!
//! The session drives rendering through these traits only, so any backend
//! (the bundled headless rasterizer, a GPU renderer, a test double) can sit
//! behind it.

use crate::render::primitives::Camera;
use crate::render::window::OutputNode;
use crate::render::RenderResult;
use crate::scene::Scene;

/// Options passed to a [`RendererFactory`] when a session builds its renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererOptions {
    /// Request smoothed (anti-aliased) edges
    pub antialias: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self { antialias: true }
    }
}

/// Main rendering backend trait
pub trait Renderer {
    /// Resize the output to `width` × `height` logical pixels
    ///
    /// No validation is performed; zero sizes are passed to the backend as-is.
    fn set_size(&mut self, width: u32, height: u32);

    /// Set the device pixel ratio (physical pixels per logical pixel)
    fn set_pixel_ratio(&mut self, ratio: f32);

    /// Draw one frame of `scene` as seen by `camera`
    fn render(&mut self, scene: &Scene, camera: &Camera) -> RenderResult<()>;

    /// Release graphics resources
    fn dispose(&mut self) -> RenderResult<()>;

    /// The node the renderer draws into, attached to a display surface
    fn output_node(&self) -> OutputNode;
}

/// Builds renderers for new sessions
///
/// Implemented for any `Fn(&RendererOptions) -> RenderResult<R>`, so a
/// closure works as a factory.
pub trait RendererFactory {
    /// Renderer type produced by this factory
    type Renderer: Renderer;

    /// Construct a renderer; failures propagate to the session's caller
    fn create_renderer(&self, options: &RendererOptions) -> RenderResult<Self::Renderer>;
}

impl<F, R> RendererFactory for F
where
    F: Fn(&RendererOptions) -> RenderResult<R>,
    R: Renderer,
{
    type Renderer = R;

    fn create_renderer(&self, options: &RendererOptions) -> RenderResult<R> {
        self(options)
    }
}
