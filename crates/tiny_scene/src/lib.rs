//! # Tiny Scene
//!
//! A rotating-cube rendering session with start/stop/resize lifecycle.
//!
//! ## Features
//!
//! - **Sessions**: one call builds a camera, renderer, cube and two lights and
//!   attaches the renderer's output to a display surface
//! - **Animation loop**: per-frame ticks driven by an injected host scheduler
//! - **Idempotent teardown**: `stop()` never fails and never runs twice
//! - **Headless rendering**: a CPU rasterizer that can write PNG frames
//! - **Configuration**: TOML and RON scene config files
//!
//! ## Quick Start
//!
//! ```rust
//! use tiny_scene::prelude::*;
//!
//! let frame_loop = FrameLoop::new(0);
//! let surface: SurfaceRef = HeadlessSurface::new(320, 240).shared();
//! let manager = SessionManager::new(frame_loop.host(Some(2.0)), HeadlessRenderer::create);
//!
//! let session = manager.create(surface, &SceneConfig::default()).unwrap();
//! frame_loop.scheduler().run_frame();
//! session.resize(640, 480).unwrap();
//! session.stop();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod host;
pub mod render;
pub mod scene;
pub mod session;

/// Common imports for session users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ResolvedConfig, SceneConfig},
        foundation::math::{Mat4, Vec3},
        host::{FrameHandle, FrameLoop, FrameScheduler, Host, ManualScheduler},
        render::{
            Camera, Color, DisplaySurface, HeadlessRenderer, HeadlessSurface, Light, Material, Mesh, OutputNode,
            RenderError, RenderResult, Renderer, RendererFactory, RendererOptions, SurfaceRef,
        },
        scene::{MeshObject, Scene},
        session::{LoopState, Session, SessionManager},
    };
}
