//! Display surface subsystem
//!
//! A display surface is the externally owned container a session attaches
//! its renderer's output node to.
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Caller                      │  owns the surface
//! └─────────────┬───────────────────┘
//!               │ shares SurfaceRef
//!      ┌────────▼────────┐
//!      │ DisplaySurface  │ ← trait (backend.rs)
//!      │ trait           │
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ HeadlessSurface       │ ← in-memory surface (handle.rs)
//!   │ host containers       │ ← embedder-provided
//!   └───────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`backend`**: the `DisplaySurface` contract, output node ids, errors
//! - **`handle`**: `HeadlessSurface`, an in-memory implementation

pub mod handle;
pub mod backend;

pub use backend::{DisplaySurface, OutputNode, SurfaceError, SurfaceRef};
pub use handle::HeadlessSurface;
