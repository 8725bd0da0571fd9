//! # Rendering sessions
//!
//! A session is one live rotating-cube scene attached to a display surface:
//!
//! ```text
//!   SessionManager::create(surface, config)
//!          │
//!          ├── Scene { background, cube, directional light, ambient light }
//!          ├── Camera (75°, 0.1..1000, z = 2)
//!          ├── Renderer ──► output node ──► surface.append_child
//!          └── first tick ──► FrameScheduler::request_frame ──► tick ──► ...
//!
//!   Session::stop()  ──► cancel_frame, dispose, surface.remove_child
//! ```
//!
//! Everything runs on one thread. Scheduled ticks hold only a weak
//! reference to the session, so dropping the [`Session`] ends the loop.

mod handle;
mod manager;

pub use handle::{LoopState, Session};
pub use manager::SessionManager;

use crate::render::primitives::Color;

/// Vertical field of view of the session camera, in degrees
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

/// Near clipping plane of the session camera
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clipping plane of the session camera
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera distance from the origin along +Z
pub const CAMERA_DISTANCE: f32 = 2.0;

/// Edge length of the cube
pub const CUBE_SIZE: f32 = 1.0;

/// Cube material color
pub const CUBE_COLOR: Color = Color::from_hex(0x0000_77ff);

/// Directional light color
pub const KEY_LIGHT_COLOR: Color = Color::WHITE;

/// Directional light position; the light points at the origin
pub const KEY_LIGHT_POSITION: [f32; 3] = [3.0, 3.0, 3.0];

/// Ambient light color
pub const AMBIENT_LIGHT_COLOR: Color = Color::from_hex(0x0040_4040);

/// Rotation added to the cube's X and Y angles every tick, in radians
///
/// Not scaled by frame time: the spin speed follows the frame rate.
pub const ROTATION_STEP: f32 = 0.01;
