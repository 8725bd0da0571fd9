//! Host environment
//!
//! Everything a session would otherwise read from ambient globals: the
//! frame scheduler and the display's device pixel ratio.

pub mod frame_loop;
pub mod scheduler;

use std::rc::Rc;

pub use frame_loop::FrameLoop;
pub use scheduler::{FrameCallback, FrameHandle, FrameScheduler, ManualScheduler};

/// Upper bound applied to the reported device pixel ratio
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Injected host services
#[derive(Clone)]
pub struct Host {
    scheduler: Rc<dyn FrameScheduler>,
    device_pixel_ratio: Option<f32>,
}

impl Host {
    /// Host with the given scheduler and no reported pixel ratio
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            scheduler,
            device_pixel_ratio: None,
        }
    }

    /// Builder pattern: Set the reported device pixel ratio
    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = Some(ratio);
        self
    }

    /// The frame scheduler
    pub fn scheduler(&self) -> &Rc<dyn FrameScheduler> {
        &self.scheduler
    }

    /// Pixel ratio a renderer should use: `min(reported, 2)`
    ///
    /// An unreported, zero or NaN ratio counts as 1.
    pub fn effective_pixel_ratio(&self) -> f32 {
        match self.device_pixel_ratio {
            Some(ratio) if ratio != 0.0 && !ratio.is_nan() => ratio.min(MAX_PIXEL_RATIO),
            _ => 1.0,
        }
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("device_pixel_ratio", &self.device_pixel_ratio)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> Host {
        Host::new(Rc::new(ManualScheduler::new()))
    }

    #[test]
    fn test_pixel_ratio_is_capped() {
        assert_eq!(host().with_device_pixel_ratio(2.0).effective_pixel_ratio(), 2.0);
        assert_eq!(host().with_device_pixel_ratio(4.0).effective_pixel_ratio(), 2.0);
        assert_eq!(host().with_device_pixel_ratio(1.5).effective_pixel_ratio(), 1.5);
    }

    #[test]
    fn test_missing_ratio_defaults_to_one() {
        assert_eq!(host().effective_pixel_ratio(), 1.0);
        assert_eq!(host().with_device_pixel_ratio(0.0).effective_pixel_ratio(), 1.0);
        assert_eq!(host().with_device_pixel_ratio(f32::NAN).effective_pixel_ratio(), 1.0);
    }
}
