//! Fixed-rate frame loop on the current thread

use std::rc::Rc;

use super::scheduler::ManualScheduler;
use super::Host;
use crate::foundation::time::FrameClock;

/// Drives a [`ManualScheduler`] at a target frame rate
///
/// Stands in for a display's vsync-driven frame callbacks when running
/// headless. Blocks the calling thread between frames.
pub struct FrameLoop {
    scheduler: Rc<ManualScheduler>,
    clock: FrameClock,
}

impl FrameLoop {
    /// Create a loop targeting `fps` frames per second (0 = unpaced)
    pub fn new(fps: u32) -> Self {
        Self {
            scheduler: Rc::new(ManualScheduler::new()),
            clock: FrameClock::new(fps),
        }
    }

    /// Host environment backed by this loop's scheduler
    pub fn host(&self, device_pixel_ratio: Option<f32>) -> Host {
        let host = Host::new(self.scheduler.clone());
        match device_pixel_ratio {
            Some(ratio) => host.with_device_pixel_ratio(ratio),
            None => host,
        }
    }

    /// The scheduler this loop drives
    pub fn scheduler(&self) -> &Rc<ManualScheduler> {
        &self.scheduler
    }

    /// Frame timing statistics
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Run exactly `frames` frames, pending callbacks or not
    pub fn run_for(&mut self, frames: u64) -> u64 {
        for _ in 0..frames {
            self.step();
        }
        log::debug!("Frame loop ran {} frames ({:.1} fps average)", frames, self.clock.average_fps());
        frames
    }

    /// Run frames until nothing is pending or `max_frames` is reached
    ///
    /// Returns the number of frames run.
    pub fn run_until_idle(&mut self, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames && self.scheduler.pending_count() > 0 {
            self.step();
            frames += 1;
        }
        frames
    }

    fn step(&mut self) {
        self.clock.begin_frame();
        let invoked = self.scheduler.run_frame();
        let wait = self.clock.end_frame();
        log::trace!("Frame {} ran {} callbacks", self.clock.frame_count(), invoked);
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }
}
