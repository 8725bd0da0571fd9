//! Frame timing utilities

use std::time::{Duration, Instant};

/// Frame clock used to pace a host frame loop
///
/// Tracks the start of the current frame and the frame statistics the
/// demo host reports. Rotation speed does not depend on it: a tick always
/// advances by a fixed angle.
#[derive(Debug)]
pub struct FrameClock {
    started: Instant,
    frame_start: Instant,
    target_frame_time: Duration,
    last_frame_time: Duration,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock targeting `fps` frames per second
    ///
    /// A zero rate disables pacing.
    pub fn new(fps: u32) -> Self {
        let now = Instant::now();
        let target_frame_time = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / f64::from(fps))
        };
        Self {
            started: now,
            frame_start: now,
            target_frame_time,
            last_frame_time: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Mark the start of a frame
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Mark the end of a frame and return how long to wait before the next one
    pub fn end_frame(&mut self) -> Duration {
        self.last_frame_time = self.frame_start.elapsed();
        self.frame_count += 1;
        self.target_frame_time.saturating_sub(self.last_frame_time)
    }

    /// Target duration of one frame
    pub fn target_frame_time(&self) -> Duration {
        self.target_frame_time
    }

    /// Work time of the most recent frame
    pub fn last_frame_time(&self) -> Duration {
        self.last_frame_time
    }

    /// Number of completed frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average frames per second since the clock was created
    pub fn average_fps(&self) -> f32 {
        let total = self.started.elapsed().as_secs_f32();
        if total > 0.0 {
            self.frame_count as f32 / total
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_never_waits() {
        let mut clock = FrameClock::new(0);
        clock.begin_frame();
        assert_eq!(clock.end_frame(), Duration::ZERO);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_wait_bounded_by_target() {
        let mut clock = FrameClock::new(60);
        clock.begin_frame();
        let wait = clock.end_frame();
        assert!(wait <= clock.target_frame_time());
        assert!(clock.target_frame_time() > Duration::from_millis(16));
        assert!(clock.target_frame_time() < Duration::from_millis(17));
    }
}
