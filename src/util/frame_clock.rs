//! Frame pacing.

use web_time::{Duration, Instant};

/// Fixed-rate frame pacing for driving `update()` from an event loop.
///
/// The trackball integrates one step per call, so damping speed is tied to
/// the call rate; pacing the calls keeps inertia consistent across
/// machines.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Target rate (0 = unlimited)
    target_fps: u32,
    /// Minimum spacing between frames
    min_frame_duration: Duration,
    /// Start of the last frame
    last_frame: Instant,
    /// Exponential moving average of the achieved rate
    smoothed_fps: f32,
    /// Frames ticked so far
    frames: u64,
}

impl FrameClock {
    /// Weight of the newest sample in the smoothed rate.
    const SMOOTHING: f32 = 0.05;

    /// Clock pacing to `target_fps` (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: if target_fps > 0 {
                target_fps as f32
            } else {
                60.0
            },
            frames: 0,
        }
    }

    /// Whether enough time has passed for the next frame.
    #[must_use]
    pub fn is_due(&self) -> bool {
        self.target_fps == 0
            || self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark a frame as run. Returns the seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;

        if elapsed > 0.0 {
            self.smoothed_fps = self.smoothed_fps * (1.0 - Self::SMOOTHING)
                + Self::SMOOTHING / elapsed;
        }
        elapsed
    }

    /// Smoothed achieved frame rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames ticked since creation.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
