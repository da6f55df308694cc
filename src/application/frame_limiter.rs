use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame loop at a target rate by sleeping out the rest of each
/// frame, and keeps a smoothed frame time for display.
pub struct FrameLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FrameLimiter {
    pub fn new(max_fps: u32) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1. / f64::from(max_fps.max(1))),
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }

    pub fn target_frametime(&self) -> Duration {
        self.target_frametime
    }

    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    /// Sleep until the target frame time has passed since the last call
    pub fn wait(&mut self) {
        let before_wait = self.frame_timer.elapsed();
        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
