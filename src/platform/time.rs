//! Frame pacing
//!
//! The browser calls back on every display refresh; `FrameClock` drops the
//! callbacks that arrive before the next frame is due. Natively,
//! `FrameLimiter` sleeps until the next frame boundary.

/// Slack for callbacks that land just before the boundary
const EARLY_TOLERANCE_MS: f64 = 1.0;

/// Rate limiter driven by externally supplied timestamps (milliseconds)
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval_ms: 1000.0 / target_fps.max(1) as f64,
            last_ms: None,
        }
    }

    /// Seconds since the previous accepted frame, or `None` if this
    /// callback came too early and should be skipped
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        match self.last_ms {
            None => {
                self.last_ms = Some(now_ms);
                Some((self.interval_ms / 1000.0) as f32)
            }
            Some(last) if now_ms - last + EARLY_TOLERANCE_MS >= self.interval_ms => {
                self.last_ms = Some(now_ms);
                Some(((now_ms - last) / 1000.0) as f32)
            }
            Some(_) => None,
        }
    }

    /// Forget the previous timestamp, so the frame after a pause does not
    /// report the whole pause as elapsed time
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FrameLimiter;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{Duration, Instant};

    /// Blocking limiter for the native loop
    #[derive(Debug)]
    pub struct FrameLimiter {
        interval: Duration,
        last: Instant,
    }

    impl FrameLimiter {
        pub fn new(target_fps: u32) -> Self {
            Self {
                interval: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
                last: Instant::now(),
            }
        }

        /// Sleep until the next frame boundary; returns seconds since the
        /// previous call
        pub fn wait(&mut self) -> f32 {
            let due = self.last + self.interval;
            let now = Instant::now();
            if due > now {
                std::thread::sleep(due - now);
            }
            let now = Instant::now();
            let dt = now.duration_since(self.last).as_secs_f32();
            self.last = now;
            dt
        }
    }
}
