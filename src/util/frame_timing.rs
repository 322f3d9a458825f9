//! Frame clock producing the `now`/`dt` pair fed to every tick.

use web_time::Instant;

/// Timestamps handed to the view controller for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Milliseconds since the clock was created.
    pub now_ms: f64,
    /// Milliseconds since the previous tick (never negative).
    pub dt_ms: f32,
}

/// Frame clock producing per-frame deltas with a smoothed FPS readout.
pub struct FrameClock {
    /// Clock origin; `now_ms` is measured from here.
    started: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single delta (e.g. after the tab was hidden)
    max_dt_ms: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a new clock. Deltas longer than `max_dt_ms` are clamped.
    #[must_use]
    pub fn new(max_dt_ms: f32) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            max_dt_ms: max_dt_ms.max(0.0),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance to the current instant and return the frame's timestamps.
    pub fn tick(&mut self) -> FrameTick {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTick {
            now_ms: now.duration_since(self.started).as_secs_f64() * 1000.0,
            dt_ms: (frame_time * 1000.0).min(self.max_dt_ms),
        }
    }

    /// Milliseconds since the clock was created, without advancing it.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_monotonic_and_bounded() {
        let mut clock = FrameClock::new(50.0);
        let a = clock.tick();
        let b = clock.tick();
        assert!(b.now_ms >= a.now_ms);
        assert!(a.dt_ms >= 0.0 && a.dt_ms <= 50.0);
        assert!(b.dt_ms >= 0.0 && b.dt_ms <= 50.0);
    }

    #[test]
    fn zero_cap_forces_zero_delta() {
        let mut clock = FrameClock::new(0.0);
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert_eq!(clock.tick().dt_ms, 0.0);
    }
}
