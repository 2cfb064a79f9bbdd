//! Monotonic frame clock
//!
//! Measures the elapsed time between consecutive frames so the action engine
//! never has to assume a fixed timestep.

use std::time::Instant;
use tracing::trace;

/// Per-frame delta time source backed by [`Instant`]
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    // Timestamp of the previous tick, None until the first frame
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_tick: None }
    }

    /// Seconds elapsed since the previous tick (0 on the first tick)
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Same as [`FrameClock::tick`] with an explicit timestamp
    ///
    /// A timestamp earlier than the previous one yields 0 rather than a
    /// negative delta.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = match self.last_tick {
            Some(previous) => now.saturating_duration_since(previous).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        trace!("Frame delta: {:.4}s", dt);
        dt
    }

    /// Forget the previous tick so the next frame starts at dt = 0
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}
