use std::time::Instant;

use lightsout_data::Millis;

/// Monotonic millisecond clock anchored at session start.
///
/// `Copy`, so an input thread can stamp events on the same timeline as the
/// game loop.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    origin: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    pub fn at(&self, instant: Instant) -> Millis {
        instant.saturating_duration_since(self.origin).as_secs_f64() * 1000.0
    }

    /// Wall-clock instant for a session timestamp.
    pub fn instant_of(&self, at: Millis) -> Instant {
        self.origin + std::time::Duration::from_secs_f64(at.max(0.0) / 1000.0)
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}
