use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Monotonic elapsed-time counter. Advances only through explicit `tick`
/// calls while running; the core never reads a wall clock.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionClock {
    elapsed: Duration,
    running: bool,
}

impl SessionClock {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.running {
            self.elapsed += dt;
        }
    }
}
