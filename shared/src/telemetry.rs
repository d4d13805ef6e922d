use std::time::{Duration, Instant};

/// Wall-clock timer for a single backend round trip.
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed().as_millis()
    }
}

impl Default for RequestTimer {
    fn default() -> Self {
        Self::start()
    }
}
