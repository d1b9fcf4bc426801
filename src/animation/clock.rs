use instant::Instant;
use std::time::Duration;

/// Measures the time between frames for hosts that drive animations themselves
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Option<Instant>,
    /// Upper bound on a single delta, so a stalled frame doesn't skip an animation
    max_delta: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            max_delta: Duration::from_millis(100),
        }
    }

    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Time since the previous call; zero on the first frame
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        delta.min(self.max_delta)
    }

    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
