use instant::Instant;
use std::time::Duration;

/// Accumulates frame time for every time-dependent formula.
///
/// `elapsed_sec` grows without wraparound. Tests drive it through `advance`;
/// a live loop can call `tick` to measure the wall-clock delta instead.
#[derive(Clone, Debug)]
pub struct FrameClock {
    elapsed_sec: f64,
    last_dt: Duration,
    frames: u64,
    last_instant: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            elapsed_sec: 0.0,
            last_dt: Duration::ZERO,
            frames: 0,
            last_instant: None,
        }
    }

    /// Advance by an explicit delta.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed_sec += dt.as_secs_f64();
        self.last_dt = dt;
        self.frames += 1;
    }

    /// Wall-clock time since the previous `lap`, without advancing.
    ///
    /// The first call only starts the stopwatch and returns a zero delta.
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let dt = self
            .last_instant
            .map(|prev| now.duration_since(prev))
            .unwrap_or(Duration::ZERO);
        self.last_instant = Some(now);
        dt
    }

    /// Advance by the wall-clock time since the previous `tick`.
    pub fn tick(&mut self) -> Duration {
        let dt = self.lap();
        self.advance(dt);
        dt
    }

    #[inline]
    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }

    #[inline]
    pub fn last_dt(&self) -> Duration {
        self.last_dt
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
