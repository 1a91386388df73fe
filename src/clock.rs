use std::time::Duration;

/// Longest frame time fed into the accumulator. Longer stalls (window drag,
/// debugger) are dropped rather than replayed as a burst of ticks.
pub const MAX_FRAME: Duration = Duration::from_millis(250);

/// Fixed-rate update scheduler (accumulator pattern).
///
/// Rendering runs at whatever rate the platform delivers frames; game state
/// advances in whole ticks of exactly `step`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    ticks: u64,
}

impl FixedTimestep {
    /// `ups` updates per second; zero is treated as one.
    pub fn new(ups: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / ups.max(1),
            accumulator: Duration::ZERO,
            ticks: 0,
        }
    }

    pub fn step(&self) -> Duration { self.step }
    /// Ticks produced since creation.
    pub fn ticks(&self) -> u64 { self.ticks }

    /// Add `elapsed` wall time (capped at [`MAX_FRAME`]) and return how many
    /// ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed.min(MAX_FRAME);
        let mut due = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            due += 1;
        }
        self.ticks += due as u64;
        due
    }

    /// Fraction of the next tick already accumulated, in `[0, 1)`.
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.step.as_secs_f32()
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(50)
    }
}
