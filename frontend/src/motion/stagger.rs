use serde::Deserialize;

/// Per-item delay for cascading reveals: item `i` waits `i * step_ms`.
///
/// Delays are kept in whole milliseconds so the sequence is exact and
/// feeds straight into `gloo_timers`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Stagger {
    pub step_ms: u32,
}

impl Stagger {
    pub const NONE: Stagger = Stagger { step_ms: 0 };

    pub const fn new(step_ms: u32) -> Self {
        Self { step_ms }
    }

    pub fn delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        index.saturating_mul(self.step_ms)
    }
}
