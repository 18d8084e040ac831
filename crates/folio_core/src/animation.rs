//! Count-up animation for numeric stats.
//!
//! Counters start at 15% of their target so the first painted frame already
//! shows a plausible number, then climb linearly to the target.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Counter tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Time to reach the target (milliseconds).
    pub duration_ms: f64,
    /// Fraction of the target shown on the first frame.
    pub start_fraction: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1200.0,
            start_fraction: 0.15,
        }
    }
}

impl CounterConfig {
    /// Checks ranges.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidConfig`] for a negative duration or a start
    /// fraction outside `[0, 1]`.
    pub fn validate(&self) -> FolioResult<()> {
        if !(self.duration_ms.is_finite() && self.duration_ms >= 0.0) {
            return Err(FolioError::InvalidConfig(format!(
                "counter.duration_ms must be non-negative, got {}",
                self.duration_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.start_fraction) {
            return Err(FolioError::InvalidConfig(format!(
                "counter.start_fraction must be within [0, 1], got {}",
                self.start_fraction
            )));
        }
        Ok(())
    }
}

/// A single count-up from (a fraction of) zero to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: f64,
    duration_ms: f64,
    start_fraction: f64,
    started_at: Option<f64>,
    progress: f64,
}

impl CountUp {
    /// Creates a counter that has not started yet.
    #[must_use]
    pub fn new(target: f64, config: &CounterConfig) -> Self {
        Self {
            target: if target.is_finite() { target } else { 0.0 },
            duration_ms: config.duration_ms,
            start_fraction: config.start_fraction,
            started_at: None,
            progress: 0.0,
        }
    }

    /// Parses a `data-count` attribute. Missing or non-numeric values count to 0.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>, config: &CounterConfig) -> Self {
        let target = raw
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        Self::new(target, config)
    }

    /// Advances to timestamp `now_ms` and returns the value to display.
    ///
    /// The first call fixes the start time.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, now_ms: f64) -> i64 {
        let start = *self.started_at.get_or_insert(now_ms);
        self.progress = if self.duration_ms > 0.0 {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.value()
    }

    /// Value at the current progress.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn value(&self) -> i64 {
        let fraction = self.start_fraction + (1.0 - self.start_fraction) * self.progress;
        (self.target * fraction).floor() as i64
    }

    /// Returns true once the target is reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}
