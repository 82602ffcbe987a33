//! Caller-supplied knobs for metric derivation.
//!
//! The core never reads the process clock or the environment; everything it
//! needs arrives through this struct so that repeated invocations over the
//! same inputs produce identical output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default monthly randomization target.
pub const DEFAULT_TARGET_PER_MONTH: i64 = 10;

/// Screen-failure rate assumed when neither table can support the
/// calculation. Inherited from the original dashboard as a placeholder, not
/// a validated clinical assumption.
pub const DEFAULT_SCREEN_FAILURE_RATE: f64 = 50.0;

/// Parameters consumed by the metrics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    /// Caller-supplied screen-failure rate in percent; 0 disables the
    /// override and lets the rate be derived from the data.
    pub sf_rate_override: f64,
    /// Randomizations targeted per calendar month.
    pub target_per_month: i64,
    /// Last month (inclusive) covered by enrollment projections.
    pub projection_end: NaiveDate,
    /// The "today" used for stalled-site elapsed-day calculations.
    pub as_of: NaiveDate,
}

impl DashboardOptions {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            sf_rate_override: 0.0,
            target_per_month: DEFAULT_TARGET_PER_MONTH,
            projection_end: default_projection_end(),
            as_of,
        }
    }

    #[must_use]
    pub fn with_target_per_month(mut self, target: i64) -> Self {
        self.target_per_month = target;
        self
    }

    #[must_use]
    pub fn with_projection_end(mut self, end: NaiveDate) -> Self {
        self.projection_end = end;
        self
    }

    #[must_use]
    pub fn with_sf_rate_override(mut self, rate: f64) -> Self {
        self.sf_rate_override = rate;
        self
    }
}

/// Default projection horizon carried over from the original dashboard
/// configuration.
pub fn default_projection_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 30).expect("static calendar date")
}
