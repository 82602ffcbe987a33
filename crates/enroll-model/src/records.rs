//! Derived-metric record types returned by the metrics engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month of observed randomizations, extracted from the monthly summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEnrollmentPoint {
    /// Source column label, e.g. "Mar-2025".
    pub month_label: String,
    /// First day of the calendar month the label parsed to.
    pub month: NaiveDate,
    /// Randomizations recorded in that month.
    pub randomized: f64,
    /// Running total through that month.
    pub cumulative: f64,
}

/// One month of forward-looking enrollment targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Month label in "Mon-YYYY" form.
    pub month_label: String,
    /// First day of the projected month.
    pub month: NaiveDate,
    pub target_randomizations: i64,
    /// Observed randomizations plus the target accrued through this month.
    pub cumulative_target: i64,
    /// Screenings required to hit the monthly target at the assumed
    /// screen-failure rate.
    pub screenings_needed: i64,
}

/// Aggregate site-activation metrics for the whole roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteActivationMetrics {
    pub total_sites: usize,
    pub active_sites: usize,
    pub inactive_sites: usize,
    pub avg_days_to_first_screening: Option<f64>,
    pub median_days_to_first_screening: Option<f64>,
    /// Sites with no first-screening date on record.
    pub sites_not_screening: usize,
    /// Sites with no first-randomization date on record.
    pub sites_not_randomizing: usize,
    // Percentages are only populated when the roster is non-empty.
    pub pct_active: Option<f64>,
    pub pct_not_screening: Option<f64>,
    pub pct_not_randomizing: Option<f64>,
}

/// Per-supervisor rollup across assigned sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupervisorMetrics {
    pub supervisor: String,
    pub sites_assigned: usize,
    pub sites_screened: usize,
    pub sites_not_screened: usize,
    pub sites_randomized: usize,
    pub sites_not_randomized: usize,
    /// Mean of the per-site days-to-first-screening values present in the
    /// group; `None` when no site in the group has one.
    pub avg_days_to_first_screening: Option<f64>,
    /// Pooled screen-failure rate over the group's enrollment rows; `None`
    /// when the group has no screened subjects.
    pub screen_failure_rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supervisor_metrics_serializes() {
        let metrics = SupervisorMetrics {
            supervisor: "Jayden Cho".to_string(),
            sites_assigned: 3,
            sites_screened: 2,
            sites_not_screened: 1,
            sites_randomized: 1,
            sites_not_randomized: 2,
            avg_days_to_first_screening: Some(41.5),
            screen_failure_rate: None,
        };
        let json = serde_json::to_string(&metrics).expect("serialize metrics");
        let round: SupervisorMetrics = serde_json::from_str(&json).expect("deserialize metrics");
        assert_eq!(round, metrics);
    }

    #[test]
    fn activation_metrics_default_is_empty() {
        let metrics = SiteActivationMetrics::default();
        assert_eq!(metrics.total_sites, 0);
        assert!(metrics.avg_days_to_first_screening.is_none());
        assert!(metrics.pct_active.is_none());
    }
}
