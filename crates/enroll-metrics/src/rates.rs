//! Study-wide screen-failure rate.

use polars::prelude::DataFrame;
use tracing::debug;

use enroll_model::DEFAULT_SCREEN_FAILURE_RATE;
use enroll_model::schema::{
    SCREEN_FAILED, SCREENED, STATUS_SCREEN_FAILED, STATUS_TOTAL, SUBJECT_STATUS,
};
use enroll_transform::frame_utils::{column_sum, has_column, string_values};

/// Computes the screen-failure rate in percent.
///
/// A positive override wins outright. Otherwise the rate comes from the
/// enrollment summary's screened/screen-failed totals; failing that, from
/// the monthly summary's subject-status row counts; failing everything, the
/// fixed 50% fallback so the dashboard still renders a projection.
pub fn screen_failure_rate(enrollment: &DataFrame, monthly: &DataFrame, override_rate: f64) -> f64 {
    if override_rate > 0.0 {
        return override_rate;
    }

    if has_column(enrollment, SCREENED) && has_column(enrollment, SCREEN_FAILED) {
        let screened = column_sum(enrollment, SCREENED);
        if screened > 0.0 {
            let failed = column_sum(enrollment, SCREEN_FAILED);
            let rate = failed / screened * 100.0;
            debug!(rate, "screen-failure rate from enrollment totals");
            return rate;
        }
    }

    if has_column(monthly, SUBJECT_STATUS) {
        let statuses = string_values(monthly, SUBJECT_STATUS);
        let failed = statuses
            .iter()
            .filter(|status| status.as_str() == STATUS_SCREEN_FAILED)
            .count();
        let total = statuses
            .iter()
            .filter(|status| status.as_str() == STATUS_TOTAL)
            .count();
        if failed > 0 && total > 0 {
            let rate = failed as f64 / total as f64 * 100.0;
            debug!(rate, "screen-failure rate from monthly status counts");
            return rate;
        }
    }

    debug!(rate = DEFAULT_SCREEN_FAILURE_RATE, "screen-failure rate fallback");
    DEFAULT_SCREEN_FAILURE_RATE
}
