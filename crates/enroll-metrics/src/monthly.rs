//! Monthly randomization extraction from the dynamic month columns.

use chrono::NaiveDate;
use polars::prelude::DataFrame;
use tracing::debug;

use enroll_model::MonthlyEnrollmentPoint;
use enroll_model::schema::{NON_MONTH_COLUMNS, STATUS_RANDOMIZED, SUBJECT_STATUS};
use enroll_transform::frame_utils::{cell_f64, cell_string, column_names};
use enroll_transform::parse_month_label;

/// Discovers the month columns of a monthly summary, sorted chronologically
/// by their parsed date rather than table order.
pub fn month_columns(monthly: &DataFrame) -> Vec<(String, NaiveDate)> {
    let mut matched: Vec<(String, NaiveDate)> = column_names(monthly)
        .into_iter()
        .filter(|label| !NON_MONTH_COLUMNS.contains(&label.as_str()))
        .filter_map(|label| parse_month_label(&label).map(|month| (label, month)))
        .collect();
    matched.sort_by_key(|(_, month)| *month);
    matched
}

/// Sums randomizations per month across rows whose subject status is
/// "Randomized", carrying a running cumulative total. Returns `None` when
/// the table has no month columns at all; the caller treats that as "no
/// monthly breakdown available".
pub fn extract_monthly_enrollment(monthly: &DataFrame) -> Option<Vec<MonthlyEnrollmentPoint>> {
    let columns = month_columns(monthly);
    if columns.is_empty() {
        debug!("no month columns found in monthly summary");
        return None;
    }

    let randomized_rows: Vec<usize> = (0..monthly.height())
        .filter(|&idx| cell_string(monthly, SUBJECT_STATUS, idx) == STATUS_RANDOMIZED)
        .collect();

    let mut cumulative = 0.0;
    let mut points = Vec::with_capacity(columns.len());
    for (label, month) in columns {
        let randomized: f64 = randomized_rows
            .iter()
            .map(|&idx| cell_f64(monthly, &label, idx).unwrap_or(0.0))
            .sum();
        cumulative += randomized;
        points.push(MonthlyEnrollmentPoint {
            month_label: label,
            month,
            randomized,
            cumulative,
        });
    }
    Some(points)
}
