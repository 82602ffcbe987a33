//! Forward-looking enrollment projections.

use chrono::{Datelike, NaiveDate};
use polars::prelude::DataFrame;

use enroll_model::{DashboardOptions, ProjectionPoint};
use enroll_model::schema::RANDOMIZED;
use enroll_transform::frame_utils::{column_sum, has_column};

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn next_month(start: NaiveDate) -> NaiveDate {
    let (year, month) = if start.month() == 12 {
        (start.year() + 1, 1)
    } else {
        (start.year(), start.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(start)
}

/// Month-start sequence covering `from`'s month through `until`'s month,
/// inclusive. Empty when `until` falls before `from`'s month.
pub fn month_sequence(from: NaiveDate, until: NaiveDate) -> Vec<NaiveDate> {
    let last = month_start(until);
    let mut months = Vec::new();
    let mut current = month_start(from);
    while current <= last {
        months.push(current);
        current = next_month(current);
    }
    months
}

/// Projects cumulative randomization targets month by month from `as_of`
/// through the projection end.
///
/// Screenings needed per month are grossed up by the screen-failure rate;
/// a degenerate rate at or above 100% falls back to the bare target rather
/// than dividing by zero.
pub fn project_enrollment(
    enrollment: &DataFrame,
    options: &DashboardOptions,
    sf_rate: f64,
) -> Vec<ProjectionPoint> {
    let current_cumulative = if has_column(enrollment, RANDOMIZED) {
        column_sum(enrollment, RANDOMIZED).round() as i64
    } else {
        0
    };

    let screenings_needed = if sf_rate < 100.0 {
        (options.target_per_month as f64 / (1.0 - sf_rate / 100.0)).round() as i64
    } else {
        options.target_per_month
    };

    month_sequence(options.as_of, options.projection_end)
        .into_iter()
        .enumerate()
        .map(|(idx, month)| ProjectionPoint {
            month_label: month.format("%b-%Y").to_string(),
            month,
            target_randomizations: options.target_per_month,
            cumulative_target: current_cumulative + options.target_per_month * (idx as i64 + 1),
            screenings_needed,
        })
        .collect()
}
