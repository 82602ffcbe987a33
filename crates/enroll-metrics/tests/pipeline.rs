//! End-to-end tests for the dashboard derivation pipeline.

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use enroll_metrics::build_dashboard;
use enroll_model::DashboardOptions;
use enroll_model::schema::{ASSIGNED_COSL, COSL_NAME_POOL};
use enroll_transform::frame_utils::cell_string;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn string_frame(columns: &[(&str, &[&str])]) -> DataFrame {
    let built: Vec<Column> = columns
        .iter()
        .map(|(name, values)| {
            let owned: Vec<String> = values.iter().map(|value| (*value).to_string()).collect();
            Series::new((*name).into(), owned).into()
        })
        .collect();
    DataFrame::new(built).expect("build test frame")
}

fn options() -> DashboardOptions {
    DashboardOptions::new(date(2025, 3, 15)).with_projection_end(date(2025, 5, 31))
}

#[test]
fn full_pipeline_over_all_three_tables() {
    let enrollment = string_frame(&[
        ("SiteID", &["101", "102"]),
        ("Total Screened", &["100", "50"]),
        ("Screen Fails", &["20", "5"]),
        ("Enrolled", &["30", "10"]),
    ]);
    let monthly = string_frame(&[
        ("Site ID", &["101", "102"]),
        ("Subject Status", &["Randomized", "Randomized"]),
        ("Feb-2025", &["2", "1"]),
        ("Jan-2025", &["1", "0"]),
    ]);
    let site = string_frame(&[
        ("Site ID", &["101", "102"]),
        ("Site Activated Date", &["01-Jan-2025", "15-Jan-2025"]),
        ("First Subject Screened Date", &["01-Feb-2025", ""]),
        ("COSL", &["Ana Ruiz", "Ben Ode"]),
    ]);

    let data = build_dashboard(Some(&enrollment), Some(&monthly), Some(&site), &options())
        .expect("build dashboard");

    // Rate from enrollment totals: 25 of 150.
    assert!((data.screen_failure_rate - 100.0 * 25.0 / 150.0).abs() < 1e-9);

    let points = data.monthly_enrollment.expect("monthly breakdown");
    assert_eq!(points[0].month_label, "Jan-2025");
    assert_eq!(points[1].cumulative, 4.0);

    // Projections start from the 40 observed randomizations.
    assert_eq!(data.projections.len(), 3);
    assert_eq!(data.projections[0].cumulative_target, 50);

    let metrics = data.site_metrics.expect("site metrics");
    assert_eq!(metrics.total_sites, 2);
    assert_eq!(metrics.sites_not_screening, 1);

    let sites = data.sites.expect("enriched roster");
    assert_eq!(cell_string(&sites, ASSIGNED_COSL, 0), "Ana Ruiz");

    assert_eq!(data.supervisor_metrics.len(), 2);
    assert_eq!(data.supervisor_metrics[0].supervisor, "Ana Ruiz");
    assert_eq!(data.supervisor_metrics[0].sites_screened, 1);
}

#[test]
fn missing_inputs_degrade_section_by_section() {
    let data = build_dashboard(None, None, None, &options()).expect("build dashboard");
    assert!(data.enrollment.is_none());
    assert!(data.monthly_enrollment.is_none());
    assert!(data.site_metrics.is_none());
    assert!(data.supervisor_metrics.is_empty());
    // The projection table still renders, on the fallback rate.
    assert_eq!(data.screen_failure_rate, 50.0);
    assert_eq!(data.projections.len(), 3);
    assert_eq!(data.projections[0].screenings_needed, 20);
}

#[test]
fn roster_without_supervisor_columns_uses_the_pool() {
    let site = string_frame(&[("Site Number", &["201", "202", "203"])]);
    let data =
        build_dashboard(None, None, Some(&site), &options()).expect("build dashboard");
    let assignments = data.assignments.expect("assignments");
    assert_eq!(assignments.height(), 3);
    assert_eq!(cell_string(&assignments, ASSIGNED_COSL, 0), COSL_NAME_POOL[0]);
    assert_eq!(
        data.supervisor_metrics.len(),
        3,
        "each pooled supervisor covers one site"
    );
}
