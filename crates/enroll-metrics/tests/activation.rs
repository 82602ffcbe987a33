//! Tests for site-activation metrics.

use chrono::{Duration, NaiveDate};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use enroll_metrics::site_activation_metrics;
use enroll_model::schema::DAYS_TO_FIRST_SCREENING;
use enroll_transform::frame_utils::cell_f64;

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

#[test]
fn days_between_activation_and_first_screening() {
    let site = string_frame(&[
        ("Site Number", &["101"]),
        ("Date of Activation", &["2025-01-01"]),
        ("Date of First Screening", &["2025-02-10"]),
    ]);
    let (enriched, _) =
        site_activation_metrics(&site, date(2025, 6, 1)).expect("compute metrics");
    assert_eq!(cell_f64(&enriched, DAYS_TO_FIRST_SCREENING, 0), Some(40.0));
}

#[test]
fn stalled_site_counts_days_against_today() {
    let today = date(2025, 6, 1);
    let activated = today - Duration::days(30);
    let activated_cell = activated.format("%Y-%m-%d").to_string();
    let site = string_frame(&[
        ("Site Number", &["101"]),
        ("Date of Activation", &[activated_cell.as_str()]),
        ("Date of First Screening", &[""]),
    ]);
    let (enriched, metrics) = site_activation_metrics(&site, today).expect("compute metrics");
    assert_eq!(cell_f64(&enriched, DAYS_TO_FIRST_SCREENING, 0), Some(30.0));
    assert_eq!(metrics.sites_not_screening, 1);
}

#[test]
fn missing_activation_yields_null_days() {
    let site = string_frame(&[
        ("Site Number", &["101"]),
        ("Date of Activation", &[""]),
        ("Date of First Screening", &["2025-02-10"]),
    ]);
    let (enriched, metrics) =
        site_activation_metrics(&site, date(2025, 6, 1)).expect("compute metrics");
    assert_eq!(cell_f64(&enriched, DAYS_TO_FIRST_SCREENING, 0), None);
    assert_eq!(metrics.avg_days_to_first_screening, None);
    assert_eq!(metrics.median_days_to_first_screening, None);
}

#[test]
fn raw_date_formats_are_coerced_before_derivation() {
    let site = string_frame(&[
        ("Site Number", &["101"]),
        ("Date of Activation", &["01-Jan-2025"]),
        ("Date of First Screening", &["10-Feb-2025"]),
    ]);
    let (enriched, _) =
        site_activation_metrics(&site, date(2025, 6, 1)).expect("compute metrics");
    assert_eq!(cell_f64(&enriched, DAYS_TO_FIRST_SCREENING, 0), Some(40.0));
}

#[test]
fn roster_counts_and_percentages() {
    let site = string_frame(&[
        ("Site Number", &["101", "102", "103", "104"]),
        ("Site Status", &["Active", "Active", "Closed", "Active"]),
        (
            "Date of Activation",
            &["2025-01-01", "2025-01-01", "", "2025-01-01"],
        ),
        (
            "Date of First Screening",
            &["2025-02-01", "", "", "2025-01-21"],
        ),
        ("Date of First Randomization", &["2025-03-01", "", "", ""]),
    ]);
    let (_, metrics) = site_activation_metrics(&site, date(2025, 6, 1)).expect("compute metrics");
    assert_eq!(metrics.total_sites, 4);
    assert_eq!(metrics.active_sites, 3);
    assert_eq!(metrics.inactive_sites, 1);
    assert_eq!(metrics.sites_not_screening, 2);
    assert_eq!(metrics.sites_not_randomizing, 3);
    assert_eq!(metrics.pct_active, Some(75.0));
    assert_eq!(metrics.pct_not_screening, Some(50.0));
    assert_eq!(metrics.pct_not_randomizing, Some(75.0));
    // Screened sites: 31 and 20 days.
    assert_eq!(metrics.median_days_to_first_screening, Some(31.0));
}

#[test]
fn missing_status_column_means_zero_active() {
    let site = string_frame(&[("Site Number", &["101", "102"])]);
    let (_, metrics) = site_activation_metrics(&site, date(2025, 6, 1)).expect("compute metrics");
    assert_eq!(metrics.active_sites, 0);
    assert_eq!(metrics.inactive_sites, 2);
    assert_eq!(metrics.sites_not_screening, 2);
}

#[test]
fn empty_roster_omits_percentages() {
    let site = string_frame(&[("Site Number", &[])]);
    let (_, metrics) = site_activation_metrics(&site, date(2025, 6, 1)).expect("compute metrics");
    assert_eq!(metrics.total_sites, 0);
    assert_eq!(metrics.pct_active, None);
    assert_eq!(metrics.pct_not_screening, None);
}
