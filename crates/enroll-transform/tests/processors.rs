//! Tests for the three table processors.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use enroll_model::schema;
use enroll_transform::frame_utils::{cell_f64, cell_string, column_names, column_sum, has_column};
use enroll_transform::{process_enrollment, process_monthly, process_site};

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
fn enrollment_synonyms_are_renamed_and_coerced() {
    let raw = string_frame(&[
        ("SiteID", &["101", "102"]),
        ("Total Screened", &["10", "x"]),
        ("Screen Fails", &["2", "1"]),
        ("Enrolled", &["5", "3"]),
    ]);
    let processed = process_enrollment(&raw).expect("process enrollment");
    assert_eq!(
        column_names(&processed),
        vec!["Site ID", "Screened", "Screen Failed", "Randomized"]
    );
    // Malformed "x" coerces to zero, not an error.
    assert_eq!(column_sum(&processed, schema::SCREENED), 10.0);
    assert_eq!(column_sum(&processed, schema::RANDOMIZED), 8.0);
    assert_eq!(processed.height(), raw.height());
}

#[test]
fn padded_headers_are_stripped() {
    let raw = string_frame(&[("  Site ID  ", &["101"]), (" Screened", &["4"])]);
    let processed = process_enrollment(&raw).expect("process enrollment");
    assert_eq!(column_names(&processed), vec!["Site ID", "Screened"]);
    assert_eq!(cell_f64(&processed, schema::SCREENED, 0), Some(4.0));
}

#[test]
fn existing_canonical_column_wins_over_synonym() {
    // Both the canonical and a synonym are present; the synonym passes
    // through under its own name.
    let raw = string_frame(&[
        ("Site ID", &["101"]),
        ("SiteID", &["legacy-101"]),
        ("Screened", &["4"]),
    ]);
    let processed = process_enrollment(&raw).expect("process enrollment");
    assert_eq!(cell_string(&processed, "Site ID", 0), "101");
    assert_eq!(cell_string(&processed, "SiteID", 0), "legacy-101");
}

#[test]
fn processing_is_idempotent() {
    let raw = string_frame(&[
        ("Site Number", &["101", "102"]),
        ("Screened", &["10", "8"]),
    ]);
    let once = process_enrollment(&raw).expect("first pass");
    let twice = process_enrollment(&once).expect("second pass");
    assert_eq!(column_names(&once), column_names(&twice));
    assert_eq!(
        column_sum(&once, schema::SCREENED),
        column_sum(&twice, schema::SCREENED)
    );
}

#[test]
fn missing_canonical_columns_stay_absent() {
    let raw = string_frame(&[("Quarter", &["Q1"])]);
    let processed = process_enrollment(&raw).expect("process enrollment");
    assert!(!has_column(&processed, schema::SCREENED));
    assert!(has_column(&processed, "Quarter"));
    assert_eq!(processed.height(), 1);
}

#[test]
fn monthly_dates_coerce_and_month_columns_survive() {
    let raw = string_frame(&[
        ("Site ID", &["101"]),
        ("Subject Status", &["Randomized"]),
        ("1st Screening", &["15-Jan-2025"]),
        ("Mar-2025", &["3"]),
    ]);
    let processed = process_monthly(&raw).expect("process monthly");
    assert_eq!(cell_string(&processed, schema::FIRST_SCREENING, 0), "2025-01-15");
    assert_eq!(cell_string(&processed, "Mar-2025", 0), "3");
}

#[test]
fn site_roster_dates_coerce_with_unparseable_empty() {
    let raw = string_frame(&[
        ("Site ID", &["101", "102"]),
        ("Site Activated Date", &["01/15/2025", "pending"]),
        ("First Subject Screened Date", &["2025-02-01", ""]),
    ]);
    let processed = process_site(&raw).expect("process site");
    assert_eq!(column_names(&processed)[0], "Site Number");
    assert_eq!(cell_string(&processed, schema::ACTIVATION_DATE, 0), "2025-01-15");
    assert_eq!(cell_string(&processed, schema::ACTIVATION_DATE, 1), "");
    assert_eq!(
        cell_string(&processed, schema::FIRST_SCREENING_DATE, 0),
        "2025-02-01"
    );
}
