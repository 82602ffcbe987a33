//! Table processors: raw spreadsheet frames to canonical, coerced frames.
//!
//! Every processor follows the same three stages: strip the column labels,
//! rename synonym matches to their canonical labels, coerce the schema's
//! numeric and date columns. Unrelated columns pass through untouched in
//! their original order, and the row count is always preserved. Nothing here
//! errors on missing or malformed data; the only failure mode is a
//! structurally broken frame (duplicate column labels).

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};
use tracing::{debug, warn};

use enroll_ingest::any_to_string;
use enroll_map::{rename_plan, suggest_unmatched, unmatched_canonicals};
use enroll_model::schema::TableKind;

use crate::normalization::datetime::to_iso_date;
use crate::normalization::numeric::parse_lenient;

/// Cleans an enrollment summary (screened / screen-failed / randomized
/// counts per site).
pub fn process_enrollment(df: &DataFrame) -> Result<DataFrame> {
    process_table(df, TableKind::Enrollment)
}

/// Cleans a monthly summary (per-subject-status rows with dynamic month
/// columns).
pub fn process_monthly(df: &DataFrame) -> Result<DataFrame> {
    process_table(df, TableKind::Monthly)
}

/// Cleans a site roster (activation and first-screening/randomization
/// dates).
pub fn process_site(df: &DataFrame) -> Result<DataFrame> {
    process_table(df, TableKind::Site)
}

pub fn process_table(df: &DataFrame, kind: TableKind) -> Result<DataFrame> {
    let raw_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let stripped: Vec<String> = raw_names.iter().map(|name| strip_label(name)).collect();

    let plan = rename_plan(&stripped, kind.synonym_map());
    for canonical in unmatched_canonicals(&stripped, kind.synonym_map(), &plan) {
        let suggestions =
            suggest_unmatched(&[canonical.clone()], &stripped, kind.synonym_map());
        match suggestions.first() {
            Some(near_miss) => warn!(
                table = kind.label(),
                column = canonical.as_str(),
                candidate = near_miss.header.as_str(),
                "canonical column missing; near-miss header present"
            ),
            None => debug!(
                table = kind.label(),
                column = canonical.as_str(),
                "canonical column missing"
            ),
        }
    }

    let numeric = kind.numeric_columns();
    let dates = kind.date_columns();
    let mut columns: Vec<Column> = Vec::with_capacity(raw_names.len());
    for (idx, raw_name) in raw_names.iter().enumerate() {
        let out_name = plan
            .iter()
            .find(|(source, _)| *source == stripped[idx])
            .map(|(_, target)| target.clone())
            .unwrap_or_else(|| stripped[idx].clone());

        let source = df
            .column(raw_name)
            .with_context(|| format!("column {raw_name} disappeared during processing"))?;
        let height = df.height();

        if numeric.contains(&out_name.as_str()) {
            let mut values: Vec<f64> = Vec::with_capacity(height);
            for row in 0..height {
                let cell = any_to_string(source.get(row).unwrap_or(AnyValue::Null));
                values.push(parse_lenient(&cell).or_zero());
            }
            columns.push(Series::new(out_name.as_str().into(), values).into());
        } else if dates.contains(&out_name.as_str()) {
            let mut values: Vec<String> = Vec::with_capacity(height);
            for row in 0..height {
                let cell = any_to_string(source.get(row).unwrap_or(AnyValue::Null));
                values.push(to_iso_date(&cell));
            }
            columns.push(Series::new(out_name.as_str().into(), values).into());
        } else {
            let mut values: Vec<String> = Vec::with_capacity(height);
            for row in 0..height {
                values.push(any_to_string(source.get(row).unwrap_or(AnyValue::Null)));
            }
            columns.push(Series::new(out_name.as_str().into(), values).into());
        }
    }

    DataFrame::new(columns).with_context(|| format!("assemble processed {} frame", kind.label()))
}

fn strip_label(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
