//! Row-wise accessors over polars frames.
//!
//! The processed tables are small (one row per site), so metric code reads
//! them cell-by-cell through `AnyValue` instead of the columnar kernels.
//! Absent columns read as empty/none, matching the degradation policy.

use chrono::NaiveDate;
use polars::prelude::{AnyValue, DataFrame};

use enroll_ingest::{any_to_f64, any_to_string};

use crate::normalization::datetime::{parse_date, parse_iso_date};

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// The cell as a display string; empty for nulls and absent columns.
pub fn cell_string(df: &DataFrame, name: &str, idx: usize) -> String {
    match df.column(name) {
        Ok(column) => any_to_string(column.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => String::new(),
    }
}

/// The cell as f64, parsing string cells leniently.
pub fn cell_f64(df: &DataFrame, name: &str, idx: usize) -> Option<f64> {
    match df.column(name) {
        Ok(column) => any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => None,
    }
}

/// The cell as a date. ISO-coerced cells parse directly; raw cells fall back
/// to the lenient format list so metrics also work on unprocessed frames.
pub fn cell_date(df: &DataFrame, name: &str, idx: usize) -> Option<NaiveDate> {
    let raw = cell_string(df, name, idx);
    parse_iso_date(&raw).or_else(|| parse_date(&raw))
}

/// Lenient sum over a column; absent columns sum to zero.
pub fn column_sum(df: &DataFrame, name: &str) -> f64 {
    (0..df.height())
        .map(|idx| cell_f64(df, name, idx).unwrap_or(0.0))
        .sum()
}

/// All cells of a column as display strings.
pub fn string_values(df: &DataFrame, name: &str) -> Vec<String> {
    (0..df.height())
        .map(|idx| cell_string(df, name, idx))
        .collect()
}

/// Column labels in table order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}
