//! Supervisor (COSL) assignment derivation from the site roster.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use enroll_map::find_column_containing;
use enroll_model::schema::{ASSIGNED_COSL, COSL_NAME_POOL, SITE_NUMBER};
use enroll_transform::frame_utils::{cell_string, column_names};

/// Derives the site-to-supervisor assignment table.
///
/// Priority: an explicit COSL column, then an investigator column as a
/// stand-in, then a deterministic round-robin over the fixed name pool.
/// The first two keep one row per roster row; the fallback assigns each
/// distinct site number once, in first-seen order.
pub fn generate_assignments(site: &DataFrame) -> Result<DataFrame> {
    let headers = column_names(site);
    let source = find_column_containing(&headers, &["cosl"])
        .or_else(|| find_column_containing(&headers, &["pi", "investigator"]));

    if let Some(column) = source {
        debug!(column = column.as_str(), "using roster column for supervisor assignments");
        let mut site_numbers = Vec::with_capacity(site.height());
        let mut supervisors = Vec::with_capacity(site.height());
        for idx in 0..site.height() {
            site_numbers.push(cell_string(site, SITE_NUMBER, idx));
            supervisors.push(cell_string(site, &column, idx));
        }
        return assignment_frame(site_numbers, supervisors);
    }

    // No usable column anywhere: cycle the fixed pool over distinct sites.
    debug!("no COSL or investigator column; assigning from the fixed pool");
    let mut seen = BTreeSet::new();
    let mut site_numbers = Vec::new();
    for idx in 0..site.height() {
        let site_number = cell_string(site, SITE_NUMBER, idx);
        if seen.insert(site_number.clone()) {
            site_numbers.push(site_number);
        }
    }
    let supervisors: Vec<String> = site_numbers
        .iter()
        .enumerate()
        .map(|(idx, _)| COSL_NAME_POOL[idx % COSL_NAME_POOL.len()].to_string())
        .collect();
    assignment_frame(site_numbers, supervisors)
}

fn assignment_frame(site_numbers: Vec<String>, supervisors: Vec<String>) -> Result<DataFrame> {
    let columns: Vec<Column> = vec![
        Series::new(SITE_NUMBER.into(), site_numbers).into(),
        Series::new(ASSIGNED_COSL.into(), supervisors).into(),
    ];
    DataFrame::new(columns).context("assemble assignment frame")
}
