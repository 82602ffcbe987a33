//! Per-supervisor (COSL) rollups.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, NamedFrom, Series};

use enroll_ingest::parse_f64;
use enroll_model::SupervisorMetrics;
use enroll_model::schema::{
    ASSIGNED_COSL, DAYS_TO_FIRST_SCREENING, FIRST_RANDOMIZATION_DATE, FIRST_SCREENING_DATE,
    SCREEN_FAILED, SCREENED, SITE_ID, SITE_NUMBER,
};
use enroll_transform::frame_utils::{cell_date, cell_f64, cell_string, has_column};

use crate::stats::mean;

/// Normalizes a site identifier for joining. Exports disagree on typing
/// (one file carries `101`, another `"101.0"`, a third `"0101"`), so whole
/// numbers collapse to their integer form and everything else joins as the
/// trimmed string. Skipping this coercion makes the join silently match
/// nothing, which is a correctness bug, not a degradation.
pub fn join_key(raw: &str) -> String {
    let trimmed = raw.trim();
    match parse_f64(trimmed) {
        Some(value) if value.fract() == 0.0 => format!("{}", value as i64),
        _ => trimmed.to_string(),
    }
}

/// Left-joins supervisor assignments onto the site roster by site number.
/// Unassigned sites get an empty supervisor cell.
pub fn merge_assignments(site: &DataFrame, assignments: &DataFrame) -> Result<DataFrame> {
    let mut lookup: BTreeMap<String, String> = BTreeMap::new();
    for idx in 0..assignments.height() {
        let key = join_key(&cell_string(assignments, SITE_NUMBER, idx));
        let supervisor = cell_string(assignments, ASSIGNED_COSL, idx);
        lookup.entry(key).or_insert(supervisor);
    }

    let supervisors: Vec<String> = (0..site.height())
        .map(|idx| {
            let key = join_key(&cell_string(site, SITE_NUMBER, idx));
            lookup.get(&key).cloned().unwrap_or_default()
        })
        .collect();

    let mut merged = site.clone();
    merged
        .with_column(Series::new(ASSIGNED_COSL.into(), supervisors))
        .context("attach supervisor assignments")?;
    Ok(merged)
}

/// Rolls the assigned site roster up to one row per supervisor, in
/// first-seen order. Roster rows without a supervisor are skipped.
///
/// Screen-failure rates pool the enrollment totals of each group's sites:
/// `100 × Σ failed / Σ screened`, null when the group screened nobody.
pub fn supervisor_rollup(site: &DataFrame, enrollment: &DataFrame) -> Vec<SupervisorMetrics> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for idx in 0..site.height() {
        let supervisor = cell_string(site, ASSIGNED_COSL, idx);
        if supervisor.trim().is_empty() {
            continue;
        }
        if !groups.contains_key(&supervisor) {
            order.push(supervisor.clone());
        }
        groups.entry(supervisor).or_default().push(idx);
    }

    // Enrollment totals per coerced site id, built once for all groups.
    let mut enrollment_totals: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    if has_column(enrollment, SITE_ID)
        && has_column(enrollment, SCREENED)
        && has_column(enrollment, SCREEN_FAILED)
    {
        for idx in 0..enrollment.height() {
            let key = join_key(&cell_string(enrollment, SITE_ID, idx));
            let entry = enrollment_totals.entry(key).or_insert((0.0, 0.0));
            entry.0 += cell_f64(enrollment, SCREENED, idx).unwrap_or(0.0);
            entry.1 += cell_f64(enrollment, SCREEN_FAILED, idx).unwrap_or(0.0);
        }
    }

    let mut rollup = Vec::with_capacity(order.len());
    for supervisor in order {
        let rows = &groups[&supervisor];
        let sites_assigned = rows.len();
        let sites_screened = rows
            .iter()
            .filter(|&&idx| cell_date(site, FIRST_SCREENING_DATE, idx).is_some())
            .count();
        let sites_randomized = rows
            .iter()
            .filter(|&&idx| cell_date(site, FIRST_RANDOMIZATION_DATE, idx).is_some())
            .count();
        let day_samples: Vec<f64> = rows
            .iter()
            .filter_map(|&idx| cell_f64(site, DAYS_TO_FIRST_SCREENING, idx))
            .collect();

        let site_keys: BTreeSet<String> = rows
            .iter()
            .map(|&idx| join_key(&cell_string(site, SITE_NUMBER, idx)))
            .collect();
        let (screened_sum, failed_sum) = site_keys
            .iter()
            .filter_map(|key| enrollment_totals.get(key))
            .fold((0.0, 0.0), |acc, (screened, failed)| {
                (acc.0 + screened, acc.1 + failed)
            });
        let screen_failure_rate = if screened_sum > 0.0 {
            Some(failed_sum / screened_sum * 100.0)
        } else {
            None
        };

        rollup.push(SupervisorMetrics {
            supervisor,
            sites_assigned,
            sites_screened,
            sites_not_screened: sites_assigned - sites_screened,
            sites_randomized,
            sites_not_randomized: sites_assigned - sites_randomized,
            avg_days_to_first_screening: mean(&day_samples),
            screen_failure_rate,
        });
    }
    rollup
}
