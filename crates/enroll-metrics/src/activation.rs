//! Site-activation timing metrics.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use polars::prelude::{DataFrame, NamedFrom, Series};

use enroll_model::SiteActivationMetrics;
use enroll_model::schema::{
    ACTIVATION_DATE, DAYS_TO_FIRST_SCREENING, FIRST_RANDOMIZATION_DATE, FIRST_SCREENING_DATE,
    SITE_STATUS, STATUS_ACTIVE,
};
use enroll_transform::frame_utils::{cell_date, cell_string, has_column};
use enroll_transform::to_iso_date;

use crate::stats::{mean, median};

/// Enriches the site roster with `Days to First Screening` and derives the
/// roster-wide activation metrics.
///
/// A site with an activation date but no first screening gets the elapsed
/// days against `today`, a running counter that flags stalled sites. Sites
/// missing the activation date stay null.
pub fn site_activation_metrics(
    site: &DataFrame,
    today: NaiveDate,
) -> Result<(DataFrame, SiteActivationMetrics)> {
    let mut enriched = site.clone();
    let total_sites = enriched.height();

    // Re-coerce the date columns so the metrics also work when handed a
    // frame that never went through the site processor.
    for column in [
        ACTIVATION_DATE,
        FIRST_SCREENING_DATE,
        FIRST_RANDOMIZATION_DATE,
    ] {
        if !has_column(&enriched, column) {
            continue;
        }
        let values: Vec<String> = (0..total_sites)
            .map(|idx| to_iso_date(&cell_string(&enriched, column, idx)))
            .collect();
        enriched
            .with_column(Series::new(column.into(), values))
            .with_context(|| format!("coerce {column}"))?;
    }

    let mut days: Vec<Option<f64>> = Vec::with_capacity(total_sites);
    for idx in 0..total_sites {
        let activated = cell_date(&enriched, ACTIVATION_DATE, idx);
        let screened = cell_date(&enriched, FIRST_SCREENING_DATE, idx);
        days.push(match (activated, screened) {
            (Some(activated), Some(screened)) => {
                Some(screened.signed_duration_since(activated).num_days() as f64)
            }
            (Some(activated), None) => {
                Some(today.signed_duration_since(activated).num_days() as f64)
            }
            _ => None,
        });
    }
    enriched
        .with_column(Series::new(DAYS_TO_FIRST_SCREENING.into(), days.clone()))
        .context("attach days-to-first-screening")?;

    let active_sites = if has_column(&enriched, SITE_STATUS) {
        (0..total_sites)
            .filter(|&idx| cell_string(&enriched, SITE_STATUS, idx) == STATUS_ACTIVE)
            .count()
    } else {
        0
    };
    let sites_not_screening = (0..total_sites)
        .filter(|&idx| cell_date(&enriched, FIRST_SCREENING_DATE, idx).is_none())
        .count();
    let sites_not_randomizing = (0..total_sites)
        .filter(|&idx| cell_date(&enriched, FIRST_RANDOMIZATION_DATE, idx).is_none())
        .count();
    let samples: Vec<f64> = days.iter().flatten().copied().collect();

    let mut metrics = SiteActivationMetrics {
        total_sites,
        active_sites,
        inactive_sites: total_sites - active_sites,
        avg_days_to_first_screening: mean(&samples),
        median_days_to_first_screening: median(&samples),
        sites_not_screening,
        sites_not_randomizing,
        ..SiteActivationMetrics::default()
    };
    if total_sites > 0 {
        let total = total_sites as f64;
        metrics.pct_active = Some(active_sites as f64 / total * 100.0);
        metrics.pct_not_screening = Some(sites_not_screening as f64 / total * 100.0);
        metrics.pct_not_randomizing = Some(sites_not_randomizing as f64 / total * 100.0);
    }

    Ok((enriched, metrics))
}
