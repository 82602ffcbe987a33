//! Command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use polars::prelude::DataFrame;
use tracing::info;

use enroll_ingest::read_csv_frame;
use enroll_metrics::{DashboardData, build_dashboard};
use enroll_model::{DashboardOptions, default_projection_end};

use crate::cli::ReportArgs;

/// Loads whichever exports were supplied and runs the full derivation.
pub fn run_report(args: &ReportArgs) -> Result<(DashboardData, DashboardOptions)> {
    let enrollment = load_frame(args.enrollment.as_deref())?;
    let monthly = load_frame(args.monthly.as_deref())?;
    let sites = load_frame(args.sites.as_deref())?;

    // The core never reads the clock; resolve "today" once at the boundary.
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let options = DashboardOptions::new(as_of)
        .with_target_per_month(args.target_per_month)
        .with_projection_end(args.projection_end.unwrap_or_else(default_projection_end))
        .with_sf_rate_override(args.sf_rate_override);

    let data = build_dashboard(
        enrollment.as_ref(),
        monthly.as_ref(),
        sites.as_ref(),
        &options,
    )?;
    Ok((data, options))
}

fn load_frame(path: Option<&Path>) -> Result<Option<DataFrame>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let frame = read_csv_frame(path).with_context(|| format!("load {}", path.display()))?;
    info!(path = %path.display(), rows = frame.height(), "loaded table");
    Ok(Some(frame))
}
