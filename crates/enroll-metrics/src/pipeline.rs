//! End-to-end dashboard derivation from raw frames.
//!
//! This is the one orchestration seam between the pure metric functions and
//! the presentation layer. Any of the three inputs may be absent; the
//! corresponding report sections degrade to `None` instead of erroring.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::info;

use enroll_model::{
    DashboardOptions, MonthlyEnrollmentPoint, ProjectionPoint, SiteActivationMetrics,
    SupervisorMetrics,
};
use enroll_transform::{process_enrollment, process_monthly, process_site};

use crate::activation::site_activation_metrics;
use crate::assignments::generate_assignments;
use crate::monthly::extract_monthly_enrollment;
use crate::projections::project_enrollment;
use crate::rates::screen_failure_rate;
use crate::supervisors::{merge_assignments, supervisor_rollup};

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Cleaned enrollment summary.
    pub enrollment: Option<DataFrame>,
    /// Cleaned monthly summary.
    pub monthly: Option<DataFrame>,
    /// Cleaned site roster, enriched with days-to-first-screening and the
    /// merged supervisor assignment.
    pub sites: Option<DataFrame>,
    /// Derived site-to-supervisor assignment table.
    pub assignments: Option<DataFrame>,
    pub screen_failure_rate: f64,
    pub monthly_enrollment: Option<Vec<MonthlyEnrollmentPoint>>,
    pub projections: Vec<ProjectionPoint>,
    pub site_metrics: Option<SiteActivationMetrics>,
    pub supervisor_metrics: Vec<SupervisorMetrics>,
}

/// Runs the full derivation over whichever raw tables the caller has.
pub fn build_dashboard(
    enrollment_raw: Option<&DataFrame>,
    monthly_raw: Option<&DataFrame>,
    site_raw: Option<&DataFrame>,
    options: &DashboardOptions,
) -> Result<DashboardData> {
    let enrollment = enrollment_raw
        .map(process_enrollment)
        .transpose()
        .context("process enrollment summary")?;
    let monthly = monthly_raw
        .map(process_monthly)
        .transpose()
        .context("process monthly summary")?;
    let site = site_raw
        .map(process_site)
        .transpose()
        .context("process site roster")?;

    let empty = DataFrame::default();
    let sf_rate = screen_failure_rate(
        enrollment.as_ref().unwrap_or(&empty),
        monthly.as_ref().unwrap_or(&empty),
        options.sf_rate_override,
    );
    info!(rate = sf_rate, "derived screen-failure rate");

    let monthly_enrollment = monthly.as_ref().and_then(extract_monthly_enrollment);
    let projections = project_enrollment(
        enrollment.as_ref().unwrap_or(&empty),
        options,
        sf_rate,
    );

    let (sites, site_metrics, assignments, supervisor_metrics) = match site {
        Some(frame) => {
            let assignments = generate_assignments(&frame)?;
            let (enriched, metrics) = site_activation_metrics(&frame, options.as_of)?;
            let merged = merge_assignments(&enriched, &assignments)?;
            let rollup = supervisor_rollup(&merged, enrollment.as_ref().unwrap_or(&empty));
            info!(
                sites = metrics.total_sites,
                supervisors = rollup.len(),
                "derived site and supervisor metrics"
            );
            (Some(merged), Some(metrics), Some(assignments), rollup)
        }
        None => (None, None, None, Vec::new()),
    };

    Ok(DashboardData {
        enrollment,
        monthly,
        sites,
        assignments,
        screen_failure_rate: sf_rate,
        monthly_enrollment,
        projections,
        site_metrics,
        supervisor_metrics,
    })
}
