pub mod options;
pub mod records;
pub mod schema;

pub use options::{
    DEFAULT_SCREEN_FAILURE_RATE, DEFAULT_TARGET_PER_MONTH, DashboardOptions,
    default_projection_end,
};
pub use records::{
    MonthlyEnrollmentPoint, ProjectionPoint, SiteActivationMetrics, SupervisorMetrics,
};
pub use schema::TableKind;
