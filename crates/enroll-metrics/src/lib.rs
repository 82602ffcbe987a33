pub mod activation;
pub mod assignments;
pub mod monthly;
pub mod pipeline;
pub mod projections;
pub mod rates;
pub mod stats;
pub mod supervisors;

pub use activation::site_activation_metrics;
pub use assignments::generate_assignments;
pub use monthly::{extract_monthly_enrollment, month_columns};
pub use pipeline::{DashboardData, build_dashboard};
pub use projections::{month_sequence, month_start, project_enrollment};
pub use rates::screen_failure_rate;
pub use supervisors::{join_key, merge_assignments, supervisor_rollup};
