pub mod frame_utils;
pub mod normalization;
pub mod processors;

pub use normalization::datetime::{parse_date, parse_iso_date, parse_month_label, to_iso_date};
pub use normalization::numeric::{LenientNumber, parse_lenient};
pub use processors::{process_enrollment, process_monthly, process_site, process_table};
