pub mod csv_table;
pub mod error;
pub mod frame;
pub mod polars_utils;

pub use csv_table::{CsvTable, read_csv_table};
pub use error::{IngestError, Result};
pub use frame::{read_csv_frame, table_to_frame};
pub use polars_utils::{any_to_f64, any_to_string, format_numeric, parse_f64};
