//! Conversion of loaded string tables into polars frames.

use std::path::Path;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::Result;

/// Builds an all-string `DataFrame` from a loaded table, one column per
/// header in source order. Duplicate header labels are a structural failure
/// and surface as an error.
pub fn table_to_frame(table: &CsvTable) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (idx, header) in table.headers.iter().enumerate() {
        let mut values: Vec<String> = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            values.push(row.get(idx).cloned().unwrap_or_default());
        }
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    Ok(DataFrame::new(columns)?)
}

/// Reads a CSV export straight into a `DataFrame`.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let table = read_csv_table(path)?;
    table_to_frame(&table)
}
