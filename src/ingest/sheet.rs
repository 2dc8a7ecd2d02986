//! Raw sheet ingestion. The file is read once, before the pipeline runs;
//! everything downstream only ever sees the immutable RawSheet built here.

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// The source sheet as plain strings: header names plus the data rows below
/// them. `first_data_row` is the 1-indexed file row of the first data row so
/// rejects can point back at the original line.
#[derive(Debug, Clone)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub first_data_row: usize,
}

/// Read the CSV rendition of a punch sheet.
///
/// The upstream exporter keeps the workbook layout, so the column headers sit
/// at `header_row` (1-indexed; row 7 in the stock files) and everything above
/// them is preamble to skip. Rows may have differing cell counts.
pub fn read_sheet(path: &Path, header_row: usize) -> AppResult<RawSheet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records: Vec<Vec<String>> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        records.push(rec.iter().map(|c| c.to_string()).collect());
    }

    if header_row == 0 || records.len() < header_row {
        return Err(AppError::HeaderRowNotFound(header_row));
    }

    let rows = records.split_off(header_row);
    let headers = records.pop().unwrap_or_default();

    Ok(RawSheet {
        headers,
        rows,
        first_data_row: header_row + 1,
    })
}
