// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::zip_bundle::export_zip;
use crate::models::report::HoursReport;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export dispatch.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the report tables to `path` in the requested format.
    ///
    /// - `csv`: per-day detail (with subtotal lines)
    /// - `json`: the three tables plus rejects/warnings
    /// - `xlsx`: workbook with Resumen / Totales semana / Totales mes
    /// - `zip`: one workbook per worker
    pub fn export(
        report: &HoursReport,
        format: &ExportFormat,
        path: &Path,
        cfg: &Config,
        force: bool,
    ) -> AppResult<()> {
        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {}",
                path.display()
            ))));
        }

        ensure_writable(path, force)?;

        if report.records.is_empty() {
            warning("No punch records for the current selection; exporting empty tables.");
        }

        match format {
            ExportFormat::Csv => export_csv(report, path, cfg)?,
            ExportFormat::Json => export_json(report, path, cfg)?,
            ExportFormat::Xlsx => export_xlsx(report, path, cfg)?,
            ExportFormat::Zip => export_zip(report, path, cfg)?,
        }

        Ok(())
    }
}
