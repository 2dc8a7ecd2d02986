// src/export/json_csv.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{model, notify_export_success};
use crate::models::report::HoursReport;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed: the three tables plus the accumulated
/// rejects and warnings, so nothing is silently dropped downstream.
pub(crate) fn export_json(report: &HoursReport, path: &Path, cfg: &Config) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let payload = serde_json::json!({
        "resumen": model::detail_rows(report, cfg),
        "totales_semana": model::week_rows(report, cfg),
        "totales_mes": model::month_rows(report, cfg),
        "rejected_rows": report.rejects,
        "warnings": report.warnings,
    });

    let json_data = serde_json::to_string_pretty(&payload)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV of the per-day detail (header included thanks to serde).
/// Subtotal lines are part of the table, like in the source reports.
pub(crate) fn export_csv(report: &HoursReport, path: &Path, cfg: &Config) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    for row in model::detail_rows(report, cfg) {
        wtr.serialize(row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
