// src/export/zip_bundle.rs

//! Per-worker bundle: one workbook per distinct user id, zipped.
//! Entry names keep the user id, with '@' mapped to "_at_" so e-mail-style
//! ids stay filesystem-friendly.

use crate::config::Config;
use crate::core::filter::{FilterView, Selection};
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::xlsx::build_user_workbook;
use crate::models::report::HoursReport;
use crate::ui::messages::info;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub(crate) fn export_zip(report: &HoursReport, path: &Path, cfg: &Config) -> AppResult<()> {
    info(format!("Exporting per-user workbooks: {}", path.display()));

    let file = fs::File::create(path)?;
    let mut zip = ZipWriter::new(file);

    for user in report.user_ids() {
        let sel = Selection {
            users: vec![user.clone()],
            weeks: Vec::new(),
        };
        let sub = FilterView::apply(report, &sel);

        let mut workbook = build_user_workbook(&sub, cfg)?;
        let bytes = workbook
            .save_to_buffer()
            .map_err(|e| AppError::Export(e.to_string()))?;

        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let entry = format!("{}.xlsx", user.replace('@', "_at_"));
        zip.start_file(entry, options).map_err(io::Error::other)?;
        zip.write_all(&bytes)?;
    }

    zip.finish().map_err(io::Error::other)?;

    notify_export_success("ZIP", path);
    Ok(())
}
