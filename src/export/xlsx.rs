// src/export/xlsx.rs

//! XLSX export with styling and auto column widths: the global workbook
//! (Resumen + Totales semana + Totales mes) and the single-worker workbooks
//! bundled by the ZIP export.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::model::{self, DetailRow, MonthRow, SubtotalRow, WeekRow};
use crate::export::notify_export_success;
use crate::models::report::HoursReport;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub(crate) fn export_xlsx(report: &HoursReport, path: &Path, cfg: &Config) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = build_workbook(report, cfg)?;
    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Global workbook with the three report tables, one sheet each.
pub(crate) fn build_workbook(report: &HoursReport, cfg: &Config) -> AppResult<Workbook> {
    let mut workbook = Workbook::new();

    let detail: Vec<Vec<String>> = model::detail_rows(report, cfg)
        .iter()
        .map(DetailRow::to_row)
        .collect();
    let weeks: Vec<Vec<String>> = model::week_rows(report, cfg)
        .iter()
        .map(WeekRow::to_row)
        .collect();
    let months: Vec<Vec<String>> = model::month_rows(report, cfg)
        .iter()
        .map(MonthRow::to_row)
        .collect();

    add_sheet(&mut workbook, "Resumen", DetailRow::HEADERS, &detail)?;
    add_sheet(&mut workbook, "Totales semana", WeekRow::HEADERS, &weeks)?;
    add_sheet(&mut workbook, "Totales mes", MonthRow::HEADERS, &months)?;

    Ok(workbook)
}

/// Workbook for a single worker: their detail sheet plus the per-week
/// subtotals. `report` must already be filtered down to one user.
pub(crate) fn build_user_workbook(report: &HoursReport, cfg: &Config) -> AppResult<Workbook> {
    let mut workbook = Workbook::new();

    let detail: Vec<Vec<String>> = model::detail_rows(report, cfg)
        .iter()
        .map(DetailRow::to_row)
        .collect();
    let subtotals: Vec<Vec<String>> = model::week_subtotal_rows(report)
        .iter()
        .map(SubtotalRow::to_row)
        .collect();

    add_sheet(&mut workbook, "Resumen", DetailRow::HEADERS, &detail)?;
    add_sheet(
        &mut workbook,
        "Subtotales semana",
        SubtotalRow::HEADERS,
        &subtotals,
    )?;

    Ok(workbook)
}

fn add_sheet(
    workbook: &mut Workbook,
    name: &str,
    headers: &[&str],
    rows: &[Vec<String>],
) -> AppResult<()> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name).map_err(to_io_app_error)?;
    write_sheet(worksheet, headers, rows)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    headers: &[&str],
    rows: &[Vec<String>],
) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Rows, banded, tracking column widths
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, row) in rows.iter().enumerate() {
        let row_n = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let cell_format = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, value) in row.iter().enumerate() {
            worksheet
                .write_with_format(row_n, col as u16, value.as_str(), &cell_format)
                .map_err(to_io_app_error)?;

            if col < col_widths.len() {
                col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
