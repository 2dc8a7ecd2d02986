//! Date helpers: source-locale timestamp parsing, ISO week and month keys.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Try each configured format in order; None if no format matches.
pub fn parse_datetime(s: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(dt);
        }
    }
    None
}

/// ISO-8601 week key (Monday start, week 1 holds the year's first Thursday).
/// The iso_year may differ from the calendar year near January 1st.
pub fn iso_week_key(d: NaiveDate) -> (i32, u32) {
    let w = d.iso_week();
    (w.year(), w.week())
}

pub fn week_label(iso_year: i32, iso_week: u32) -> String {
    format!("{}-W{:02}", iso_year, iso_week)
}

pub fn month_label(year: i32, month: u32) -> String {
    format!("{}-{:02}", year, month)
}

/// Source-locale date rendering (dd/mm/YYYY), used in all report tables.
pub fn format_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Parse a week label like "2025-W03" back into (iso_year, iso_week).
pub fn parse_week_label(s: &str) -> AppResult<(i32, u32)> {
    let (y, w) = s
        .split_once("-W")
        .ok_or_else(|| AppError::InvalidWeek(s.to_string()))?;

    let year: i32 = y.parse().map_err(|_| AppError::InvalidWeek(s.to_string()))?;
    let week: u32 = w.parse().map_err(|_| AppError::InvalidWeek(s.to_string()))?;

    if week == 0 || week > 53 {
        return Err(AppError::InvalidWeek(s.to_string()));
    }

    Ok((year, week))
}
