//! Time utilities: duration arithmetic in hours and HH:MM:SS rendering.

use chrono::{NaiveDateTime, NaiveTime};

/// Signed duration between two instants, in fractional hours.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Render fractional hours as HH:MM:SS. Hours may exceed 24 for weekly and
/// monthly totals; the value is rounded to the nearest second.
pub fn hours_to_hhmmss(hours: f64) -> String {
    let total_seconds = (hours * 3600.0).round() as i64;
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}
