use crate::utils::date;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Worked-hours total for one worker on one calendar date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DaySummary {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    /// Sum of valid durations; 0.0 when the day only has incomplete punches.
    pub total_hours: f64,
    /// At least one punch of the day lacked a usable checkout.
    pub had_no_record: bool,
}

impl DaySummary {
    /// (iso_year, iso_week) the date belongs to.
    pub fn week_key(&self) -> (i32, u32) {
        date::iso_week_key(self.date)
    }

    /// (year, month) the date belongs to.
    pub fn month_key(&self) -> (i32, u32) {
        (self.date.year(), self.date.month())
    }
}
