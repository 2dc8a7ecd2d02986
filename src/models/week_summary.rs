use crate::utils::date;
use serde::Serialize;

/// Worked-hours total for one worker over one ISO-8601 week.
/// Weeks start on Monday; week 1 is the one holding the year's first
/// Thursday, so a late-December date may belong to week 1 of the next year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekSummary {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub iso_year: i32,
    pub iso_week: u32,
    pub total_hours: f64,
}

impl WeekSummary {
    pub fn key(&self) -> (i32, u32) {
        (self.iso_year, self.iso_week)
    }

    /// Week label in the report format, e.g. "2025-W03".
    pub fn label(&self) -> String {
        date::week_label(self.iso_year, self.iso_week)
    }
}
