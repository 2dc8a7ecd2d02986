use crate::utils::date;
use serde::Serialize;

/// Worked-hours total for one worker over one calendar month.
/// A day belongs entirely to the month of its date; no prorating.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthSummary {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub year: i32,
    pub month: u32,
    pub total_hours: f64,
}

impl MonthSummary {
    /// Month label in the report format, e.g. "2025-01".
    pub fn label(&self) -> String {
        date::month_label(self.year, self.month)
    }
}
