use super::day_summary::DaySummary;
use super::diagnostics::{DurationWarning, RowReject};
use super::month_summary::MonthSummary;
use super::normalized::NormalizedEvent;
use super::week_summary::WeekSummary;
use serde::Serialize;

/// Output of one pipeline run: the normalized punch detail plus the three
/// summary tables, with row rejects and duration warnings carried alongside.
/// Every table is derived from the previous stage and never mutated after
/// the run; re-running the pipeline on the same sheet rebuilds it all.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct HoursReport {
    /// Punch-level detail, sorted by (user, ISO week, check-in).
    pub records: Vec<NormalizedEvent>,
    /// One row per (user, date), sorted by (user, date).
    pub days: Vec<DaySummary>,
    /// One row per (user, iso_year, iso_week).
    pub weeks: Vec<WeekSummary>,
    /// One row per (user, year, month).
    pub months: Vec<MonthSummary>,
    pub rejects: Vec<RowReject>,
    pub warnings: Vec<DurationWarning>,
}

impl HoursReport {
    /// Distinct user ids in record order (already sorted by user).
    pub fn user_ids(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for r in &self.records {
            if out.last().map(String::as_str) != Some(r.user_id()) {
                out.push(r.user_id().to_string());
            }
        }
        out
    }
}
