use super::{punch::PunchEvent, status::RecordStatus};
use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;

/// A punch event plus its classification and computed duration.
/// `duration_hours` is Some exactly when `status` is Valid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NormalizedEvent {
    pub event: PunchEvent,
    pub status: RecordStatus,
    pub duration_hours: Option<f64>,
}

impl NormalizedEvent {
    pub fn user_id(&self) -> &str {
        &self.event.user_id
    }

    pub fn date(&self) -> NaiveDate {
        self.event.date()
    }

    /// (iso_year, iso_week) of the check-in date.
    pub fn week_key(&self) -> (i32, u32) {
        date::iso_week_key(self.date())
    }
}
