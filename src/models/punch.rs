use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One raw check-in/check-out pair for a worker, as produced by the record
/// parser from a sheet row. Identity is (user_id, check_in); the struct is
/// never mutated after parsing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PunchEvent {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub check_in: NaiveDateTime,
    /// None when the Fin cell was empty or unparseable.
    pub check_out: Option<NaiveDateTime>,
}

impl PunchEvent {
    /// Calendar date the punch belongs to (date of the check-in).
    pub fn date(&self) -> NaiveDate {
        self.check_in.date()
    }
}
