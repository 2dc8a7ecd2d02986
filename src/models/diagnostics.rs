//! Row-level problems surfaced alongside the partial result.
//! Rejects and warnings are accumulated, never silently dropped: the caller
//! decides how to display them while still rendering the valid data.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum RejectReason {
    /// A required column was empty for this row.
    MissingField(String),
    /// The Inicio cell could not be parsed as a timestamp.
    InvalidTimestamp(String),
}

/// A rejected sheet row. `row` is the 1-indexed row in the source file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RowReject {
    pub row: usize,
    pub reason: RejectReason,
}

impl RowReject {
    pub fn missing_field(row: usize, field: &str) -> Self {
        Self {
            row,
            reason: RejectReason::MissingField(field.to_string()),
        }
    }

    pub fn invalid_timestamp(row: usize, value: &str) -> Self {
        Self {
            row,
            reason: RejectReason::InvalidTimestamp(value.to_string()),
        }
    }
}

impl fmt::Display for RowReject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            RejectReason::MissingField(field) => {
                write!(f, "row {}: missing required field '{}'", self.row, field)
            }
            RejectReason::InvalidTimestamp(value) => {
                write!(f, "row {}: invalid Inicio timestamp '{}'", self.row, value)
            }
        }
    }
}

/// Non-fatal diagnostic for a checkout earlier than its check-in.
/// The punch is excluded from every total; the day still gets its summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DurationWarning {
    pub user_id: String,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
}

impl fmt::Display for DurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "punch for {} on {} ignored: check-out {} precedes check-in {}",
            self.user_id,
            self.check_in.date(),
            self.check_out.time(),
            self.check_in.time()
        )
    }
}
