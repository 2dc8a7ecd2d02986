use serde::Serialize;

/// Classification assigned by the normalizer to every punch.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RecordStatus {
    /// Complete punch; its duration counts toward all totals.
    Valid,
    /// Missing or sentinel checkout ("Sin registro").
    NoRecord,
    /// Checkout earlier than check-in; excluded from totals.
    Invalid,
}

impl RecordStatus {
    pub fn rs_as_str(&self) -> &'static str {
        match self {
            RecordStatus::Valid => "valid",
            RecordStatus::NoRecord => "no_record",
            RecordStatus::Invalid => "invalid",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, RecordStatus::Valid)
    }

    pub fn counts_for_totals(&self) -> bool {
        self.is_valid()
    }
}
