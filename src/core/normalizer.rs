//! Normalizer: classifies each punch and computes its duration in hours.
//!
//! The source system writes `01/01/0001 00:00:00` when a worker never
//! checked out, so any checkout landing in year 1 is treated as absent,
//! exactly like an empty cell. Checkouts earlier than their check-in are a
//! hardening on top of the source behavior: instead of letting a negative
//! duration flow into the totals, the punch is marked Invalid, excluded
//! from every sum, and reported as a warning.

use crate::models::diagnostics::DurationWarning;
use crate::models::normalized::NormalizedEvent;
use crate::models::punch::PunchEvent;
use crate::models::status::RecordStatus;
use crate::utils::time::hours_between;
use chrono::Datelike;

#[derive(Debug, Default)]
pub struct NormalizeOutcome {
    pub records: Vec<NormalizedEvent>,
    pub warnings: Vec<DurationWarning>,
}

pub struct Normalizer;

impl Normalizer {
    pub fn normalize(events: Vec<PunchEvent>) -> NormalizeOutcome {
        let mut records = Vec::with_capacity(events.len());
        let mut warnings = Vec::new();

        for event in events {
            let checkout = event.check_out.filter(|out| out.year() != 1);

            let (status, duration_hours) = match checkout {
                None => (RecordStatus::NoRecord, None),
                Some(out) if out < event.check_in => {
                    warnings.push(DurationWarning {
                        user_id: event.user_id.clone(),
                        check_in: event.check_in,
                        check_out: out,
                    });
                    (RecordStatus::Invalid, None)
                }
                Some(out) => (
                    RecordStatus::Valid,
                    Some(hours_between(event.check_in, out)),
                ),
            };

            records.push(NormalizedEvent {
                event,
                status,
                duration_hours,
            });
        }

        NormalizeOutcome { records, warnings }
    }
}
