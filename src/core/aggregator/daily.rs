//! DailyAggregator: per-user, per-day worked-hour totals.
//!
//! Groups normalized punches by (user_id, check-in date) and sums the valid
//! durations. Days whose punches are all NoRecord/Invalid still get a row
//! with a zero total so the worker/day shows up in the report.

use crate::models::day_summary::DaySummary;
use crate::models::normalized::NormalizedEvent;
use crate::models::status::RecordStatus;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub fn aggregate_daily(records: &[NormalizedEvent]) -> Vec<DaySummary> {
    // BTreeMap keys give the contract ordering for free:
    // user_id ascending, then date ascending, whatever the input order.
    let mut groups: BTreeMap<(String, NaiveDate), DaySummary> = BTreeMap::new();

    for r in records {
        let key = (r.event.user_id.clone(), r.date());

        let day = groups.entry(key).or_insert_with(|| DaySummary {
            user_id: r.event.user_id.clone(),
            first_name: r.event.first_name.clone(),
            last_name: r.event.last_name.clone(),
            date: r.date(),
            total_hours: 0.0,
            had_no_record: false,
        });

        match r.status {
            RecordStatus::Valid => {
                if let Some(hours) = r.duration_hours {
                    day.total_hours += hours;
                }
            }
            RecordStatus::NoRecord | RecordStatus::Invalid => {
                day.had_no_record = true;
            }
        }
    }

    groups.into_values().collect()
}
