//! MonthlyAggregator: rolls day totals up into per-user calendar-month
//! totals. A day belongs entirely to the month of its date.

use crate::models::day_summary::DaySummary;
use crate::models::month_summary::MonthSummary;
use std::collections::BTreeMap;

pub fn aggregate_monthly(days: &[DaySummary]) -> Vec<MonthSummary> {
    let mut groups: BTreeMap<(String, i32, u32), MonthSummary> = BTreeMap::new();

    for d in days {
        let (year, month) = d.month_key();
        let key = (d.user_id.clone(), year, month);

        let entry = groups.entry(key).or_insert_with(|| MonthSummary {
            user_id: d.user_id.clone(),
            first_name: d.first_name.clone(),
            last_name: d.last_name.clone(),
            year,
            month,
            total_hours: 0.0,
        });

        entry.total_hours += d.total_hours;
    }

    groups.into_values().collect()
}
