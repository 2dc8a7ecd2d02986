//! WeeklyAggregator: rolls day totals up into per-user ISO-week totals.
//!
//! The grouping key is chrono's `IsoWeek` (Monday start, week 1 holds the
//! year's first Thursday), so Dec 29-31 can land in week 1 of the next
//! iso_year and Jan 1-3 in week 52/53 of the previous one.

use crate::models::day_summary::DaySummary;
use crate::models::week_summary::WeekSummary;
use std::collections::BTreeMap;

pub fn aggregate_weekly(days: &[DaySummary]) -> Vec<WeekSummary> {
    let mut groups: BTreeMap<(String, i32, u32), WeekSummary> = BTreeMap::new();

    for d in days {
        let (iso_year, iso_week) = d.week_key();
        let key = (d.user_id.clone(), iso_year, iso_week);

        let week = groups.entry(key).or_insert_with(|| WeekSummary {
            user_id: d.user_id.clone(),
            first_name: d.first_name.clone(),
            last_name: d.last_name.clone(),
            iso_year,
            iso_week,
            total_hours: 0.0,
        });

        week.total_hours += d.total_hours;
    }

    groups.into_values().collect()
}
