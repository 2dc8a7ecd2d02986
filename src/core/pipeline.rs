//! The whole transform: parse, normalize, aggregate. One batch run per
//! sheet, no shared state between runs, each stage handing an immutable
//! table to the next.

use crate::config::Config;
use crate::core::aggregator::{aggregate_daily, aggregate_monthly, aggregate_weekly};
use crate::core::normalizer::{NormalizeOutcome, Normalizer};
use crate::core::parser::{ParseOutcome, RecordParser};
use crate::errors::AppResult;
use crate::ingest::RawSheet;
use crate::models::report::HoursReport;

pub struct Pipeline;

impl Pipeline {
    pub fn run(sheet: &RawSheet, cfg: &Config) -> AppResult<HoursReport> {
        let ParseOutcome { events, rejects } = RecordParser::parse(sheet, cfg)?;
        let NormalizeOutcome {
            mut records,
            warnings,
        } = Normalizer::normalize(events);

        // Detail order mirrors the report sheet: user, then ISO week, then
        // check-in instant. Aggregation does not depend on this order.
        records.sort_by(|a, b| {
            (a.user_id(), a.week_key(), a.event.check_in).cmp(&(
                b.user_id(),
                b.week_key(),
                b.event.check_in,
            ))
        });

        let days = aggregate_daily(&records);
        let weeks = aggregate_weekly(&days);
        let months = aggregate_monthly(&days);

        Ok(HoursReport {
            records,
            days,
            weeks,
            months,
            rejects,
            warnings,
        })
    }
}
