//! FilterView: read-side projection of a report by users and ISO weeks.
//! It only drops rows; the surviving sums were computed upstream and are
//! never recomputed here.

use crate::errors::AppResult;
use crate::models::report::HoursReport;
use crate::utils::date;

/// What the caller selected. An empty set means "no filter on that
/// dimension"; the two dimensions are ANDed, membership within a set is
/// an OR.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub users: Vec<String>,
    pub weeks: Vec<(i32, u32)>,
}

impl Selection {
    /// Build a selection from CLI-style arguments ("u.perez", "2025-W03").
    pub fn from_args(users: &[String], weeks: &[String]) -> AppResult<Self> {
        let mut parsed = Vec::with_capacity(weeks.len());
        for w in weeks {
            parsed.push(date::parse_week_label(w)?);
        }
        Ok(Self {
            users: users.to_vec(),
            weeks: parsed,
        })
    }

    pub fn is_unfiltered(&self) -> bool {
        self.users.is_empty() && self.weeks.is_empty()
    }

    pub fn matches_user(&self, user_id: &str) -> bool {
        self.users.is_empty() || self.users.iter().any(|u| u == user_id)
    }

    pub fn matches_week(&self, key: (i32, u32)) -> bool {
        self.weeks.is_empty() || self.weeks.contains(&key)
    }
}

pub struct FilterView;

impl FilterView {
    pub fn apply(report: &HoursReport, sel: &Selection) -> HoursReport {
        if sel.is_unfiltered() {
            return report.clone();
        }

        HoursReport {
            records: report
                .records
                .iter()
                .filter(|r| sel.matches_user(r.user_id()) && sel.matches_week(r.week_key()))
                .cloned()
                .collect(),
            days: report
                .days
                .iter()
                .filter(|d| sel.matches_user(&d.user_id) && sel.matches_week(d.week_key()))
                .cloned()
                .collect(),
            weeks: report
                .weeks
                .iter()
                .filter(|w| sel.matches_user(&w.user_id) && sel.matches_week(w.key()))
                .cloned()
                .collect(),
            // Month rows carry no week key; only the user predicate applies.
            months: report
                .months
                .iter()
                .filter(|m| sel.matches_user(&m.user_id))
                .cloned()
                .collect(),
            rejects: report.rejects.clone(),
            warnings: report.warnings.clone(),
        }
    }
}
