pub mod config;
pub mod export;
pub mod init;
pub mod report;

use crate::config::Config;
use crate::core::filter::{FilterView, Selection};
use crate::core::pipeline::Pipeline;
use crate::errors::AppResult;
use crate::ingest;
use crate::models::report::HoursReport;
use crate::ui::messages::warning;
use std::path::Path;

/// Run the pipeline on a sheet and apply the CLI selection.
/// Shared by the report and export commands.
pub(crate) fn load_filtered_report(
    file: &str,
    users: &[String],
    weeks: &[String],
    cfg: &Config,
) -> AppResult<HoursReport> {
    let selection = Selection::from_args(users, weeks)?;
    let sheet = ingest::read_sheet(Path::new(file), cfg.header_row)?;
    let report = Pipeline::run(&sheet, cfg)?;
    Ok(FilterView::apply(&report, &selection))
}

/// Print accumulated rejects and warnings before any table. Row problems
/// never abort the run; they are shown next to whatever data survived.
pub(crate) fn report_problems(report: &HoursReport) {
    if !report.rejects.is_empty() {
        warning(format!("{} row(s) rejected:", report.rejects.len()));
        for r in &report.rejects {
            warning(format!("  {r}"));
        }
    }

    for w in &report.warnings {
        warning(w.to_string());
    }
}
