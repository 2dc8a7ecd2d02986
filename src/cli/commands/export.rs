use crate::cli::commands::{load_filtered_report, report_problems};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        users,
        weeks,
        force,
    } = cmd
    {
        let report = load_filtered_report(file, users, weeks, cfg)?;

        // Surface rejects/warnings before writing anything.
        report_problems(&report);

        ExportLogic::export(&report, format, Path::new(out), cfg, *force)?;
    }
    Ok(())
}
