use crate::cli::commands::{load_filtered_report, report_problems};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::model;
use crate::models::report::HoursReport;
use crate::ui::messages::info;
use crate::utils::date::format_date;
use crate::utils::table::Table;
use crate::utils::time::hours_to_hhmmss;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        file,
        users,
        weeks,
        weekly,
        monthly,
        details,
    } = cmd
    {
        let report = load_filtered_report(file, users, weeks, cfg)?;

        report_problems(&report);

        if report.records.is_empty() {
            info("No punch records for the current selection.");
            return Ok(());
        }

        let table = if *details {
            detail_table(&report, cfg)
        } else if *weekly {
            weekly_table(&report)
        } else if *monthly {
            monthly_table(&report)
        } else {
            daily_table(&report, cfg)
        };

        print!("{}", table.render());
    }
    Ok(())
}

fn daily_table(report: &HoursReport, cfg: &Config) -> Table {
    let mut table = Table::new(&["Usuario", "Fecha", "Total horas", "Incompleto"]);
    for d in &report.days {
        table.add_row(vec![
            d.user_id.clone(),
            format_date(d.date),
            hours_to_hhmmss(d.total_hours),
            if d.had_no_record {
                cfg.no_record_label.clone()
            } else {
                String::new()
            },
        ]);
    }
    table
}

fn weekly_table(report: &HoursReport) -> Table {
    let mut table = Table::new(&["Usuario", "Semana", "Total horas semana"]);
    for w in &report.weeks {
        table.add_row(vec![
            w.user_id.clone(),
            w.label(),
            hours_to_hhmmss(w.total_hours),
        ]);
    }
    table
}

fn monthly_table(report: &HoursReport) -> Table {
    let mut table = Table::new(&["Usuario", "Mes", "Total horas mes"]);
    for m in &report.months {
        table.add_row(vec![
            m.user_id.clone(),
            m.label(),
            hours_to_hhmmss(m.total_hours),
        ]);
    }
    table
}

/// Punch-level view; Año/Mes are dropped to keep the terminal table narrow,
/// like the on-screen grid of the source reports.
fn detail_table(report: &HoursReport, cfg: &Config) -> Table {
    let mut table = Table::new(&[
        "Semana",
        "Fecha",
        "Usuario",
        "Nombre",
        "Apellidos",
        "Hora inicio",
        "Hora fin",
        "Total horas",
    ]);
    for row in model::detail_rows(report, cfg) {
        table.add_row(vec![
            row.semana,
            row.fecha,
            row.usuario,
            row.nombre,
            row.apellidos,
            row.hora_inicio,
            row.hora_fin,
            row.total_horas,
        ]);
    }
    table
}
