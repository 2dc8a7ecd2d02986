// src/export/model.rs

//! Flat row structures for the report tables. Field names mirror the column
//! headers of the original workbook, so the CSV/JSON/XLSX outputs line up
//! with what the consumers of those reports already expect.

use crate::config::Config;
use crate::models::normalized::NormalizedEvent;
use crate::models::report::HoursReport;
use crate::models::status::RecordStatus;
use crate::utils::date;
use crate::utils::time;
use chrono::Datelike;
use serde::Serialize;

/// One line of the per-day detail sheet ("Resumen"), punch-level.
/// Subtotal lines reuse the same shape with most cells blank.
#[derive(Serialize, Clone, Debug)]
pub struct DetailRow {
    #[serde(rename = "Semana")]
    pub semana: String,
    #[serde(rename = "Año")]
    pub anio: String,
    #[serde(rename = "Mes")]
    pub mes: String,
    #[serde(rename = "Fecha")]
    pub fecha: String,
    #[serde(rename = "Usuario")]
    pub usuario: String,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Apellidos")]
    pub apellidos: String,
    #[serde(rename = "Hora inicio")]
    pub hora_inicio: String,
    #[serde(rename = "Hora fin")]
    pub hora_fin: String,
    #[serde(rename = "Total horas")]
    pub total_horas: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct WeekRow {
    #[serde(rename = "Usuario")]
    pub usuario: String,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Apellidos")]
    pub apellidos: String,
    #[serde(rename = "Semana")]
    pub semana: String,
    #[serde(rename = "Total horas semana")]
    pub total_horas_semana: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct MonthRow {
    #[serde(rename = "Usuario")]
    pub usuario: String,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Apellidos")]
    pub apellidos: String,
    #[serde(rename = "Año")]
    pub anio: String,
    #[serde(rename = "Mes")]
    pub mes: String,
    #[serde(rename = "Total horas mes")]
    pub total_horas_mes: String,
}

/// Per-week subtotal line of the per-user workbooks.
#[derive(Serialize, Clone, Debug)]
pub struct SubtotalRow {
    #[serde(rename = "Usuario")]
    pub usuario: String,
    #[serde(rename = "Semana")]
    pub semana: String,
    #[serde(rename = "Subtotal")]
    pub subtotal: String,
}

impl DetailRow {
    pub(crate) const HEADERS: &'static [&'static str] = &[
        "Semana",
        "Año",
        "Mes",
        "Fecha",
        "Usuario",
        "Nombre",
        "Apellidos",
        "Hora inicio",
        "Hora fin",
        "Total horas",
    ];

    pub(crate) fn to_row(&self) -> Vec<String> {
        vec![
            self.semana.clone(),
            self.anio.clone(),
            self.mes.clone(),
            self.fecha.clone(),
            self.usuario.clone(),
            self.nombre.clone(),
            self.apellidos.clone(),
            self.hora_inicio.clone(),
            self.hora_fin.clone(),
            self.total_horas.clone(),
        ]
    }
}

impl WeekRow {
    pub(crate) const HEADERS: &'static [&'static str] =
        &["Usuario", "Nombre", "Apellidos", "Semana", "Total horas semana"];

    pub(crate) fn to_row(&self) -> Vec<String> {
        vec![
            self.usuario.clone(),
            self.nombre.clone(),
            self.apellidos.clone(),
            self.semana.clone(),
            self.total_horas_semana.clone(),
        ]
    }
}

impl MonthRow {
    pub(crate) const HEADERS: &'static [&'static str] = &[
        "Usuario",
        "Nombre",
        "Apellidos",
        "Año",
        "Mes",
        "Total horas mes",
    ];

    pub(crate) fn to_row(&self) -> Vec<String> {
        vec![
            self.usuario.clone(),
            self.nombre.clone(),
            self.apellidos.clone(),
            self.anio.clone(),
            self.mes.clone(),
            self.total_horas_mes.clone(),
        ]
    }
}

impl SubtotalRow {
    pub(crate) const HEADERS: &'static [&'static str] = &["Usuario", "Semana", "Subtotal"];

    pub(crate) fn to_row(&self) -> Vec<String> {
        vec![
            self.usuario.clone(),
            self.semana.clone(),
            self.subtotal.clone(),
        ]
    }
}

/// Detail sheet rows: every punch, ordered (user, week, check-in), closed by
/// a "Subtotal <usuario>" line after each (user, week) block.
pub fn detail_rows(report: &HoursReport, cfg: &Config) -> Vec<DetailRow> {
    let mut out = Vec::with_capacity(report.records.len());

    let mut current: Option<(String, (i32, u32))> = None;
    let mut block_hours = 0.0;

    for r in &report.records {
        let key = (r.user_id().to_string(), r.week_key());

        if let Some(prev) = &current
            && *prev != key
        {
            out.push(subtotal_line(prev, block_hours));
            block_hours = 0.0;
        }
        current = Some(key);

        block_hours += r.duration_hours.unwrap_or(0.0);
        out.push(record_line(r, cfg));
    }

    if let Some(prev) = &current {
        out.push(subtotal_line(prev, block_hours));
    }

    out
}

pub fn week_rows(report: &HoursReport, cfg: &Config) -> Vec<WeekRow> {
    report
        .weeks
        .iter()
        .map(|w| WeekRow {
            usuario: w.user_id.clone(),
            nombre: case_name(&w.first_name, cfg),
            apellidos: case_name(&w.last_name, cfg),
            semana: w.label(),
            total_horas_semana: time::hours_to_hhmmss(w.total_hours),
        })
        .collect()
}

pub fn month_rows(report: &HoursReport, cfg: &Config) -> Vec<MonthRow> {
    report
        .months
        .iter()
        .map(|m| MonthRow {
            usuario: m.user_id.clone(),
            nombre: case_name(&m.first_name, cfg),
            apellidos: case_name(&m.last_name, cfg),
            anio: m.year.to_string(),
            mes: m.label(),
            total_horas_mes: time::hours_to_hhmmss(m.total_hours),
        })
        .collect()
}

/// "Subtotales semana" rows of the per-user workbooks; one line per week,
/// taken from the already-computed week totals.
pub fn week_subtotal_rows(report: &HoursReport) -> Vec<SubtotalRow> {
    report
        .weeks
        .iter()
        .map(|w| SubtotalRow {
            usuario: w.user_id.clone(),
            semana: w.label(),
            subtotal: time::hours_to_hhmmss(w.total_hours),
        })
        .collect()
}

fn record_line(r: &NormalizedEvent, cfg: &Config) -> DetailRow {
    let d = r.date();
    let (iso_year, iso_week) = r.week_key();

    // A sentinel checkout parses to year 1 and still sits in the event;
    // the status decides what the report shows.
    let hora_fin = if r.status == RecordStatus::NoRecord {
        cfg.no_record_label.clone()
    } else {
        r.event
            .check_out
            .map(|out| time::format_time(out.time()))
            .unwrap_or_else(|| cfg.no_record_label.clone())
    };

    let total_horas = match r.duration_hours {
        Some(h) => time::hours_to_hhmmss(h),
        None => cfg.no_record_label.clone(),
    };

    DetailRow {
        semana: date::week_label(iso_year, iso_week),
        anio: d.year().to_string(),
        mes: date::month_label(d.year(), d.month()),
        fecha: date::format_date(d),
        usuario: r.user_id().to_string(),
        nombre: case_name(&r.event.first_name, cfg),
        apellidos: case_name(&r.event.last_name, cfg),
        hora_inicio: time::format_time(r.event.check_in.time()),
        hora_fin,
        total_horas,
    }
}

fn subtotal_line(key: &(String, (i32, u32)), hours: f64) -> DetailRow {
    let (user, (iso_year, iso_week)) = key;
    DetailRow {
        semana: date::week_label(*iso_year, *iso_week),
        anio: String::new(),
        mes: String::new(),
        fecha: String::new(),
        usuario: format!("Subtotal {user}"),
        nombre: String::new(),
        apellidos: String::new(),
        hora_inicio: String::new(),
        hora_fin: String::new(),
        total_horas: time::hours_to_hhmmss(hours),
    }
}

fn case_name(name: &str, cfg: &Config) -> String {
    if cfg.uppercase_names {
        name.to_uppercase()
    } else {
        name.to_string()
    }
}
