//! RecordParser: turns raw sheet rows into typed punch events.
//!
//! Missing columns abort the whole run before any aggregation; bad rows are
//! rejected one by one and accumulated while the rest of the sheet keeps
//! parsing.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ingest::RawSheet;
use crate::models::diagnostics::RowReject;
use crate::models::punch::PunchEvent;
use crate::utils::date::parse_datetime;

/// Required columns, matched case-insensitively on the trimmed header.
const COL_USUARIO: &str = "usuario";
const COL_NOMBRE: &str = "nombre";
const COL_APELLIDOS: &str = "apellidos";
const COL_INICIO: &str = "inicio";
const COL_FIN: &str = "fin";

const REQUIRED_COLUMNS: &[&str] = &[COL_USUARIO, COL_NOMBRE, COL_APELLIDOS, COL_INICIO, COL_FIN];

#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub events: Vec<PunchEvent>,
    pub rejects: Vec<RowReject>,
}

/// Resolved position of each required column in the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    usuario: usize,
    nombre: usize,
    apellidos: usize,
    inicio: usize,
    fin: usize,
}

pub struct RecordParser;

impl RecordParser {
    pub fn parse(sheet: &RawSheet, cfg: &Config) -> AppResult<ParseOutcome> {
        let idx = resolve_columns(&sheet.headers)?;

        let mut events = Vec::with_capacity(sheet.rows.len());
        let mut rejects = Vec::new();

        for (i, row) in sheet.rows.iter().enumerate() {
            let sheet_row = sheet.first_data_row + i;

            // Exports often carry trailing blank lines; not worth a reject.
            if row.iter().all(|c| c.trim().is_empty()) {
                continue;
            }

            match parse_row(row, idx, sheet_row, cfg) {
                Ok(ev) => events.push(ev),
                Err(reject) => rejects.push(reject),
            }
        }

        Ok(ParseOutcome { events, rejects })
    }
}

fn resolve_columns(headers: &[String]) -> AppResult<ColumnIndex> {
    // First occurrence wins when a header repeats.
    let position = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| position(c).is_none())
        .map(|c| c.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Schema {
            missing,
            found: headers.iter().map(|h| h.trim().to_string()).collect(),
        });
    }

    Ok(ColumnIndex {
        usuario: position(COL_USUARIO).unwrap_or(0),
        nombre: position(COL_NOMBRE).unwrap_or(0),
        apellidos: position(COL_APELLIDOS).unwrap_or(0),
        inicio: position(COL_INICIO).unwrap_or(0),
        fin: position(COL_FIN).unwrap_or(0),
    })
}

fn parse_row(
    row: &[String],
    idx: ColumnIndex,
    sheet_row: usize,
    cfg: &Config,
) -> Result<PunchEvent, RowReject> {
    let cell = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");

    for (field, i) in [
        ("Usuario", idx.usuario),
        ("Nombre", idx.nombre),
        ("Apellidos", idx.apellidos),
        ("Inicio", idx.inicio),
    ] {
        if cell(i).is_empty() {
            return Err(RowReject::missing_field(sheet_row, field));
        }
    }

    let inicio = cell(idx.inicio);
    let check_in = parse_datetime(inicio, &cfg.timestamp_formats)
        .ok_or_else(|| RowReject::invalid_timestamp(sheet_row, inicio))?;

    // An unparseable Fin is NOT a reject: it feeds the no-record path.
    let check_out = parse_datetime(cell(idx.fin), &cfg.timestamp_formats);

    Ok(PunchEvent {
        user_id: cell(idx.usuario).to_string(),
        first_name: cell(idx.nombre).to_string(),
        last_name: cell(idx.apellidos).to_string(),
        check_in,
        check_out,
    })
}
