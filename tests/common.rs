#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn chs() -> Command {
    cargo_bin_cmd!("controlhoras")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a punch sheet CSV with the stock layout: six preamble lines, the
/// column headers at row 7, then the given data rows.
pub fn write_sheet(name: &str, rows: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_controlhoras.csv", name));
    let p = path.to_string_lossy().to_string();

    let mut content = String::new();
    content.push_str("Informe de fichajes\n");
    content.push_str("Empresa,ACME S.L.\n");
    content.push_str("Periodo,01/03/2024 - 31/03/2024\n");
    content.push('\n');
    content.push('\n');
    content.push('\n');
    content.push_str("Usuario,Nombre,Apellidos,Inicio,Fin\n");
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }

    fs::write(&p, content).expect("write test sheet");
    p
}

/// Small dataset shared by several tests: two workers, two ISO weeks,
/// one punch without checkout.
pub fn sample_sheet(name: &str) -> String {
    write_sheet(
        name,
        &[
            "jdoe@acme.es,Juan,Pérez,01/03/2024 09:00:00,01/03/2024 17:00:00",
            "jdoe@acme.es,Juan,Pérez,04/03/2024 08:30:00,04/03/2024 16:30:00",
            "jdoe@acme.es,Juan,Pérez,05/03/2024 09:00:00,05/03/2024 13:15:00",
            "agarcia@acme.es,Ana,García,01/03/2024 10:00:00,01/03/2024 18:30:00",
            "agarcia@acme.es,Ana,García,05/03/2024 09:00:00,01/01/0001 00:00:00",
        ],
    )
}
