use predicates::str::contains;
use std::fs;

mod common;
use common::{chs, sample_sheet, temp_out};

#[test]
fn test_export_csv_detail() {
    let sheet = sample_sheet("export_csv");
    let out = temp_out("export_csv", "csv");

    chs()
        .args([
            "export", &sheet, "--format", "csv", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Semana"));
    assert!(content.contains("Total horas"));
    assert!(content.contains("Subtotal jdoe@acme.es"));
    assert!(content.contains("Sin registro"));
    // Names are uppercased like in the source reports.
    assert!(content.contains("GARCÍA"));
}

#[test]
fn test_export_json_tables() {
    let sheet = sample_sheet("export_json");
    let out = temp_out("export_json", "json");

    chs()
        .args([
            "export", &sheet, "--format", "json", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let payload: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let weeks = payload["totales_semana"]
        .as_array()
        .expect("totales_semana array");
    assert!(!weeks.is_empty());
    assert!(weeks.iter().any(|w| w["Semana"] == "2024-W10"
        && w["Total horas semana"] == "12:15:00"));

    let months = payload["totales_mes"].as_array().expect("totales_mes array");
    assert!(months.iter().any(|m| m["Mes"] == "2024-03"
        && m["Total horas mes"] == "20:15:00"));

    assert!(payload["rejected_rows"].as_array().expect("rejects").is_empty());
}

#[test]
fn test_export_xlsx_workbook() {
    let sheet = sample_sheet("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    chs()
        .args([
            "export", &sheet, "--format", "xlsx", "--out", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_zip_one_workbook_per_user() {
    let sheet = sample_sheet("export_zip");
    let out = temp_out("export_zip", "zip");

    chs()
        .args([
            "export", &sheet, "--format", "zip", "--out", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("ZIP export completed"));

    let file = fs::File::open(&out).expect("exported zip exists");
    let mut archive = zip::ZipArchive::new(file).expect("readable zip");

    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).expect("zip entry").name().to_string())
        .collect();

    assert_eq!(names.len(), 2);
    assert!(names.contains(&"agarcia_at_acme.es.xlsx".to_string()));
    assert!(names.contains(&"jdoe_at_acme.es.xlsx".to_string()));
}

#[test]
fn test_export_filtered_by_user() {
    let sheet = sample_sheet("export_filtered");
    let out = temp_out("export_filtered", "csv");

    chs()
        .args([
            "export",
            &sheet,
            "--format",
            "csv",
            "--out",
            &out,
            "--user",
            "agarcia@acme.es",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("agarcia@acme.es"));
    assert!(!content.contains("jdoe@acme.es"));
}

#[test]
fn test_export_rejects_relative_output_path() {
    let sheet = sample_sheet("export_relative");

    chs()
        .args([
            "export",
            &sheet,
            "--format",
            "csv",
            "--out",
            "relative.csv",
            "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let sheet = sample_sheet("export_force");
    let out = temp_out("export_force", "csv");

    fs::write(&out, "old content").expect("seed existing file");

    chs()
        .args([
            "export", &sheet, "--format", "csv", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("old content"));
    assert!(content.contains("Semana"));
}
