//! Engine-level tests driving the library API directly: parse → normalize →
//! aggregate on in-memory sheets, no CLI involved.

use controlhoras::config::Config;
use controlhoras::core::pipeline::Pipeline;
use controlhoras::ingest::RawSheet;
use controlhoras::models::report::HoursReport;
use controlhoras::models::status::RecordStatus;

const EPS: f64 = 1e-9;

fn sheet(rows: &[&str]) -> RawSheet {
    RawSheet {
        headers: ["Usuario", "Nombre", "Apellidos", "Inicio", "Fin"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: rows
            .iter()
            .map(|r| r.split(',').map(|c| c.to_string()).collect())
            .collect(),
        first_data_row: 8,
    }
}

fn run(rows: &[&str]) -> HoursReport {
    Pipeline::run(&sheet(rows), &Config::default()).expect("pipeline run")
}

#[test]
fn test_week_total_matches_day_sum() {
    // One full ISO week (Mon 04/03/2024 .. Sun 10/03/2024) for one worker.
    let report = run(&[
        "u1,Juan,Pérez,04/03/2024 09:00:00,04/03/2024 17:00:00",
        "u1,Juan,Pérez,05/03/2024 09:00:00,05/03/2024 17:30:00",
        "u1,Juan,Pérez,06/03/2024 08:15:00,06/03/2024 16:00:00",
        "u1,Juan,Pérez,07/03/2024 09:00:00,07/03/2024 13:00:00",
        "u1,Juan,Pérez,08/03/2024 09:00:00,08/03/2024 17:00:00",
        "u1,Juan,Pérez,10/03/2024 10:00:00,10/03/2024 12:00:00",
    ]);

    let day_sum: f64 = report
        .days
        .iter()
        .filter(|d| d.week_key() == (2024, 10))
        .map(|d| d.total_hours)
        .sum();

    assert_eq!(report.weeks.len(), 1);
    let week = &report.weeks[0];
    assert_eq!(week.key(), (2024, 10));
    assert!((week.total_hours - day_sum).abs() < EPS);
}

#[test]
fn test_month_total_matches_day_sum() {
    let report = run(&[
        "u1,Juan,Pérez,01/03/2024 09:00:00,01/03/2024 17:00:00",
        "u1,Juan,Pérez,15/03/2024 09:00:00,15/03/2024 17:45:00",
        "u1,Juan,Pérez,29/03/2024 09:00:00,29/03/2024 12:30:00",
        "u1,Juan,Pérez,02/04/2024 09:00:00,02/04/2024 17:00:00",
    ]);

    let march_days: f64 = report
        .days
        .iter()
        .filter(|d| d.month_key() == (2024, 3))
        .map(|d| d.total_hours)
        .sum();

    let march = report
        .months
        .iter()
        .find(|m| (m.year, m.month) == (2024, 3))
        .expect("march summary");

    assert!((march.total_hours - march_days).abs() < EPS);
    assert_eq!(report.months.len(), 2);
}

#[test]
fn test_pipeline_is_idempotent() {
    let rows = [
        "u2,Ana,García,01/03/2024 10:00:00,01/03/2024 18:30:00",
        "u1,Juan,Pérez,05/03/2024 09:00:00,05/03/2024 13:15:00",
        "u1,Juan,Pérez,04/03/2024 08:30:00,04/03/2024 16:30:00",
        "u2,Ana,García,05/03/2024 09:00:00,01/01/0001 00:00:00",
    ];

    let first = run(&rows);
    let second = run(&rows);

    assert_eq!(first, second);
}

#[test]
fn test_sentinel_checkout_is_no_record() {
    let report = run(&["u1,Juan,Pérez,05/03/2024 09:00:00,01/01/0001 00:00:00"]);

    assert_eq!(report.records.len(), 1);
    let r = &report.records[0];
    assert_eq!(r.status, RecordStatus::NoRecord);
    assert!(r.duration_hours.is_none());

    // Excluded from every total, never counted as zero-hours work.
    assert_eq!(report.days.len(), 1);
    assert!(report.days[0].total_hours.abs() < EPS);
    assert!(report.days[0].had_no_record);
    assert!(report.weeks[0].total_hours.abs() < EPS);
}

#[test]
fn test_empty_checkout_cell_is_no_record() {
    let report = run(&["u1,Juan,Pérez,05/03/2024 09:00:00,"]);

    assert_eq!(report.records[0].status, RecordStatus::NoRecord);
    assert!(report.rejects.is_empty());
}

#[test]
fn test_negative_duration_excluded_with_warning() {
    let report = run(&[
        "u1,Juan,Pérez,01/03/2024 09:00:00,01/03/2024 08:00:00",
        "u1,Juan,Pérez,01/03/2024 10:00:00,01/03/2024 18:00:00",
    ]);

    let bad = report
        .records
        .iter()
        .find(|r| r.status == RecordStatus::Invalid)
        .expect("invalid record");
    assert!(bad.duration_hours.is_none());

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].user_id, "u1");

    // The day keeps its row and only the valid punch counts.
    assert_eq!(report.days.len(), 1);
    assert!((report.days[0].total_hours - 8.0).abs() < EPS);
    assert!(report.days[0].had_no_record);
}

#[test]
fn test_iso_week_year_boundary() {
    // Dec 30, 2024 falls in ISO week 1 of 2025, not week 53 of 2024.
    let report = run(&["u1,Juan,Pérez,30/12/2024 08:00:00,30/12/2024 17:00:00"]);

    assert_eq!(report.weeks.len(), 1);
    let week = &report.weeks[0];
    assert_eq!(week.key(), (2025, 1));
    assert!((week.total_hours - 9.0).abs() < EPS);

    // The month stays with the calendar date.
    assert_eq!(report.months.len(), 1);
    assert_eq!((report.months[0].year, report.months[0].month), (2024, 12));
}

#[test]
fn test_valid_and_no_record_punch_same_day() {
    let report = run(&[
        "u1,Juan,Pérez,01/03/2024 09:00:00,01/03/2024 17:00:00",
        "u1,Juan,Pérez,01/03/2024 17:30:00,01/01/0001 00:00:00",
    ]);

    assert_eq!(report.days.len(), 1);
    let day = &report.days[0];
    assert!((day.total_hours - 8.0).abs() < EPS);
    assert!(day.had_no_record);
}

#[test]
fn test_output_order_is_stable() {
    // Input deliberately shuffled; output must be (user asc, date asc).
    let report = run(&[
        "u2,Ana,García,05/03/2024 09:00:00,05/03/2024 17:00:00",
        "u1,Juan,Pérez,05/03/2024 09:00:00,05/03/2024 17:00:00",
        "u1,Juan,Pérez,01/03/2024 09:00:00,01/03/2024 17:00:00",
    ]);

    let keys: Vec<(String, String)> = report
        .days
        .iter()
        .map(|d| (d.user_id.clone(), d.date.to_string()))
        .collect();

    assert_eq!(
        keys,
        vec![
            ("u1".to_string(), "2024-03-01".to_string()),
            ("u1".to_string(), "2024-03-05".to_string()),
            ("u2".to_string(), "2024-03-05".to_string()),
        ]
    );
}

#[test]
fn test_fractional_durations_not_rounded() {
    let report = run(&["u1,Juan,Pérez,01/03/2024 09:00:00,01/03/2024 09:50:00"]);

    let r = &report.records[0];
    let expected = 50.0 / 60.0;
    assert!((r.duration_hours.expect("valid duration") - expected).abs() < EPS);
}
