use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_booking, iti, setup_test_db, temp_out};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    let out = temp_out("export_csv_all", "csv");
    init_db_with_booking(&db_path);

    iti()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("booking_id"));
    assert!(content.contains("Smith"));
    assert!(content.contains("Rome"));
    assert!(content.contains("2024-03-05"));
    assert!(content.contains("2024-03-12"));
}

#[test]
fn test_export_json_all() {
    let db_path = setup_test_db("export_json_all");
    let out = temp_out("export_json_all", "json");
    init_db_with_booking(&db_path);

    iti()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of segments");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["client"], "Smith");
    assert_eq!(rows[0]["start_date"], "2024-03-05");
}

#[test]
fn test_export_includes_hotels_and_guide() {
    let db_path = setup_test_db("export_enriched");
    let out = temp_out("export_enriched", "csv");
    init_db_with_booking(&db_path);

    iti()
        .args([
            "--db", &db_path, "edit", "1", "0", "--add-hotel", "1", "--add-hotel", "2",
        ])
        .assert()
        .success();
    iti()
        .args(["--db", &db_path, "assign", "1", "0", "--guide", "1"])
        .assert()
        .success();

    iti()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("Casa Bella;Hotel Aurora"));
    assert!(content.contains("Marco"));
}

#[test]
fn test_export_range_month_filters_rows() {
    let db_path = setup_test_db("export_range");
    init_db_with_booking(&db_path);

    // month covering the booking
    let out = temp_out("export_range_hit", "csv");
    iti()
        .args([
            "--db", &db_path, "export", "--file", &out, "--range", "2024-03",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read csv").contains("Smith"));

    // a later year finds nothing and writes nothing
    let out_miss = temp_out("export_range_miss", "csv");
    iti()
        .args([
            "--db", &db_path, "export", "--file", &out_miss, "--range", "2025",
        ])
        .assert()
        .success()
        .stdout(contains("No segments found"));
    assert!(!std::path::Path::new(&out_miss).exists());
}

#[test]
fn test_export_booking_filter() {
    let db_path = setup_test_db("export_booking");
    let out = temp_out("export_booking", "csv");
    init_db_with_booking(&db_path);

    iti()
        .args([
            "--db",
            &db_path,
            "add",
            "Jones",
            "--city",
            "1",
            "--from",
            "2024-03-06",
            "--to",
            "2024-03-10",
        ])
        .assert()
        .success();

    iti()
        .args([
            "--db", &db_path, "export", "--file", &out, "--booking", "2",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("Jones"));
    assert!(!content.contains("Smith"));
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relpath");
    init_db_with_booking(&db_path);

    iti()
        .args(["--db", &db_path, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_booking(&db_path);

    fs::write(&out, "stale").expect("seed file");

    iti()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("Smith"));
}

#[test]
fn test_export_invalid_range_fails() {
    let db_path = setup_test_db("export_bad_range");
    let out = temp_out("export_bad_range", "csv");
    init_db_with_booking(&db_path);

    iti()
        .args([
            "--db", &db_path, "export", "--file", &out, "--range", "not-a-range",
        ])
        .assert()
        .failure();
}
