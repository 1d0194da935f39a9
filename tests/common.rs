#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn iti() -> Command {
    cargo_bin_cmd!("itinera")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_itinera.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB and seed the catalog rows most tests need:
/// city 1 (Rome), hotels 1-2, guide 1.
pub fn init_db_with_catalog(db_path: &str) {
    iti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    iti()
        .args(["--db", db_path, "city", "--add", "Rome", "--country", "Italy"])
        .assert()
        .success();

    iti()
        .args(["--db", db_path, "hotel", "--add", "Hotel Aurora", "--city", "1"])
        .assert()
        .success();

    iti()
        .args(["--db", db_path, "hotel", "--add", "Casa Bella", "--city", "1"])
        .assert()
        .success();

    iti()
        .args(["--db", db_path, "guide", "--add", "Marco"])
        .assert()
        .success();
}

/// Catalog plus one booking: client Smith in city 1, 2024-03-05 -> 2024-03-12.
pub fn init_db_with_booking(db_path: &str) {
    init_db_with_catalog(db_path);

    iti()
        .args([
            "--db",
            db_path,
            "add",
            "Smith",
            "--city",
            "1",
            "--from",
            "2024-03-05",
            "--to",
            "2024-03-12",
        ])
        .assert()
        .success();
}
