#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn svk() -> Command {
    cargo_bin_cmd!("surveykiosk")
}

/// Create a unique test log path inside the system temp dir and remove any existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_surveykiosk.csv", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seed a log file with raw lines (append order = chronological order)
pub fn seed_log(log_path: &str, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(log_path, content).expect("seed log");
}

/// Record a couple of ratings via the CLI, useful for many tests
pub fn init_log_with_data(log_path: &str) {
    svk()
        .args([
            "--log-file",
            log_path,
            "rate",
            "very satisfied",
            "--group",
            "japanese",
        ])
        .assert()
        .success();

    svk()
        .args([
            "--log-file",
            log_path,
            "rate",
            "satisfied",
            "--group",
            "foreigner",
        ])
        .assert()
        .success();
}
