use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_log_with_data, setup_test_log, svk};

#[test]
fn test_rate_appends_canonical_line() {
    let log_path = setup_test_log("rate_canonical");

    svk()
        .args([
            "--log-file",
            &log_path,
            "rate",
            "Very Satisfied",
            "--group",
            "visitor",
        ])
        .assert()
        .success()
        .stdout(contains("大変満足"));

    let content = fs::read_to_string(&log_path).expect("log file written");
    let line = content.lines().next().expect("one line");
    assert!(line.ends_with(",Foreigner,大変満足"), "got: {line}");
}

#[test]
fn test_rate_without_group_writes_two_fields() {
    let log_path = setup_test_log("rate_no_group");

    svk()
        .args(["--log-file", &log_path, "rate", "普通"])
        .assert()
        .success();

    let content = fs::read_to_string(&log_path).expect("log file written");
    let line = content.lines().next().expect("one line");
    assert_eq!(line.split(',').count(), 2);
    assert!(line.ends_with(",普通"), "got: {line}");
}

#[test]
fn test_rate_unknown_rating_fails() {
    let log_path = setup_test_log("rate_unknown");

    svk()
        .args(["--log-file", &log_path, "rate", "meh"])
        .assert()
        .failure()
        .stderr(contains("Unknown rating"));

    assert!(!std::path::Path::new(&log_path).exists());
}

#[test]
fn test_rate_unknown_group_fails() {
    let log_path = setup_test_log("rate_bad_group");

    svk()
        .args([
            "--log-file",
            &log_path,
            "rate",
            "satisfied",
            "--group",
            "martian",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown respondent group"));
}

#[test]
fn test_log_newest_first() {
    let log_path = setup_test_log("log_order");
    init_log_with_data(&log_path);

    let output = svk()
        .args(["--log-file", &log_path, "log"])
        .output()
        .expect("run log");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.find("満足").expect("second entry shown");
    let second = stdout.find("大変満足").expect("first entry shown");
    // the later submission (満足) must appear before the earlier one
    assert!(
        first < second,
        "expected newest entry first:\n{stdout}"
    );
}

#[test]
fn test_log_empty_state() {
    let log_path = setup_test_log("log_empty");

    svk()
        .args(["--log-file", &log_path, "log"])
        .assert()
        .success()
        .stdout(contains("No responses recorded yet"));
}

#[test]
fn test_log_limit() {
    let log_path = setup_test_log("log_limit");
    init_log_with_data(&log_path);

    svk()
        .args(["--log-file", &log_path, "log", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("older entries"));
}

#[test]
fn test_clear_then_clear_again() {
    let log_path = setup_test_log("clear_twice");
    init_log_with_data(&log_path);

    svk()
        .args(["--log-file", &log_path, "clear", "-f"])
        .assert()
        .success()
        .stdout(contains("Response log deleted"));

    svk()
        .args(["--log-file", &log_path, "log"])
        .assert()
        .success()
        .stdout(contains("No responses recorded yet"));

    svk()
        .args(["--log-file", &log_path, "clear", "-f"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));
}

#[test]
fn test_clear_cancelled_keeps_log() {
    let log_path = setup_test_log("clear_cancel");
    init_log_with_data(&log_path);

    svk()
        .args(["--log-file", &log_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Clear cancelled"));

    assert!(std::path::Path::new(&log_path).exists());
}

#[test]
fn test_init_creates_log_file() {
    let log_path = setup_test_log("init_log");

    svk()
        .args(["--log-file", &log_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&log_path).exists());
}

#[test]
fn test_rate_accepts_english_and_japanese_spellings() {
    let log_path = setup_test_log("rate_spellings");

    for input in ["very unsatisfied", "大変不満", "VERY UNSATISFIED"] {
        svk()
            .args(["--log-file", &log_path, "rate", input, "--group", "local"])
            .assert()
            .success();
    }

    let content = fs::read_to_string(&log_path).expect("log file written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert!(line.ends_with(",日本人,大変不満"), "got: {line}");
    }
}

#[test]
fn test_help_lists_subcommands() {
    svk()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("rate").and(contains("stats")).and(contains("kiosk")));
}
