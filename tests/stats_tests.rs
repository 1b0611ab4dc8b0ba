use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{seed_log, setup_test_log, svk};

#[test]
fn test_stats_weekly_series_and_breakdown() {
    let log_path = setup_test_log("stats_basic");
    seed_log(
        &log_path,
        &[
            "2024-01-01 10:00:00,大変満足",
            "2024-01-01 11:00:00,満足",
            "2024-01-02 09:00:00,大変満足",
        ],
    );

    svk()
        .args(["--log-file", &log_path, "stats", "--today", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("1/1"))
        .stdout(contains("1/2"))
        .stdout(contains("Total responses (7 days): 3"))
        .stdout(contains("Total respondents: 3"))
        .stdout(contains("2 (66.7%)"))
        .stdout(contains("1 (33.3%)"))
        // zero-seeded levels still show up
        .stdout(contains("普通").and(contains("大変不満")));
}

#[test]
fn test_stats_window_excludes_old_entries() {
    let log_path = setup_test_log("stats_window");
    seed_log(
        &log_path,
        &[
            // outside the trailing week
            "2023-12-25 10:00:00,満足",
            "2024-01-02 09:00:00,満足",
        ],
    );

    svk()
        .args(["--log-file", &log_path, "stats", "--today", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("Total responses (7 days): 1"))
        // the breakdown still sees the whole log
        .stdout(contains("Total respondents: 2"));
}

#[test]
fn test_stats_empty_log_shows_no_data() {
    let log_path = setup_test_log("stats_empty");

    svk()
        .args(["--log-file", &log_path, "stats"])
        .assert()
        .success()
        .stdout(contains("No data available"));
}

#[test]
fn test_stats_skips_malformed_lines() {
    let log_path = setup_test_log("stats_malformed");
    seed_log(
        &log_path,
        &[
            "garbage line",
            "2024-01-02 09:00:00,大変満足",
            "not-a-date,満足",
            "2024-01-02 10:00:00,invalid-rating",
        ],
    );

    svk()
        .args(["--log-file", &log_path, "stats", "--today", "2024-01-02"])
        .assert()
        .success()
        // daily series counts any line whose date parses, even with a bad rating
        .stdout(contains("Total responses (7 days): 2"))
        // the breakdown only counts known ratings
        .stdout(contains("Total respondents: 1"));
}

#[test]
fn test_stats_by_group_partitions_counts() {
    let log_path = setup_test_log("stats_by_group");
    seed_log(
        &log_path,
        &[
            "2024-01-02 09:00:00,日本人,大変満足",
            "2024-01-02 09:10:00,日本人,満足",
            "2024-01-02 09:20:00,Foreigner,満足",
            // group-less legacy line: overall only, not per-group
            "2024-01-02 09:30:00,不満",
        ],
    );

    let output = svk()
        .args([
            "--log-file",
            &log_path,
            "stats",
            "--by-group",
            "--today",
            "2024-01-02",
            "--locale",
            "en",
        ])
        .output()
        .expect("run stats");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Japanese"), "missing group header:\n{stdout}");
    assert!(stdout.contains("Foreigner"), "missing group header:\n{stdout}");

    let jp_at = stdout.find("Japanese").unwrap();
    let fo_at = stdout.find("Foreigner").unwrap();
    let jp_section = &stdout[jp_at..fo_at];
    let fo_section = &stdout[fo_at..];

    assert!(jp_section.contains("Total respondents: 2"), "{jp_section}");
    assert!(fo_section.contains("Total respondents: 1"), "{fo_section}");
}

#[test]
fn test_stats_rejects_unknown_locale() {
    let log_path = setup_test_log("stats_bad_locale");
    seed_log(&log_path, &["2024-01-02 09:00:00,満足"]);

    svk()
        .args(["--log-file", &log_path, "stats", "--locale", "fr"])
        .assert()
        .failure()
        .stderr(contains("Unknown locale"));
}

#[test]
fn test_stats_english_locale_labels() {
    let log_path = setup_test_log("stats_locale_en");
    seed_log(&log_path, &["2024-01-02 09:00:00,日本人,大変満足"]);

    svk()
        .args([
            "--log-file",
            &log_path,
            "stats",
            "--today",
            "2024-01-02",
            "--locale",
            "en",
        ])
        .assert()
        .success()
        .stdout(contains("Very satisfied"))
        .stdout(contains("Very unsatisfied"));
}
