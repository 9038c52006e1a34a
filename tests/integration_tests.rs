use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_file_with_data, setup_test_file, wh};

#[test]
fn test_add_pair_and_list() {
    let data_path = setup_test_file("add_pair_and_list");
    init_file_with_data(&data_path);

    wh().args([
        "--file",
        &data_path,
        "add",
        "2025-09-01",
        "--notes",
        "standup day",
    ])
    .assert()
    .success();

    // 09:00 → 17:30 is 8.50h gross, 8.00h net after the break deduction
    wh().args(["--file", &data_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-03"))
        .stdout(contains("8.50h"))
        .stdout(contains("8.00h"))
        .stdout(contains("standup day"))
        .stdout(contains("Days worked: 2"));
}

#[test]
fn test_add_echoes_hours_without_deduction() {
    let data_path = setup_test_file("add_no_deduction");

    // exactly 5 hours: no break deduction (strict >)
    wh().args([
        "--file",
        &data_path,
        "add",
        "2025-09-02",
        "--in",
        "09:00",
        "--out",
        "14:00",
    ])
    .assert()
    .success()
    .stdout(contains("Worked 5.00h net (5.00h gross)"))
    .stdout(contains("break deducted").not());
}

#[test]
fn test_add_echoes_hours_with_deduction() {
    let data_path = setup_test_file("add_deduction");

    // one minute past the threshold: 5.02h gross, 4.52h net
    wh().args([
        "--file",
        &data_path,
        "add",
        "2025-09-02",
        "--in",
        "09:00",
        "--out",
        "14:01",
    ])
    .assert()
    .success()
    .stdout(contains("Worked 4.52h net (5.02h gross)"))
    .stdout(contains("30-minute break deducted"));
}

#[test]
fn test_add_overnight_shift() {
    let data_path = setup_test_file("add_overnight");

    wh().args([
        "--file",
        &data_path,
        "add",
        "2025-09-05",
        "--in",
        "22:00",
        "--out",
        "02:00",
    ])
    .assert()
    .success()
    .stdout(contains("Worked 4.00h net (4.00h gross)"));
}

#[test]
fn test_add_invalid_time_fails() {
    let data_path = setup_test_file("add_invalid_time");

    wh().args([
        "--file",
        &data_path,
        "add",
        "2025-09-02",
        "--in",
        "nine o'clock",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));
}

#[test]
fn test_add_invalid_date_fails() {
    let data_path = setup_test_file("add_invalid_date");

    wh().args(["--file", &data_path, "add", "02/09/2025", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_incomplete_record_shows_no_hours() {
    let data_path = setup_test_file("incomplete_record");

    wh().args([
        "--file",
        &data_path,
        "add",
        "2025-09-02",
        "--in",
        "09:00",
    ])
    .assert()
    .success()
    .stdout(contains("Registered IN at 09:00 on 2025-09-02."))
    .stdout(contains("Worked").not());

    wh().args(["--file", &data_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-02"))
        .stdout(contains("Days worked: 0"));
}

#[test]
fn test_reregistering_same_entry_is_idempotent() {
    let data_path = setup_test_file("idempotent_entry");

    wh().args([
        "--file",
        &data_path,
        "add",
        "2025-09-02",
        "--in",
        "09:00",
        "--notes",
        "first note",
    ])
    .assert()
    .success();

    // same entry again, no notes: nothing else may change
    wh().args([
        "--file",
        &data_path,
        "add",
        "2025-09-02",
        "--in",
        "09:00",
    ])
    .assert()
    .success();

    wh().args(["--file", &data_path, "list"])
        .assert()
        .success()
        .stdout(contains("09:00"))
        .stdout(contains("first note"));
}

#[test]
fn test_del_removes_record_from_list() {
    let data_path = setup_test_file("del_removes");
    init_file_with_data(&data_path);

    wh().args(["--file", &data_path, "del", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Deleted record for 2025-09-01"));

    wh().args(["--file", &data_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").not())
        .stdout(contains("2025-09-03"))
        .stdout(contains("Days worked: 1"));
}

#[test]
fn test_del_missing_date_fails() {
    let data_path = setup_test_file("del_missing");

    wh().args(["--file", &data_path, "--test", "init"])
        .assert()
        .success();

    wh().args(["--file", &data_path, "del", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("No record found for date 2025-09-01"));
}

#[test]
fn test_week_summary_totals_and_target() {
    let data_path = setup_test_file("week_summary");
    init_file_with_data(&data_path);

    // Mon 8.00h net + Wed 8.50h net = 16.50h, average 8.25h
    wh().args(["--file", &data_path, "week", "--start", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Week 2025-09-01 → 2025-09-07"))
        .stdout(contains("Total net:   16.50h"))
        .stdout(contains("Total gross: 17.50h"))
        .stdout(contains("Days worked: 2"))
        .stdout(contains("Average/day: 8.25h"))
        .stdout(contains("Break time deducted: 1.00h"))
        .stdout(contains("Weekly target: 40h"))
        .stdout(contains("-23.5h"))
        .stdout(contains("Hours still missing"));
}

#[test]
fn test_week_summary_empty_window() {
    let data_path = setup_test_file("week_empty");

    wh().args(["--file", &data_path, "--test", "init"])
        .assert()
        .success();

    wh().args(["--file", &data_path, "week", "--start", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("Days worked: 0"))
        .stdout(contains("Average/day: 0.00h"));
}

#[test]
fn test_week_window_is_opaque() {
    let data_path = setup_test_file("week_opaque");
    init_file_with_data(&data_path);

    // starting on Wednesday: Monday's record falls outside the window
    wh().args(["--file", &data_path, "week", "--start", "2025-09-03"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").not())
        .stdout(contains("Days worked: 1"));
}

#[test]
fn test_year_summary_filters_by_year() {
    let data_path = setup_test_file("year_summary");
    init_file_with_data(&data_path);

    wh().args([
        "--file",
        &data_path,
        "add",
        "2024-12-31",
        "--in",
        "09:00",
        "--out",
        "13:00",
    ])
    .assert()
    .success();

    wh().args(["--file", &data_path, "year", "2025"])
        .assert()
        .success()
        .stdout(contains("Year 2025"))
        .stdout(contains("Days worked: 2"))
        .stdout(contains("Total net:   16.50h"));

    wh().args(["--file", &data_path, "year", "2024"])
        .assert()
        .success()
        .stdout(contains("Days worked: 1"))
        .stdout(contains("Total net:   4.00h"));
}

#[test]
fn test_list_period_filter() {
    let data_path = setup_test_file("list_period");
    init_file_with_data(&data_path);

    wh().args([
        "--file",
        &data_path,
        "add",
        "2024-12-31",
        "--in",
        "09:00",
        "--out",
        "13:00",
    ])
    .assert()
    .success();

    wh().args(["--file", &data_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-03"))
        .stdout(contains("2024-12-31").not());

    wh().args(["--file", &data_path, "list", "--period", "2024-12:2025-09"])
        .assert()
        .success()
        .stdout(contains("2024-12-31"))
        .stdout(contains("2025-09-01"));
}

#[test]
fn test_corrupt_data_file_treated_as_empty() {
    let data_path = setup_test_file("corrupt_file");
    fs::write(&data_path, "{ not json at all").expect("write corrupt file");

    wh().args(["--file", &data_path, "list"])
        .assert()
        .success()
        .stdout(contains("No records yet"));

    // registering afterwards recovers the file
    wh().args([
        "--file",
        &data_path,
        "add",
        "2025-09-02",
        "--in",
        "09:00",
        "--out",
        "14:00",
    ])
    .assert()
    .success();

    wh().args(["--file", &data_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-02"))
        .stdout(contains("Days worked: 1"));
}

#[test]
fn test_add_nothing_to_do_fails() {
    let data_path = setup_test_file("add_nothing");

    wh().args(["--file", &data_path, "add", "2025-09-02"])
        .assert()
        .failure()
        .stderr(contains("Nothing to do"));
}
