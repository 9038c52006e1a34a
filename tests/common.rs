#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wh() -> Command {
    cargo_bin_cmd!("workhours")
}

/// Create a unique test data file path inside the system temp dir and
/// remove any existing file
pub fn setup_test_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workhours.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a data file and add a small dataset useful for many tests
pub fn init_file_with_data(data_path: &str) {
    wh().args(["--file", data_path, "--test", "init"])
        .assert()
        .success();

    wh().args([
        "--file",
        data_path,
        "add",
        "2025-09-01",
        "--in",
        "09:00",
        "--out",
        "17:30",
    ])
    .assert()
    .success();

    wh().args([
        "--file",
        data_path,
        "add",
        "2025-09-03",
        "--in",
        "08:00",
        "--out",
        "17:00",
    ])
    .assert()
    .success();
}
