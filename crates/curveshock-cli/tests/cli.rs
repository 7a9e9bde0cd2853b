//! End-to-end tests for the `curveshock` binary against a directory source.

use std::path::Path;

use assert_cmd::Command;
use chrono::{Datelike, Utc};
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "Date,\"1 Mo\",\"2 Mo\",\"3 Mo\",\"4 Mo\",\"6 Mo\",\"1 Yr\",\"2 Yr\",\"3 Yr\",\"5 Yr\",\"7 Yr\",\"10 Yr\",\"20 Yr\",\"30 Yr\"";

fn write_year(dir: &Path, year: i32, rows: &[&str]) {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    std::fs::write(dir.join(format!("{year}.csv")), text).unwrap();
}

fn current_year() -> i32 {
    Utc::now().year()
}

fn fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_year(
        dir.path(),
        current_year(),
        &[
            "10/17/2025,4.21,4.15,4.05,3.98,3.81,3.56,3.46,3.44,3.56,3.76,4.01,4.58,4.60",
            "10/16/2025,4.22,4.16,4.06,3.99,3.83,3.58,3.43,3.42,3.54,3.74,3.99,4.56,4.58",
        ],
    );
    dir
}

fn curveshock(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("curveshock").unwrap();
    cmd.env_remove("CURVESHOCK_CONFIG")
        .env("RUST_LOG", "warn")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_curve_table() {
    let dir = fixture();
    curveshock(dir.path())
        .arg("curve")
        .assert()
        .success()
        .stdout(predicate::str::contains("10/17/2025"))
        .stdout(predicate::str::contains("30Y"))
        .stdout(predicate::str::contains("4.010%"));
}

#[test]
fn test_curve_json_is_latest_row() {
    let dir = fixture();
    let json = stdout_json(curveshock(dir.path()).args(["--format", "json", "curve"]));

    assert_eq!(json["as_of"], "10/17/2025");
    let points = json["curve"].as_array().unwrap();
    assert_eq!(points.len(), 13);
    assert_eq!(points[12]["tenor"], 30.0);
    assert_eq!(points[12]["yield"], 4.60);
}

#[test]
fn test_curve_csv() {
    let dir = fixture();
    curveshock(dir.path())
        .args(["--format", "csv", "curve"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tenor,label,yield\n"))
        .stdout(predicate::str::contains("10.0,10Y,4.01"));
}

#[test]
fn test_analyze_parallel_json() {
    let dir = fixture();
    let json = stdout_json(curveshock(dir.path()).args([
        "--format",
        "json",
        "analyze",
        "--shock",
        "parallel",
        "--magnitude",
        "100",
    ]));

    assert_eq!(json["shock_type"], "parallel");
    assert_eq!(json["description"], "Parallel +100bp");
    let metrics = json["metrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 13);
    for m in metrics {
        let delta = m["delta_bps"].as_f64().unwrap();
        assert!((delta - 100.0).abs() < 1e-9);
    }
    let ten_year = metrics.iter().find(|m| m["tenor"] == 10.0).unwrap();
    assert!((ten_year["yield"].as_f64().unwrap() - 5.01).abs() < 1e-9);
}

#[test]
fn test_analyze_flattener_table() {
    let dir = fixture();
    curveshock(dir.path())
        .args(["analyze", "--shock", "steepener", "--magnitude", "-50", "--pivot", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flattener -50bp pivot 5Y"))
        .stdout(predicate::str::contains("DV01"));
}

#[test]
fn test_analyze_custom_csv() {
    let dir = fixture();
    let output = curveshock(dir.path())
        .args([
            "--format", "csv", "analyze", "--shock", "custom", "--point", "10Y=25", "--point",
            "1M=-10",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("tenor,label,original_yield,shocked_yield,delta_bps,duration,dv01")
    );
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 13);
    let ten_year = rows.iter().find(|r| r.starts_with("10.0,")).unwrap();
    assert!(ten_year.contains(",4.01,4.26,"), "{ten_year}");
    let two_year = rows.iter().find(|r| r.starts_with("2.0,")).unwrap();
    assert!(two_year.contains(",3.46,3.46,0.0,"), "{two_year}");
}

#[test]
fn test_prior_year_fallback() {
    let dir = tempfile::tempdir().unwrap();
    write_year(
        dir.path(),
        current_year() - 1,
        &["12/31/2024,4.40,4.39,4.37,4.32,4.24,4.16,4.25,4.27,4.38,4.48,4.58,4.86,4.78"],
    );
    let json = stdout_json(curveshock(dir.path()).args(["--format", "json", "curve"]));
    assert_eq!(json["as_of"], "12/31/2024");
}

#[test]
fn test_no_data_fails() {
    let dir = tempfile::tempdir().unwrap();
    curveshock(dir.path())
        .arg("curve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No cached data available"));
}

#[test]
fn test_invalid_pivot_fails() {
    let dir = fixture();
    curveshock(dir.path())
        .args(["analyze", "--shock", "steepener", "--magnitude", "10", "--pivot", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid shock parameters"));
}

#[test]
fn test_argument_errors() {
    let dir = fixture();
    curveshock(dir.path())
        .args(["analyze", "--shock", "sideways"])
        .assert()
        .failure();

    curveshock(dir.path())
        .args(["analyze", "--shock", "custom", "--point", "ten=5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid point"));

    curveshock(dir.path())
        .args(["analyze", "--shock", "parallel", "--magnitude", "5", "--pivot", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pivot only applies"));
}

#[test]
fn test_config_file() {
    let dir = fixture();
    let config = dir.path().join("curveshock.toml");
    std::fs::write(
        &config,
        format!(
            "[source]\nkind = \"directory\"\ndirectory = {:?}\n\n[cache]\nttl_secs = 60\n",
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("curveshock").unwrap();
    cmd.env("RUST_LOG", "warn")
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "curve"]);
    let json = stdout_json(&mut cmd);
    assert_eq!(json["as_of"], "10/17/2025");

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[cache]\nttl_secs = 0\n").unwrap();
    Command::cargo_bin("curveshock")
        .unwrap()
        .arg("--config")
        .arg(&bad)
        .arg("curve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cache.ttl_secs"));
}
