use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const SAMPLE_DATA: &str = "Mimi,0.5,1.2,F,low,50,dry\nRex,3,7.0,M,high,80,wet\nLuna,2,3.0,F,medium,60,dry\n";

fn cmd() -> Command {
    Command::cargo_bin("purrfect-health").unwrap()
}

fn data_dir(contents: &str) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    fs::write(tmp.path().join("cat_data.txt"), contents).expect("write cat data");
    tmp
}

fn run_without_charts(dir: &Path) -> assert_cmd::assert::Assert {
    cmd()
        .args(["run", "--no-charts", "--data-dir"])
        .arg(dir)
        .assert()
}

#[test]
fn run_writes_report_in_input_order() {
    let tmp = data_dir(SAMPLE_DATA);
    run_without_charts(tmp.path())
        .success()
        .stdout(contains("Evaluated 3 cats (1 kittens, 2 adults)"))
        .stdout(contains("cat_results.txt"));

    let report = fs::read_to_string(tmp.path().join("cat_results.txt")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Name      Age  Sex    Status"));
    assert_eq!(lines[1], "-".repeat(180));
    assert!(lines[2].starts_with("Mimi      0.5  ♀      normal         low"));
    assert!(lines[2].contains("Increase activity level with more playtime"));
    assert!(lines[3].starts_with("Rex       3.0  ♂      normal         high"));
    assert!(lines[3].contains("Maintain current activity level."));
    assert!(lines[4].starts_with("Luna      2.0  ♀      underweight    medium"));
    assert!(lines[4].trim_end().ends_with("Consider switching to a higher-calorie diet."));
    assert!(!tmp.path().join("kittens_weight_chart.png").exists());
}

#[test]
fn json_summary_counts_statuses() {
    let tmp = data_dir(SAMPLE_DATA);
    let output = cmd()
        .args(["run", "--no-charts", "--json", "--data-dir"])
        .arg(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total"], 3);
    assert_eq!(summary["kittens"], 1);
    assert_eq!(summary["adults"], 2);
    assert_eq!(summary["statuses"]["normal"], 2);
    assert_eq!(summary["statuses"]["underweight"], 1);
    assert_eq!(summary["statuses"]["overweight"], 0);
    assert!(summary["chart_paths"].as_array().unwrap().is_empty());
}

#[test]
fn input_override_reads_another_file() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("elsewhere.csv");
    fs::write(&input, "Tom,5,9.5,M,low,90,wet\n").unwrap();
    let out = tmp.path().join("out");

    cmd()
        .args(["run", "--no-charts", "--data-dir"])
        .arg(&out)
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("- overweight: 1"));

    let report = fs::read_to_string(out.join("cat_results.txt")).unwrap();
    assert!(report.contains("Increase playtime or engage in more physical activities"));
}

#[test]
fn missing_input_fails_after_creating_data_dir() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["run", "--no-charts"])
        .assert()
        .failure()
        .stderr(contains("input file not found"));

    assert!(tmp.path().join("purrfecthealth_output").is_dir());
}

#[test]
fn malformed_line_aborts_without_report() {
    let tmp = data_dir("Mimi,0.5,1.2,F,low,50,dry\nRex,3,heavy,M,high,80,wet\n");
    run_without_charts(tmp.path())
        .failure()
        .stderr(contains("line 2: weight is not a number"));
    assert!(!tmp.path().join("cat_results.txt").exists());
}

#[test]
fn unknown_activity_aborts() {
    let tmp = data_dir("Mimi,0.5,1.2,F,lazy,50,dry\n");
    run_without_charts(tmp.path())
        .failure()
        .stderr(contains("unknown activity level"));
}

#[test]
fn evaluate_prints_verdict() {
    cmd()
        .args(["evaluate", "--age", "3", "--weight", "7.0", "--gender", "M", "--activity", "high"])
        .assert()
        .success()
        .stdout(contains("Status: normal"))
        .stdout(contains("Diet: Maintain current diet."))
        .stdout(contains("Activity: Maintain current activity level."));
}

#[test]
fn evaluate_omits_empty_advice() {
    cmd()
        .args(["evaluate", "--age", "2", "--weight", "3.0", "--gender", "F", "--activity", "medium"])
        .assert()
        .success()
        .stdout(contains("Status: underweight"))
        .stdout(contains("Activity:").not());
}

#[test]
fn crlf_data_file_runs() {
    let tmp = data_dir(&SAMPLE_DATA.replace('\n', "\r\n"));
    run_without_charts(tmp.path())
        .success()
        .stdout(contains("Evaluated 3 cats (1 kittens, 2 adults)"));

    let report = fs::read_to_string(tmp.path().join("cat_results.txt")).unwrap();
    assert_eq!(report.lines().count(), 5);
    assert!(!report.contains('\r'));
}

#[test]
fn blank_line_aborts_without_report() {
    let tmp = data_dir("Mimi,0.5,1.2,F,low,50,dry\n\nRex,3,7.0,M,high,80,wet\n");
    run_without_charts(tmp.path())
        .failure()
        .stderr(contains("line 2: expected 7 comma-separated fields, found 0"));
    assert!(!tmp.path().join("cat_results.txt").exists());
}
