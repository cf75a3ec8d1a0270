//! Integration test: `inspecta report` exit codes and artifacts.
//!
//! Each test builds a scratch workspace with a config, a problem stream and
//! a small Rust source so reports contain real highlighted fragments.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const SOURCE: &str = "fn main() {\n    let x = 1;\n    drop(x);\n}\n";

const PROBLEMS: &str = r#"[
  {"inspection_id": "UnusedVariable", "file": "src/main.rs", "line": 2, "column": 9,
   "message": "unused variable `x`", "highlight": "unused"},
  {"inspection_id": "RedundantDrop", "file": "src/main.rs", "line": 3,
   "message": "call to drop on a Copy value"},
  {"inspection_id": "Spelling", "file": "README.md", "message": "typo"}
]"#;

fn workspace(config: &str) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::create_dir_all(dir.path().join("src")).expect("failed to create src");
    fs::write(dir.path().join("src/main.rs"), SOURCE).expect("failed to write source");
    fs::write(dir.path().join("problems.json"), PROBLEMS).expect("failed to write problems");
    fs::write(dir.path().join("inspections.toml"), config).expect("failed to write config");
    dir
}

fn run(dir: &TempDir, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_inspecta"))
        .args(["report", "--problems", "problems.json", "--quiet"])
        .args(extra)
        .current_dir(dir.path())
        .output()
        .expect("failed to execute inspecta")
}

const WARNING_BUDGET_ONE: &str = r#"
[inspections]
warnings = ["UnusedVariable", "RedundantDrop"]

[thresholds]
max_warnings = 1
"#;

#[test]
fn exceeded_budget_exits_with_threshold_code() {
    let dir = workspace(WARNING_BUDGET_ONE);
    let output = run(&dir, &[]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn ignore_failures_still_writes_reports() {
    let dir = workspace(WARNING_BUDGET_ONE);
    let output = run(&dir, &["--ignore-failures"]);
    assert_eq!(output.status.code(), Some(0));

    let reports = dir.path().join("build/reports/inspections");
    let html = fs::read_to_string(reports.join("main.html")).expect("html report");
    assert!(html.contains("<unused>x</unused>"));
    assert!(html.contains("In file <b>README.md</b>:"));
    assert!(reports.join("main.txt").exists());
    assert!(reports.join("main.json").exists());
}

#[test]
fn generous_budget_passes() {
    let dir = workspace("[inspections]\nwarnings = [\"UnusedVariable\"]\n");
    let output = run(&dir, &[]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn json_flag_prints_outcome() {
    let dir = workspace(WARNING_BUDGET_ONE);
    let output = run(&dir, &["--json", "--ignore-failures"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is not valid JSON");
    assert_eq!(value["verdict"]["passed"], false);
    assert_eq!(value["verdict"]["warning_count"], 2);
    assert_eq!(value["artifacts"].as_array().map(Vec::len), Some(3));
}

#[test]
fn missing_config_is_invalid_input() {
    let dir = workspace("");
    fs::remove_file(dir.path().join("inspections.toml")).expect("remove config");
    let output = run(&dir, &[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_problem_stream_is_invalid_input() {
    let dir = workspace(WARNING_BUDGET_ONE);
    fs::remove_file(dir.path().join("problems.json")).expect("remove problems");
    let output = run(&dir, &[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn conflicting_lists_are_invalid_input() {
    let dir = workspace("[inspections]\nerrors = [\"A\"]\nwarnings = [\"A\"]\n");
    let output = run(&dir, &[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = workspace("# custom\n");
    let init = |force: bool| {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_inspecta"));
        cmd.arg("init").current_dir(dir.path());
        if force {
            cmd.arg("--force");
        }
        cmd.output().expect("failed to execute inspecta")
    };

    assert_eq!(init(false).status.code(), Some(1));
    assert_eq!(init(true).status.code(), Some(0));
    let written = fs::read_to_string(dir.path().join("inspections.toml")).unwrap();
    assert!(written.contains("[thresholds]"));
}
