// logdiff - tests/e2e_cli.rs
//
// End-to-end tests driving the compiled binary.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn logdiff() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_logdiff"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_wrong_argument_count_fails_with_usage() {
    let output = logdiff().arg("only-one").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn cli_no_save_prints_report() {
    let output = logdiff()
        .arg(fixture("older"))
        .arg(fixture("newer"))
        .arg("--no-save")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("New Log Messages for 10.0.0.1"));
    assert!(stdout.contains("[New Warnings]\n2024-01-02T00:00 Warning: CPU high"));
    assert!(stdout.contains("[Last Criticals]\n2024-01-01T00:00 Critical: Disk full"));
    assert!(!stdout.contains("Output saved to"));
}

#[test]
fn cli_prompt_yes_saves_report() {
    let dir = tempfile::tempdir().unwrap();
    let older = dir.path().join("older");
    let newer = dir.path().join("newer");
    fs::create_dir(&older).unwrap();
    fs::create_dir(&newer).unwrap();
    fs::write(older.join("h_1.log"), "").unwrap();
    fs::write(newer.join("h_2.log"), "Severity = Critical\nMessage = boom\n").unwrap();

    let mut child = logdiff()
        .arg(&older)
        .arg(&newer)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"Y\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Do you want to save the output messages to a file? (y/n): "));
    assert!(stdout.contains("Output saved to"));

    let saved = fs::read_to_string(newer.join("new_messages_output.txt")).unwrap();
    assert!(saved.contains(" Critical: boom"));
}

#[test]
fn cli_prompt_other_answer_does_not_save() {
    let dir = tempfile::tempdir().unwrap();

    let mut child = logdiff()
        .arg(dir.path())
        .arg(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"sure\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert!(!dir.path().join("new_messages_output.txt").exists());
}

#[test]
fn cli_json_and_csv_exports() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("report.json");
    let csv = dir.path().join("report.csv");

    let output = logdiff()
        .arg(fixture("older"))
        .arg(fixture("newer"))
        .arg("--no-save")
        .arg("--json")
        .arg(&json)
        .arg("--csv")
        .arg(&csv)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(value["hosts"][0]["new_warnings"][0]["message"], "CPU high");

    let csv_text = fs::read_to_string(&csv).unwrap();
    assert!(csv_text.starts_with("host,section,timestamp,severity,message"));
    assert!(csv_text.contains("10.0.0.1,last_criticals,2024-01-01T00:00,Critical,Disk full"));
}

#[test]
fn cli_malformed_log_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let older = dir.path().join("older");
    let newer = dir.path().join("newer");
    fs::create_dir(&older).unwrap();
    fs::create_dir(&newer).unwrap();
    fs::write(older.join("h_1.log"), "Severity Critical\n").unwrap();
    fs::write(newer.join("h_2.log"), "").unwrap();

    let output = logdiff()
        .arg(&older)
        .arg(&newer)
        .arg("--no-save")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed log line"), "stderr: {stderr}");
}

#[test]
fn cli_failed_save_still_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    let older = dir.path().join("older");
    let newer = dir.path().join("newer");
    fs::create_dir(&older).unwrap();
    fs::create_dir(&newer).unwrap();
    fs::write(older.join("h_1.log"), "").unwrap();
    fs::write(newer.join("h_2.log"), "Severity = Critical\nMessage = boom\n").unwrap();
    // A directory occupying the output name makes the write fail.
    fs::create_dir(newer.join("new_messages_output.txt")).unwrap();

    let output = logdiff()
        .arg(&older)
        .arg(&newer)
        .arg("--save")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" Critical: boom"), "stdout: {stdout}");
    assert!(!stdout.contains("Output saved to"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Export error"), "stderr: {stderr}");
}
