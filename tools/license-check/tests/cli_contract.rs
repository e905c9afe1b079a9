use std::fs;
use std::path::Path;
use std::process::Command;

use license_check::reference::ReferenceText;

fn license_check_binary() -> &'static str {
    env!("CARGO_BIN_EXE_license-check")
}

fn run_license_check(root: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(license_check_binary())
        .current_dir(root)
        .args(["--year", "2026"])
        .args(args)
        .output()
        .expect("failed to run license-check");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(1);
    (stdout, stderr, code)
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn seed(root: &Path) {
    let header = ReferenceText::for_year(2026);
    let prose = header.as_str().replace("//", "");
    write_file(&root.join("LICENSE.txt"), &prose);
    write_file(
        &root.join("src/EnergyPlus/a.cc"),
        &format!("{}int main(){{}}\n", header.as_str()),
    );
}

#[test]
fn clean_tree_prints_nothing_and_exits_zero() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());

    let (stdout, stderr, code) = run_license_check(root.path(), &[]);

    assert_eq!(stdout, "");
    assert!(stderr.contains("clean"), "stderr: {stderr}");
    assert_eq!(code, 0);
}

#[test]
fn diagnostics_are_json_lines_and_exit_zero() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());
    write_file(&root.path().join("src/EnergyPlus/b.hh"), "int x;");

    let (stdout, _, code) = run_license_check(root.path(), &[]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines,
        vec!["{\"tool\":\"license-check\",\"file\":\"src/EnergyPlus/b.hh\",\"line\":1,\"messagetype\":\"error\",\"message\":\"License text missing\"}"]
    );
    let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(value["messagetype"], "error");
    assert_eq!(code, 0);
}

#[test]
fn strict_mode_fails_on_diagnostics() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());
    write_file(&root.path().join("tst/EnergyPlus/unit/t.cc"), "TEST(x) {}");

    let (stdout, _, code) = run_license_check(root.path(), &["--strict"]);

    assert_eq!(stdout.lines().count(), 1);
    assert_eq!(code, 1);
}

#[test]
fn strict_mode_passes_on_clean_tree() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());

    let (_, _, code) = run_license_check(root.path(), &["--strict"]);

    assert_eq!(code, 0);
}

#[test]
fn missing_license_file_is_fatal_with_no_diagnostics() {
    let root = tempfile::tempdir().unwrap();
    write_file(&root.path().join("src/EnergyPlus/b.hh"), "int x;");

    let (stdout, stderr, code) = run_license_check(root.path(), &[]);

    assert_eq!(stdout, "");
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("LICENSE.txt"), "stderr: {stderr}");
    assert_eq!(code, 1);
}

#[test]
fn explain_reports_license_divergence_on_stderr() {
    let root = tempfile::tempdir().unwrap();
    seed(root.path());
    write_file(&root.path().join("LICENSE.txt"), "EnergyPlus, Copyright (c) 1996-2025");

    let (stdout, stderr, code) = run_license_check(root.path(), &["--explain"]);

    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("LICENSE.txt does not match"));
    assert!(stderr.contains("differs at normalized offset 31"), "stderr: {stderr}");
    assert_eq!(code, 0);
}

#[test]
fn root_dir_flag_overrides_working_directory() {
    let root = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    seed(root.path());
    write_file(&root.path().join("src/EnergyPlus/b.h"), "");

    let root_arg = root.path().to_string_lossy().to_string();
    let (stdout, _, code) =
        run_license_check(elsewhere.path(), &["--root-dir", &root_arg]);

    assert!(stdout.contains("\"file\":\"src/EnergyPlus/b.h\""), "stdout: {stdout}");
    assert_eq!(code, 0);
}
