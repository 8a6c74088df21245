//! Tests that drive the compiled release-gate binary

use std::path::Path;
use std::process::{Command, Output};

use super::helpers::*;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_release-gate"))
        .args(args)
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run release-gate")
}

fn run_with_base(base: &Path) -> Output {
    let base = base.to_str().expect("temp path is valid UTF-8");
    run_cli(&["--base", base])
}

#[test]
fn test_ready_project_exits_zero() {
    let project = create_ready_project().unwrap();
    let output = run_with_base(project.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "stdout:\n{stdout}");
    assert!(stdout.contains("✔ Doc: project-overview.md — OK"));
    assert!(stdout.contains(&"-".repeat(60)));
    assert!(stdout.contains("Release Status: READY ✅  (17 checks passed)"));
}

#[test]
fn test_blocked_project_exits_one() {
    let project = create_ready_project().unwrap();
    remove_doc(project.path(), "docs/user-stories.md").unwrap();

    let output = run_with_base(project.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1), "stdout:\n{stdout}");
    assert!(stdout.contains("✖ Doc: user-stories.md — Missing file"));
    assert!(stdout.contains("Release Status: BLOCKED ❌  (2 failing checks)"));
}

#[test]
fn test_report_lines_in_check_order() {
    let project = create_ready_project().unwrap();
    let output = run_with_base(project.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let first = stdout.find("Doc: project-overview.md").unwrap();
    let headings = stdout.find("Headings check: requirements.md").unwrap();
    let coverage = stdout.find("User story coverage").unwrap();
    assert!(first < headings && headings < coverage);
}

#[test]
fn test_config_file_selects_documents() {
    let project = create_ready_project().unwrap();
    let manifest = project.path().join("release.toml");
    std::fs::write(
        &manifest,
        r#"
[[documents]]
label = "Doc"
path = "docs/project-overview.md"

[coverage]
stories = "docs/user-stories.md"
uat = "test-cases/uat-test-cases.md"
"#,
    )
    .unwrap();

    let output = run_cli(&[
        "--config",
        manifest.to_str().unwrap(),
        "--base",
        project.path().to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout:\n{stdout}");
    assert!(stdout.contains("(2 checks passed)"));
}

#[test]
fn test_invalid_config_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let manifest = dir.path().join("release.toml");
    std::fs::write(&manifest, "base = \"x\"\n").unwrap();

    let output = run_cli(&["--config", manifest.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Invalid config"), "stderr:\n{stderr}");
}

#[test]
fn test_print_config_outputs_default_manifest() {
    let output = run_cli(&["--print-config", "--base", "/srv/project"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("/srv/project"));
    assert!(stdout.contains("[[documents]]"));
    assert!(stdout.contains("Technical Requirements"));
}

#[test]
fn test_misspelled_config_table_is_fatal() {
    let project = create_ready_project().unwrap();
    let manifest = project.path().join("release.toml");
    std::fs::write(
        &manifest,
        r#"
[[documents]]
label = "Doc"
path = "docs/requirements.md"

[[heading]]
path = "docs/requirements.md"
required = ["Technical Requirements"]
"#,
    )
    .unwrap();

    let output = run_cli(&[
        "--config",
        manifest.to_str().unwrap(),
        "--base",
        project.path().to_str().unwrap(),
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2), "stderr:\n{stderr}");
    assert!(stderr.contains("Failed to parse config file"), "stderr:\n{stderr}");
}
