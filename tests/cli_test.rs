use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/relaunch.yml")
}

/// Command running inside an empty directory, isolated from user config
fn taskpath(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskpath").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_path_command() {
    let dir = TempDir::new().unwrap();
    taskpath(&dir)
        .arg("path")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("task1\tKickoff\t1d\n"))
        .stdout(predicate::str::contains("task3\tDesign\t4d\n"))
        .stdout(predicate::str::contains("Backend").not())
        .stdout(predicate::str::ends_with("total\t11d\n"));
}

#[test]
fn test_render_gantt_to_stdout() {
    let dir = TempDir::new().unwrap();
    taskpath(&dir)
        .args(["render", "--format", "gantt"])
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gantt\n    title Website relaunch\n"))
        .stdout(predicate::str::contains("    section Build\n"))
        .stdout(predicate::str::contains("    Backend :task4, after task2, 7d\n"));
}

#[test]
fn test_render_writes_files() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    taskpath(&dir)
        .args(["render", "-f", "flowchart", "-f", "json", "--output-dir"])
        .arg(&out)
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(out.join("relaunch.flow.mmd").exists());
    let json = std::fs::read_to_string(out.join("relaunch.json")).unwrap();
    assert!(json.contains("\"edges\""));
    assert!(!out.join("relaunch.gantt.mmd").exists());
}

#[test]
fn test_local_config_selects_formats() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("taskpath.yml"), "formats: [dot]\n").unwrap();

    taskpath(&dir)
        .arg("render")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph taskpath {"));
}

#[test]
fn test_check_reports_problems() {
    let dir = TempDir::new().unwrap();
    let plan = dir.path().join("broken.yml");
    std::fs::write(
        &plan,
        "tasks:\n  - name: Start\n  - name: A\n    depends_on: [Start, B]\n  - name: B\n    depends_on: [A, Ghost]\n",
    )
    .unwrap();

    taskpath(&dir)
        .arg("check")
        .arg(&plan)
        .assert()
        .failure()
        .stdout(predicate::str::contains("task3 (B): unknown dependency \"Ghost\""))
        .stdout(predicate::str::contains("cycle: task2 -> task3 -> task2"));
}

#[test]
fn test_check_fails_on_cycle_without_roots() {
    let dir = TempDir::new().unwrap();
    let plan = dir.path().join("loop.yml");
    std::fs::write(
        &plan,
        "tasks:\n  - name: A\n    depends_on: [B]\n  - name: B\n    depends_on: [A]\n",
    )
    .unwrap();

    taskpath(&dir)
        .arg("check")
        .arg(&plan)
        .assert()
        .failure()
        .stdout(predicate::str::contains("cycle: task1 -> task2 -> task1"));
}

#[test]
fn test_check_clean_plan() {
    let dir = TempDir::new().unwrap();
    taskpath(&dir)
        .arg("check")
        .arg(fixture())
        .assert()
        .success()
        .stdout("ok: 6 tasks, 6 dependencies\n");
}

#[test]
fn test_strict_flag_fails_on_unknown_dependency() {
    let dir = TempDir::new().unwrap();
    let plan = dir.path().join("typo.yml");
    std::fs::write(&plan, "tasks:\n  - name: Build\n    depends_on: [Setpu]\n").unwrap();

    taskpath(&dir).arg("path").arg(&plan).assert().success();
    taskpath(&dir)
        .args(["path", "--strict"])
        .arg(&plan)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown task \"Setpu\""));
}

#[test]
fn test_missing_plan_fails() {
    let dir = TempDir::new().unwrap();
    taskpath(&dir)
        .args(["path", "does-not-exist.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read plan"));
}
