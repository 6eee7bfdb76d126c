// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary inside `dir` with the user config directory pointed at it,
/// so no config file outside the test can leak in.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_increment_version"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .output()
        .expect("Failed to execute increment_version")
}

fn run(args: &[&str]) -> Output {
    let dir = TempDir::new().expect("Could not create temp dir");
    run_in(dir.path(), args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn assert_failure(output: &Output) {
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(output), "");
    assert_ne!(stderr(output), "");
}

#[test]
fn test_too_few_arguments() {
    assert_failure(&run(&["1.2.3"]));
    assert_failure(&run(&[]));
}

#[test]
fn test_too_many_arguments() {
    assert_failure(&run(&["patch", "1.2.3", "+build123"]));
}

#[test]
fn test_increment_major() {
    let output = run(&["major", "1.2.3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "2.0.0\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_increment_minor() {
    let output = run(&["minor", "1.2.3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1.3.0\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_increment_patch() {
    let output = run(&["patch", "1.2.3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1.2.4\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_increment_from_pre_release() {
    let output = run(&["major", "1.0.0-alpha+001"]);
    assert_eq!(stdout(&output), "2.0.0\n");
    assert!(output.status.success());
}

#[test]
fn test_increment_major_at_u64_max() {
    let output = run(&["major", "18446744073709551615.0.0"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "18446744073709551616.0.0\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_increment_patch_beyond_u64() {
    let output = run(&["patch", "99999999999999999999.0.0"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "99999999999999999999.0.1\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_fields_flag_beyond_u64() {
    let output = run(&["--fields", "patch", "18446744073709551616.0.9"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("18446744073709551616.0.10\n"));
    assert!(out.contains("major = \"18446744073709551616\""));
    assert!(out.contains("patch = 10"));
}

#[test]
fn test_newline_in_build_metadata_is_rejected() {
    let output = run(&["patch", "1.2.3+a\nb"]);
    assert_failure(&output);
    assert!(stderr(&output).contains("build"));
}

#[test]
fn test_invalid_version() {
    let output = run(&["patch", "01.2.3"]);
    assert_failure(&output);
    assert!(stderr(&output).contains("01.2.3"));
}

#[test]
fn test_invalid_policy() {
    let output = run(&["micro", "1.2.3"]);
    assert_failure(&output);
    assert!(stderr(&output).contains("micro"));
}

#[test]
fn test_invalid_pre_release() {
    assert_failure(&run(&["patch", "1.2.3-alpha.01"]));
}

#[test]
fn test_help_goes_to_stdout() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("increment_version"));
}

#[test]
fn test_fields_flag() {
    let output = run(&["--fields", "minor", "1.2.3-rc.1"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("1.3.0\n"));
    assert!(out.contains("minor = 3"));
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_local_config_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("increment_version.toml"),
        r#"
[output]
pattern = "v{version}"

[input]
strip_prefixes = ["v"]
"#,
    )
    .unwrap();

    let output = run_in(dir.path(), &["patch", "v1.2.3"]);
    assert_eq!(stdout(&output), "v1.2.4\n");
    assert!(output.status.success());
}

#[test]
fn test_broken_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[output\npattern = 1").unwrap();

    let output = run_in(dir.path(), &["--config", path.to_str().unwrap(), "patch", "1.2.3"]);
    assert_failure(&output);
    assert!(stderr(&output).contains("Invalid config file"));
}
