// tests/output_test.rs
use semver_bump::output::{set_action_output, GITHUB_OUTPUT_ENV};
use serial_test::serial;
use std::env;
use std::fs;

#[test]
#[serial]
fn test_set_action_output_uses_github_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("github_output");

    env::set_var(GITHUB_OUTPUT_ENV, &path);
    let result = set_action_output("new_version", "v1.2.4");
    env::remove_var(GITHUB_OUTPUT_ENV);

    result.unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "new_version=v1.2.4\n");
}

#[test]
#[serial]
fn test_set_action_output_twice_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("github_output");

    env::set_var(GITHUB_OUTPUT_ENV, &path);
    let first = set_action_output("new_version", "1.0.0");
    let second = set_action_output("other", "x");
    env::remove_var(GITHUB_OUTPUT_ENV);

    first.unwrap();
    second.unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "new_version=1.0.0\nother=x\n"
    );
}

#[test]
#[serial]
fn test_set_action_output_without_runner_prints() {
    env::remove_var(GITHUB_OUTPUT_ENV);
    assert!(set_action_output("new_version", "1.0.0").is_ok());
}
