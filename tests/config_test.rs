// tests/config_test.rs
use semver_bump::config::{load_config, Config};
use semver_bump::BumpError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.output.name, "new_version");
    assert_eq!(config.defaults.prerelease_tag, None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[defaults]
prerelease_tag = "beta"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.defaults.prerelease_tag.as_deref(), Some("beta"));
    assert_eq!(config.output.name, "new_version");
}

#[test]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/config_with_defaults.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.defaults.prerelease_tag.as_deref(), Some("rc"));
    assert_eq!(config.output.name, "next_version");
}

#[test]
fn test_load_malformed_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[defaults\nprerelease_tag = 1").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, BumpError::Config(_)));
}

#[test]
fn test_load_missing_explicit_file() {
    let err = load_config(Some("tests/fixtures/does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, BumpError::Io(_)));
}
