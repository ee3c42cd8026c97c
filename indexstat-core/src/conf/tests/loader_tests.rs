use crate::conf::{AnalysisConfig, ConfigError, DEFAULT_CONFIG_FILE, load_config, resolve_config};
use crate::records::{Columns, MalformedPolicy};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn defaults_match_the_six_index_layout() {
    let config = AnalysisConfig::default();

    assert_eq!(config.input, PathBuf::from("indices.log"));
    assert_eq!(config.columns(), Columns::new(1, 6));
    assert_eq!(config.on_malformed, MalformedPolicy::Fail);
}

#[test]
fn load_full_config() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("indexstat.toml");
    fs::write(
        &path,
        r#"
input = "run/selector.log"
first_column = 2
width = 4
on_malformed = "skip"
"#,
    )
    .unwrap();

    // Act
    let config = load_config(&path).unwrap();

    // Assert
    assert_eq!(
        config,
        AnalysisConfig {
            input: dir.path().join("run/selector.log"),
            first_column: 2,
            width: 4,
            on_malformed: MalformedPolicy::Skip,
        }
    );
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("indexstat.toml");
    fs::write(&path, "on_malformed = \"skip\"\n").unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(config.width, 6);
    assert_eq!(config.first_column, 1);
    assert_eq!(config.on_malformed, MalformedPolicy::Skip);
}

#[test]
fn relative_input_is_resolved_next_to_config() {
    // Arrange
    let dir = tempdir().unwrap();
    let nested = dir.path().join("runs/a");
    fs::create_dir_all(&nested).unwrap();
    let path = nested.join("indexstat.toml");
    fs::write(&path, "input = \"indices.log\"\n").unwrap();

    // Act
    let config = load_config(&path).unwrap();

    // Assert
    assert_eq!(config.input, nested.join("indices.log"));
}

#[test]
fn absolute_input_is_kept() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("indexstat.toml");
    let log = dir.path().join("elsewhere").join("indices.log");
    fs::write(&path, format!("input = {:?}\n", log.display().to_string())).unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(config.input, log);
}

#[test]
fn default_input_follows_the_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("indexstat.toml");
    fs::write(&path, "width = 6\n").unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(config.input, dir.path().join("indices.log"));
}

#[test]
fn zero_width_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("indexstat.toml");
    fs::write(&path, "width = 0\n").unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidWidth { width: 0, max: 20 }));
}

#[test]
fn oversized_width_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("indexstat.toml");
    fs::write(&path, "width = 21\n").unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidWidth { width: 21, .. }));
}

#[test]
fn unknown_keys_are_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("indexstat.toml");
    fs::write(&path, "colour = \"blue\"\n").unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn bad_policy_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("indexstat.toml");
    fs::write(&path, "on_malformed = \"ignore\"\n").unwrap();

    assert!(matches!(
        load_config(&path).unwrap_err(),
        ConfigError::Parse { .. }
    ));
}

#[test]
fn explicit_missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let err = resolve_config(dir.path(), Some(path.as_path()), None).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn resolve_without_file_uses_defaults() {
    let dir = tempdir().unwrap();

    let config = resolve_config(dir.path(), None, None).unwrap();

    assert_eq!(config, AnalysisConfig::default());
}

#[test]
fn resolve_picks_up_default_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "width = 5\n").unwrap();

    let config = resolve_config(dir.path(), None, None).unwrap();

    assert_eq!(config.width, 5);
}

#[test]
fn input_argument_overrides_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "input = \"a.log\"\n").unwrap();

    let config = resolve_config(dir.path(), None, Some(PathBuf::from("b.log"))).unwrap();

    assert_eq!(config.input, PathBuf::from("b.log"));
    assert_ne!(config.input, dir.path().join("a.log"));
}
