use crate::conf::error::ConfigError;
use crate::conf::types::{AnalysisConfig, MAX_WIDTH};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "indexstat.toml";

/// Loads and validates a config file.
///
/// A relative `input` is taken relative to the directory holding the file.
pub fn load_config(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let mut config: AnalysisConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    validate(&config)?;

    if config.input.is_relative() {
        if let Some(dir) = path.parent() {
            config.input = dir.join(&config.input);
        }
    }

    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Resolves the effective configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
/// `dir` is used when present and built-in defaults otherwise. `input`
/// overrides whatever the file says and is used as given.
pub fn resolve_config(
    dir: &Path,
    path: Option<&Path>,
    input: Option<PathBuf>,
) -> Result<AnalysisConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if candidate.is_file() {
                load_config(&candidate)?
            } else {
                tracing::debug!("no config file, using defaults");
                AnalysisConfig::default()
            }
        }
    };

    if let Some(input) = input {
        config.input = input;
    }

    Ok(config)
}

fn validate(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.width == 0 || config.width > MAX_WIDTH {
        return Err(ConfigError::InvalidWidth {
            width: config.width,
            max: MAX_WIDTH,
        });
    }
    Ok(())
}
