use crate::error::{BumpError, Result};
use crate::output::DEFAULT_OUTPUT_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "semver-bump.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".semver-bump.toml";

/// Represents the complete configuration for semver-bump.
///
/// Flags and environment variables always win over values from a file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Fallback values for optional inputs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DefaultsConfig {
    /// Pre-release tag used when none is given on the command line
    #[serde(default)]
    pub prerelease_tag: Option<String>,
}

/// Where the computed version is published.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_name")]
    pub name: String,
}

fn default_output_name() -> String {
    DEFAULT_OUTPUT_NAME.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            name: default_output_name(),
        }
    }
}

impl Config {
    /// Pick the pre-release tag: explicit input first, then the configured default
    pub fn resolve_prerelease_tag<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit
            .filter(|tag| !tag.is_empty())
            .or(self.defaults.prerelease_tag.as_deref())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-bump.toml` in current directory
/// 3. `.semver-bump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(Path::new(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return read_config(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG_FILE);
        if user.exists() {
            return read_config(&user);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    log::debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(path)?;
    toml::from_str(&config_str)
        .map_err(|e| BumpError::config(format!("{}: {}", path.display(), e)))
}
