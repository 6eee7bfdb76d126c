use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "increment_version.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".increment_version.toml";

/// Placeholder replaced by the bumped version in `output.pattern`
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Represents the complete configuration for increment_version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub input: InputConfig,
}

fn default_pattern() -> String {
    VERSION_PLACEHOLDER.to_string()
}

/// How the bumped version is printed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// `{version}` is replaced by the canonical string
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Also print the named-field record
    #[serde(default)]
    pub fields: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            pattern: default_pattern(),
            fields: false,
        }
    }
}

/// How the VERSION argument is pre-processed before parsing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct InputConfig {
    /// Prefixes stripped from the argument, first match wins (e.g. `["v", "V"]`)
    #[serde(default)]
    pub strip_prefixes: Vec<String>,
}

impl InputConfig {
    /// Remove the first configured prefix that `raw` starts with
    pub fn strip<'a>(&self, raw: &'a str) -> &'a str {
        self.strip_prefixes
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .find_map(|prefix| raw.strip_prefix(prefix.as_str()))
            .unwrap_or(raw)
    }
}

impl OutputConfig {
    pub fn render(&self, version: &str) -> String {
        self.pattern.replace(VERSION_PLACEHOLDER, version)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `increment_version.toml` in current directory
/// 3. `.increment_version.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, ConfigError> {
    match locate_config(config_path) {
        Some(path) => read_config(&path),
        None => Ok(Config::default()),
    }
}

fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
