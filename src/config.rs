use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VupError};

/// Name of the configuration file looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "vup.toml";

/// Represents the optional vup configuration file.
///
/// Every field may be absent; command-line arguments take precedence over
/// whatever is set here.
///
/// ```toml
/// files = ["version.txt", "pkg/__init__.py"]
/// prehook = "make test"
/// posthook = "git push --follow-tags"
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub files: Option<Vec<PathBuf>>,

    #[serde(default)]
    pub prehook: Option<String>,

    #[serde(default)]
    pub posthook: Option<String>,
}

/// Options supplied explicitly on the command line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliOptions {
    pub files: Vec<PathBuf>,
    pub prehook: Option<String>,
    pub posthook: Option<String>,
}

/// Options after command line and configuration are merged
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedOptions {
    pub files: Vec<PathBuf>,
    pub prehook: Option<String>,
    pub posthook: Option<String>,
}

impl Config {
    /// Merge explicit command-line options over this configuration.
    ///
    /// Files given on the command line replace the configured list entirely;
    /// an empty command-line list falls back to the configured one. Hooks
    /// given on the command line replace the configured hooks one by one.
    pub fn resolve(&self, cli: CliOptions) -> ResolvedOptions {
        let files = if cli.files.is_empty() {
            self.files.clone().unwrap_or_default()
        } else {
            cli.files
        };

        ResolvedOptions {
            files,
            prehook: cli.prehook.or_else(|| self.prehook.clone()),
            posthook: cli.posthook.or_else(|| self.posthook.clone()),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `vup.toml` in current directory
/// 3. `vup/vup.toml` in the user config directory
/// 4. Default (empty) configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or the custom
///   path does not exist
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(path) = user_config_path().filter(|p| p.exists()) {
        path
    } else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)
        .map_err(|e| VupError::config(format!("cannot read {}: {}", path.display(), e)))?;
    parse_config(&config_str)
        .map_err(|e| VupError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vup").join(CONFIG_FILE_NAME))
}
