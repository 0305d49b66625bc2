//! # Configuration Module
//!
//! This module provides configuration support for lhc, so a project can keep
//! its accepted licenses and exclusions next to its code instead of in CI
//! scripts.
//!
//! Configuration can be specified in a `.lhc.toml` file at the root of the
//! scanned directory or via the `LHC_CONFIG` environment variable:
//!
//! ```toml
//! licenses = ["Apache-2.0", "LICENSE-HEADER.txt"]
//! exclude = ["/yang/gen/", "/vendor/"]
//! disable-spdx = false
//! max-lines = 50
//! ```
//!
//! Command-line values always take precedence over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::header::LICENSE_HEADER_LINES_MAX;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".lhc.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "LHC_CONFIG";

/// License reference used when neither the command line nor the config
/// names one.
pub const DEFAULT_LICENSE: &str = "license.txt";

/// Main configuration struct for lhc.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  /// Accepted license references (registry names or file paths).
  #[serde(default)]
  pub licenses: Vec<String>,

  /// Path substrings that exclude a file from checking.
  #[serde(default)]
  pub exclude: Vec<String>,

  /// Skip the SPDX identifier check.
  #[serde(default)]
  pub disable_spdx: bool,

  /// Line budget for header extraction.
  #[serde(default)]
  pub max_lines: Option<usize>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A configuration value is invalid.
  #[error("Invalid value for '{key}': {message}")]
  InvalidValue { key: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file cannot be read or
  /// parsed.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config = Self::parse(&content).map_err(|e| match e {
      ConfigError::ParseError { source, .. } => ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
      },
      other => other,
    })?;

    verbose_log!("Loaded {} license references from config", config.licenses.len());

    Ok(config)
  }

  /// Parse and validate configuration from TOML text.
  pub fn parse(content: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
      path: PathBuf::new(),
      source: e,
    })?;
    config.validate()?;
    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - `max-lines` is positive
  /// - no license reference is blank
  fn validate(&self) -> Result<(), ConfigError> {
    if self.max_lines == Some(0) {
      return Err(ConfigError::InvalidValue {
        key: "max-lines".to_string(),
        message: "must be greater than zero".to_string(),
      });
    }

    if self.licenses.iter().any(|l| l.trim().is_empty()) {
      return Err(ConfigError::InvalidValue {
        key: "licenses".to_string(),
        message: "entries cannot be empty".to_string(),
      });
    }

    Ok(())
  }
}

/// Values given on the command line. Empty or `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
  pub licenses: Vec<String>,
  pub excludes: Vec<String>,
  pub disable_spdx: bool,
  pub max_lines: Option<usize>,
}

/// Effective settings of a run after merging the command line, the config
/// file and the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub licenses: Vec<String>,
  pub excludes: Vec<String>,
  pub spdx: bool,
  pub max_lines: usize,
}

impl Settings {
  /// Merges `cli` over `config` over the defaults.
  pub fn resolve(cli: CliOverrides, config: Option<Config>) -> Self {
    let config = config.unwrap_or_default();

    let licenses = if !cli.licenses.is_empty() {
      cli.licenses
    } else if !config.licenses.is_empty() {
      config.licenses
    } else {
      vec![DEFAULT_LICENSE.to_string()]
    };

    let excludes = if cli.excludes.is_empty() { config.exclude } else { cli.excludes };

    Self {
      licenses,
      excludes,
      spdx: !(cli.disable_spdx || config.disable_spdx),
      max_lines: cli.max_lines.or(config.max_lines).unwrap_or(LICENSE_HEADER_LINES_MAX),
    }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `LHC_CONFIG` environment variable
/// 3. `.lhc.toml` in the scanned directory
///
/// # Returns
///
/// The path to the configuration file, or `None` if no config file is found.
pub fn discover_config_path(explicit_path: Option<&Path>, directory: &Path) -> Option<PathBuf> {
  // 1. Explicit path from CLI takes highest priority
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  // 2. Check environment variable
  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  // 3. Check the scanned directory
  let directory_config = directory.join(DEFAULT_CONFIG_FILENAME);
  if directory_config.exists() {
    verbose_log!("Using directory config: {}", directory_config.display());
    return Some(directory_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `directory` - The directory being scanned
/// * `no_config` - If true, skip config file discovery
///
/// # Returns
///
/// The loaded configuration, or `None` if no config file is found.
pub fn load_config(explicit_path: Option<&Path>, directory: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, directory) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
