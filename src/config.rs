//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/patternbook/patternbook.toml`
//! 3. Explicit config file passed with `--config` (always TOML, whatever the extension)
//! 4. Environment variables: `PATTERNBOOK_<SECTION>__<KEY>`

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::creational::OperatingSystem;
use crate::errors::PatternError;

/// Observer demo settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObserverConfig {
    /// Seed for the state generator; unseeded runs differ every time
    pub seed: Option<u64>,
    /// State changes before the first observer is detached
    pub rounds: usize,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rounds: 2,
        }
    }
}

/// Iterator demo settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IteratorConfig {
    pub words: Vec<String>,
    /// Number of slices the pizza is cut into
    pub slices: usize,
}

impl Default for IteratorConfig {
    fn default() -> Self {
        Self {
            words: vec!["First".into(), "Second".into(), "Third".into()],
            slices: 5,
        }
    }
}

/// GUI factory demo settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuiConfig {
    pub system: OperatingSystem,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            system: OperatingSystem::Linux,
        }
    }
}

/// Adapter demo settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdapterConfig {
    /// Starting oven temperature in Fahrenheit
    pub fahrenheit: f64,
    /// Target temperature set through the Celsius interface
    pub celsius: f64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            fahrenheit: 32.0,
            celsius: 180.0,
        }
    }
}

/// Unified configuration for patternbook.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub observer: ObserverConfig,
    pub iterator: IteratorConfig,
    pub gui: GuiConfig,
    pub adapter: AdapterConfig,
}

/// Get the XDG config directory for patternbook.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "patternbook").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("patternbook.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn config_err(e: ConfigError) -> PatternError {
    PatternError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, PatternError> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            debug!("global config: {}", global_path.display());
            builder = builder.add_source(
                File::from(global_path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if let Some(path) = config_file {
            let path = expand_path(path);
            if !path.is_file() {
                return Err(PatternError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("PATTERNBOOK")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("iterator.words")
                .try_parsing(true),
        );

        let settings: Self = builder
            .build()
            .map_err(config_err)?
            .try_deserialize()
            .map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Defaults overlaid with a single TOML document, no global file or env vars.
    pub fn from_toml(content: &str) -> Result<Self, PatternError> {
        let settings: Self = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .map_err(config_err)?
            .try_deserialize()
            .map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the demos cannot run with.
    fn validate(&self) -> Result<(), PatternError> {
        if self.iterator.words.is_empty() {
            return Err(PatternError::Config {
                message: "iterator.words must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, PatternError> {
        toml::to_string_pretty(self).map_err(|e| PatternError::Config {
            message: e.to_string(),
        })
    }
}
