//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - Command-line arguments, which take precedence at the call sites

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider registry settings
    pub registry: RegistryConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Code generation settings
    pub generation: GenerationConfig,
}

/// Provider registry configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Registry document used when `--registry` and `--spec` are absent
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, pretty, json)
    pub format: Option<String>,
}

/// Code generation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Go package used when none is given on the command line
    pub package_name: Option<String>,

    /// Relative `--schema-out`/`--model-out`/`--summary-out` paths resolve against this directory
    pub output_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
        }
    }
}

/// Serialization format chosen from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match FileFormat::from_path(path) {
            FileFormat::Toml => toml::from_str(&content)?,
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".tfsdk2fw.toml"),
            PathBuf::from(".tfsdk2fw.yaml"),
            PathBuf::from(".tfsdk2fw.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let tfsdk2fw_dir = config_dir.join("tfsdk2fw");
            paths.push(tfsdk2fw_dir.join("config.toml"));
            paths.push(tfsdk2fw_dir.join("config.yaml"));
            paths.push(tfsdk2fw_dir.join("config.json"));
        }

        paths
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileFormat::from_path(path) {
            FileFormat::Toml => self.to_toml()?,
            FileFormat::Yaml => serde_yaml::to_string(self)?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
