//! Configuration management for exprkit
//!
//! This module provides the defaults the builders fall back to, with support for:
//! - Environment variables
//! - YAML/TOML configuration files
//! - Configuration validation

use crate::core::error::{Error, Result};
use crate::exprs::general::{DEFAULT_BUCKETIZE_NAME, DEFAULT_NTH_ROW_NAME};
use crate::exprs::html::{DEFAULT_HYPERLINK_NAME, DEFAULT_TOOLTIP_NAME};
use crate::exprs::index::DEFAULT_INDEX_NAME;
use crate::exprs::template::{DEFAULT_PLACEHOLDER, DEFAULT_TEMPLATE_NAME};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod loader;
pub mod validation;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExprKitConfig {
    /// Default output column names
    pub naming: NamingConfig,
    /// String template settings
    pub template: TemplateConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Default output column names of the builders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// `make_index`
    pub index: String,
    /// `bucketize` / `bucketize_lit`
    pub bucketized: String,
    /// `is_every_nth_row`
    pub nth_row: String,
    /// `make_concat_str`
    pub literal: String,
    /// `make_hyperlink`
    pub hyperlink: String,
    /// `make_tooltip`
    pub tooltip: String,
}

/// String template configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Token replaced by column values
    pub placeholder: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace, off)
    pub level: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX_NAME.to_string(),
            bucketized: DEFAULT_BUCKETIZE_NAME.to_string(),
            nth_row: DEFAULT_NTH_ROW_NAME.to_string(),
            literal: DEFAULT_TEMPLATE_NAME.to_string(),
            hyperlink: DEFAULT_HYPERLINK_NAME.to_string(),
            tooltip: DEFAULT_TOOLTIP_NAME.to_string(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Take `other` when it deviates from `default`.
fn merge_field(current: &mut String, other: &str, default: &str) {
    if other != default {
        *current = other.to_string();
    }
}

impl ExprKitConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        loader::load_from_env()
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_from_file(path.as_ref())
    }

    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        loader::load_from_yaml(yaml)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        loader::load_from_toml(toml)
    }

    /// Load configuration with precedence: defaults -> file -> env
    pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<Self> {
        loader::load_with_precedence(config_file)
    }

    /// Validate configuration and return errors if invalid
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        loader::save_to_file(self, path.as_ref())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to YAML: {}", e))
        })
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to TOML: {}", e))
        })
    }

    /// Parsed log level
    pub fn log_level(&self) -> Result<log::LevelFilter> {
        self.logging.level.parse().map_err(|_| {
            Error::ConfigurationError(format!("Invalid log level: {}", self.logging.level))
        })
    }

    /// Cap the `log` macros at the configured level.
    ///
    /// Records above the level are dropped before they reach whichever
    /// logger the application installed.
    pub fn apply_log_level(&self) -> Result<()> {
        let level = self.log_level()?;
        log::set_max_level(level);
        log::debug!("log level capped at {}", level);
        Ok(())
    }

    /// Merge another configuration into this one.
    ///
    /// Fields of `other` that still hold their default value do not override.
    pub fn merge(&mut self, other: &Self) {
        let naming = NamingConfig::default();
        merge_field(&mut self.naming.index, &other.naming.index, &naming.index);
        merge_field(
            &mut self.naming.bucketized,
            &other.naming.bucketized,
            &naming.bucketized,
        );
        merge_field(&mut self.naming.nth_row, &other.naming.nth_row, &naming.nth_row);
        merge_field(&mut self.naming.literal, &other.naming.literal, &naming.literal);
        merge_field(
            &mut self.naming.hyperlink,
            &other.naming.hyperlink,
            &naming.hyperlink,
        );
        merge_field(&mut self.naming.tooltip, &other.naming.tooltip, &naming.tooltip);

        merge_field(
            &mut self.template.placeholder,
            &other.template.placeholder,
            DEFAULT_PLACEHOLDER,
        );
        merge_field(
            &mut self.logging.level,
            &other.logging.level,
            &LoggingConfig::default().level,
        );
    }
}
