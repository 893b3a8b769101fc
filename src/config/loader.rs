//! Configuration loading utilities
//!
//! This module handles loading configuration from various sources with proper
//! precedence and validation.

use super::*;
use crate::core::error::{Error, Result};
use std::env;
use std::fs;
use std::path::Path;

/// Environment variables overriding the default output names
const NAME_VARS: [&str; 6] = [
    "EXPRKIT_INDEX_NAME",
    "EXPRKIT_BUCKETIZED_NAME",
    "EXPRKIT_NTH_ROW_NAME",
    "EXPRKIT_LITERAL_NAME",
    "EXPRKIT_HYPERLINK_NAME",
    "EXPRKIT_TOOLTIP_NAME",
];

/// Load configuration from environment variables
pub fn load_from_env() -> Result<ExprKitConfig> {
    let mut config = ExprKitConfig::default();
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Overwrite the fields of `config` whose environment variable is set.
///
/// Unset variables leave the current value alone, whatever it is.
pub fn apply_env_overrides(config: &mut ExprKitConfig) {
    // Output names
    for var in NAME_VARS {
        if let Ok(value) = env::var(var) {
            let slot = match var {
                "EXPRKIT_INDEX_NAME" => &mut config.naming.index,
                "EXPRKIT_BUCKETIZED_NAME" => &mut config.naming.bucketized,
                "EXPRKIT_NTH_ROW_NAME" => &mut config.naming.nth_row,
                "EXPRKIT_LITERAL_NAME" => &mut config.naming.literal,
                "EXPRKIT_HYPERLINK_NAME" => &mut config.naming.hyperlink,
                _ => &mut config.naming.tooltip,
            };
            *slot = value;
        }
    }

    // Template configuration
    if let Ok(placeholder) = env::var("EXPRKIT_PLACEHOLDER") {
        config.template.placeholder = placeholder;
    }

    // Logging configuration
    if let Some(log_level) = env_log_level() {
        config.logging.level = log_level;
    }
}

/// `EXPRKIT_LOG_LEVEL`, else `RUST_LOG` when it is a bare level.
///
/// Directive lists such as `info,polars=warn` belong to the logger
/// implementation and are skipped.
fn env_log_level() -> Option<String> {
    if let Ok(level) = env::var("EXPRKIT_LOG_LEVEL") {
        return Some(level);
    }
    env::var("RUST_LOG")
        .ok()
        .filter(|level| level.trim().parse::<log::LevelFilter>().is_ok())
        .map(|level| level.trim().to_string())
}

/// Load configuration from a file (YAML or TOML based on extension)
pub fn load_from_file(path: &Path) -> Result<ExprKitConfig> {
    if !path.exists() {
        return Err(Error::ConfigurationError(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => load_from_yaml(&contents),
        Some("toml") => load_from_toml(&contents),
        Some(ext) => Err(Error::ConfigurationError(format!(
            "Unsupported config file format: {}",
            ext
        ))),
        None => {
            // Try to parse as YAML first, then TOML
            load_from_yaml(&contents).or_else(|_| load_from_toml(&contents))
        },
    }
}

/// Load configuration from YAML string
pub fn load_from_yaml(yaml: &str) -> Result<ExprKitConfig> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse YAML config: {}", e)))
}

/// Load configuration from TOML string
pub fn load_from_toml(toml: &str) -> Result<ExprKitConfig> {
    toml::from_str(toml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse TOML config: {}", e)))
}

/// Load configuration with precedence: defaults -> file -> environment
pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<ExprKitConfig> {
    let mut config = match config_file {
        Some(file_path) => load_from_file(file_path.as_ref())?,
        None => ExprKitConfig::default(),
    };

    // Environment has the highest precedence
    apply_env_overrides(&mut config);

    config.validate()?;
    log::debug!("loaded configuration: {:?}", config);

    Ok(config)
}

/// Save configuration to a file
pub fn save_to_file(config: &ExprKitConfig, path: &Path) -> Result<()> {
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => config.to_yaml()?,
        Some("toml") => config.to_toml()?,
        Some(ext) => {
            return Err(Error::ConfigurationError(format!(
                "Unsupported config file format: {}",
                ext
            )))
        },
        None => config.to_yaml()?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigurationError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    fs::write(path, contents).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to write config file {}: {}",
            path.display(),
            e
        ))
    })
}
