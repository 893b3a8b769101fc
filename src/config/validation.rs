//! Configuration validation utilities
//!
//! This module validates configuration values before the builders rely on them.

use super::*;
use crate::core::error::{Error, Result};

/// Validate the entire configuration
pub fn validate_config(config: &ExprKitConfig) -> Result<()> {
    validate_naming_config(&config.naming)?;
    validate_template_config(&config.template)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate the output column names
pub fn validate_naming_config(config: &NamingConfig) -> Result<()> {
    let names = [
        ("index", &config.index),
        ("bucketized", &config.bucketized),
        ("nth_row", &config.nth_row),
        ("literal", &config.literal),
        ("hyperlink", &config.hyperlink),
        ("tooltip", &config.tooltip),
    ];

    for (field, value) in names {
        if value.trim().is_empty() {
            return Err(Error::ConfigurationError(format!(
                "Output name for '{}' cannot be empty",
                field
            )));
        }
    }

    Ok(())
}

/// Validate template configuration
pub fn validate_template_config(config: &TemplateConfig) -> Result<()> {
    if config.placeholder.is_empty() {
        return Err(Error::ConfigurationError(
            "Template placeholder cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
pub fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    config.level.parse::<log::LevelFilter>().map_err(|_| {
        Error::ConfigurationError(format!(
            "Invalid log level: {}. Must be one of: off, error, warn, info, debug, trace",
            config.level
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ExprKitConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut config = ExprKitConfig::default();
        config.naming.hyperlink = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("hyperlink"));
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let config = TemplateConfig {
            placeholder: String::new(),
        };
        assert!(validate_template_config(&config).is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = LoggingConfig::default();
        for level in ["off", "error", "warn", "debug", "TRACE"] {
            config.level = level.to_string();
            assert!(validate_logging_config(&config).is_ok());
        }
        config.level = "verbose".to_string();
        assert!(validate_logging_config(&config).is_err());
    }
}
