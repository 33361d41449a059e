//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{Result, SupportDeskError};

use super::Settings;

const KNOWN_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(SupportDeskError::Config("Bot token is required".to_string()));
    }

    if config.owner_password.is_empty() {
        return Err(SupportDeskError::Config(
            "Owner password must be configured".to_string(),
        ));
    }

    if config.owner_default_name.is_empty() {
        return Err(SupportDeskError::Config(
            "Owner default name must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if !KNOWN_LOG_LEVELS.contains(&config.level.as_str()) {
        return Err(SupportDeskError::Config(format!(
            "Unknown log level: {}",
            config.level
        )));
    }

    if config.file_path.is_empty() {
        return Err(SupportDeskError::Config(
            "Log file path is required".to_string(),
        ));
    }

    if config.max_files == 0 {
        return Err(SupportDeskError::Config(
            "Max log files must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
