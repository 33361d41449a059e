//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Password required to claim the owner account
    pub owner_password: String,
    /// Descriptive name given to the owner when none is supplied
    pub owner_default_name: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    pub max_files: u32,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SUPPORTDESK").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from a specific TOML file
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;

        settings.try_deserialize()
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SupportDeskError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                owner_password: String::new(),
                owner_default_name: "Owner".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/supportdesk".to_string(),
                max_files: 5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[bot]
token = "12345:token"
owner_password = "hunter2"
owner_default_name = "Boss"

[logging]
level = "debug"
file_path = "/tmp/supportdesk"
max_files = 3
"#;

    #[test]
    fn test_from_toml_str() {
        let settings = Settings::from_toml_str(SAMPLE).unwrap();
        assert_eq!(settings.bot.owner_password, "hunter2");
        assert_eq!(settings.bot.owner_default_name, "Boss");
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.max_files, 3);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.bot.token, "12345:token");
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = Settings::from_toml_str(SAMPLE).unwrap();
        let raw = toml::to_string(&settings).unwrap();
        let reparsed = Settings::from_toml_str(&raw).unwrap();
        assert_eq!(reparsed.bot.owner_password, settings.bot.owner_password);
        assert_eq!(reparsed.logging.level, settings.logging.level);
    }
}
