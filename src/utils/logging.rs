//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the SupportDesk application.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// The returned guard must stay alive for the duration of the process;
/// dropping it stops the background log writer.
pub fn init_logging(config: &LoggingConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "supportdesk.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log regular user actions with structured data
pub fn log_user_action(telegram_id: i64, action: &str, details: Option<&str>) {
    info!(
        telegram_id = telegram_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log staff actions against the workflow
pub fn log_staff_action(support_user_id: i64, action: &str, target: Option<&str>) {
    info!(
        support_user_id = support_user_id,
        action = action,
        target = target,
        "Staff action performed"
    );
}

/// Log owner-level administration actions
pub fn log_admin_action(owner_id: i64, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        owner_id = owner_id,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}
