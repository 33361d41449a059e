//! SupportDesk Telegram Bot Core
//!
//! The workflow engine of a Telegram helpdesk bot: regular users submit
//! questions, support users answer them under role-based permissions, and
//! a single owner administers roles and staff. This library exposes the
//! domain entities, repository contracts, orchestration services, and
//! read-side queries; chat transport and durable persistence plug in from
//! the outside.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod models;
pub mod queries;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, SupportDeskError};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
