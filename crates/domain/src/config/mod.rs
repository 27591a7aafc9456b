//! Configuration module for Scrapbook
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding and CORS
//! - `database`: SQLite pool settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
