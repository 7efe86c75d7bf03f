//! Infrastructure layer.

/// Application configuration.
pub mod config;

pub use config::{AppConfig, CliArgs, LogLevel};
