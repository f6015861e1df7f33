//! Data module for configuration

mod config;

pub use config::{AppConfig, LoggingConfig};
