//! Storage layer for the USDA client
//!
//! Handles configuration file management. Uses TOML for the configuration
//! file with environment variables taking precedence over file values.

use crate::error::ConfigError;

pub mod config;

type Result<T> = std::result::Result<T, ConfigError>;
