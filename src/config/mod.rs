//! Configuration module
//!
//! Application configuration loading and validation, backed by a TOML file
//! with environment-variable overrides.

pub mod config;
pub mod loader;
