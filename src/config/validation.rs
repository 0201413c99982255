//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{AdminError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_auth_config(&settings.auth)?;
    validate_storefront_config(&settings.storefront)?;
    validate_catalog_config(&settings.catalog)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate session gate configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.sentinel_key.is_empty() {
        return Err(AdminError::Config(
            "Auth sentinel key is required".to_string(),
        ));
    }

    if config.sentinel_value.is_empty() {
        return Err(AdminError::Config(
            "Auth sentinel value is required".to_string(),
        ));
    }

    // The delay simulates network latency; anything longer is a misconfiguration
    if config.login_delay_ms > 10_000 {
        return Err(AdminError::Config(
            "Login delay cannot exceed 10 seconds".to_string(),
        ));
    }

    Ok(())
}

/// Validate storefront configuration
fn validate_storefront_config(config: &super::StorefrontConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(AdminError::Config(
            "Storefront name is required".to_string(),
        ));
    }

    if config.default_currency.is_empty() {
        return Err(AdminError::Config(
            "Default currency is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate catalog configuration
fn validate_catalog_config(config: &super::CatalogConfig) -> Result<()> {
    if config.default_question_count == 0 {
        return Err(AdminError::Config(
            "Default question count must be greater than 0".to_string(),
        ));
    }

    if config.max_choices < 2 {
        return Err(AdminError::Config(
            "A choice question needs at least 2 choices".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AdminError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AdminError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
