//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub auth: AuthConfig,
    pub storefront: StorefrontConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Session gate configuration
///
/// The legacy console kept a hardcoded sentinel string in client storage; the
/// key, value, and the simulated sign-in delay are configurable here instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub sentinel_key: String,
    pub sentinel_value: String,
    pub login_delay_ms: u64,
}

/// Storefront (front office) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorefrontConfig {
    pub name: String,
    pub default_currency: String,
}

/// Content catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Question count a freshly created series is seeded with
    pub default_question_count: u32,
    pub max_choices: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("PRIMO_ADMIN"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AdminError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth: AuthConfig {
                sentinel_key: "primo_admin_token".to_string(),
                sentinel_value: "authenticated".to_string(),
                login_delay_ms: 1500,
            },
            storefront: StorefrontConfig {
                name: "PRIMO".to_string(),
                default_currency: "CFA".to_string(),
            },
            catalog: CatalogConfig {
                default_question_count: 39,
                max_choices: 4,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/primo-admin".to_string(),
            },
        }
    }
}
