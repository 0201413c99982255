//! Configuration management

pub mod settings;
pub mod validation;

pub use settings::{AuthConfig, CatalogConfig, LoggingConfig, Settings, StorefrontConfig};
