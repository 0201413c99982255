//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the admin engine. Every state transition a page performs is traced so
//! the system journal has a faithful record of operator activity.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// The returned guard must be kept alive for the lifetime of the application,
/// otherwise buffered file output is lost.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "primo-admin.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an operator action with structured data
pub fn log_admin_action(action: &str, target: Option<&str>, details: Option<&str>) {
    info!(
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log content catalog changes (series/question create, update, delete)
pub fn log_content_change(entity: &str, entity_id: &str, action: &str) {
    info!(
        entity = entity,
        entity_id = entity_id,
        action = action,
        "Catalog content changed"
    );
}

/// Log authentication events
pub fn log_auth_event(email: &str, success: bool) {
    if success {
        info!(email = email, "Operator signed in");
    } else {
        warn!(email = email, "Failed sign-in attempt");
    }
}
