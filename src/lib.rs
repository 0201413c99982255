//! PRIMO Admin Engine
//!
//! Back-office administration engine for the PRIMO TCF preparation platform.
//! This library provides the domain records, seed datasets, page-level state
//! containers and the navigation/session shell behind the admin console:
//! catalog editing, subscription plans, the user directory, the media
//! library and support messaging.

pub mod config;
pub mod models;
pub mod pages;
pub mod seed;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AdminError, Result};

// Re-export main components for easy access
pub use pages::{
    CatalogState, DashboardState, DirectoryState, FinanceState, LogsState, MediaState,
    MessagingState,
};
pub use state::{Route, SessionGate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
