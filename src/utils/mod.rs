//! Utility modules

pub mod errors;
pub mod helpers;
pub mod ids;
pub mod logging;

pub use errors::{AdminError, ErrorSeverity, Result};
