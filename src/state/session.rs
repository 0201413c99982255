//! Session gate
//!
//! The legacy console treated authentication as the presence of a hardcoded
//! sentinel string in client-local storage. The sentinel model is preserved,
//! but behind an explicit storage boundary (`SentinelStore`) so a real
//! credential validator can replace it without touching the pages.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tracing::debug;

use crate::config::AuthConfig;
use crate::utils::errors::{AdminError, Result};
use crate::utils::logging::log_auth_event;

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// Single-key client-local storage boundary.
///
/// The in-memory implementation matches the legacy behavior of browser
/// storage within one session; a durable implementation is the shell's job.
pub trait SentinelStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Session-scoped store, cleared on reconstruction (the "reload" semantics)
#[derive(Debug, Default, Clone)]
pub struct MemorySentinelStore {
    entries: HashMap<String, String>,
}

impl MemorySentinelStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SentinelStore for MemorySentinelStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Login gate in front of the admin routes
#[derive(Debug, Clone)]
pub struct SessionGate<S: SentinelStore> {
    store: S,
    config: AuthConfig,
}

impl<S: SentinelStore> SessionGate<S> {
    pub fn new(store: S, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// Whether the sentinel is present and carries the expected value
    pub fn is_authenticated(&self) -> bool {
        self.store
            .get(&self.config.sentinel_key)
            .map(|value| value == self.config.sentinel_value)
            .unwrap_or(false)
    }

    /// Sign the operator in.
    ///
    /// Credentials are only format-checked (there is no identity provider to
    /// verify them against); the configured delay simulates the round trip
    /// before the sentinel is written.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        if !email_regex().is_match(email) {
            log_auth_event(email, false);
            return Err(AdminError::Authentication(
                "Invalid email format".to_string(),
            ));
        }

        if password.is_empty() {
            log_auth_event(email, false);
            return Err(AdminError::Authentication(
                "Password is required".to_string(),
            ));
        }

        tokio::time::sleep(Duration::from_millis(self.config.login_delay_ms)).await;

        self.store
            .set(&self.config.sentinel_key, &self.config.sentinel_value);
        log_auth_event(email, true);
        Ok(())
    }

    /// Sign out by removing the sentinel
    pub fn logout(&mut self) {
        self.store.remove(&self.config.sentinel_key);
        debug!("Operator signed out");
    }
}
