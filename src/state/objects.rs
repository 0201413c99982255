//! Ephemeral object URL registry
//!
//! Freshly uploaded local files are referenced through session-scoped
//! `blob:<uuid>` URLs, invalid after reload. The registry tracks which URLs
//! are live so that deleting or replacing the referencing record releases
//! the underlying resource instead of leaking it across a long session.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default, Clone)]
pub struct ObjectUrlRegistry {
    /// url -> source file name
    live: HashMap<String, String>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new object URL for a local file
    pub fn create(&mut self, file_name: &str) -> String {
        let url = format!("blob:{}", Uuid::new_v4());
        self.live.insert(url.clone(), file_name.to_string());
        debug!(url = %url, file_name = file_name, "Object URL created");
        url
    }

    /// Release an object URL. Returns false when the URL was not issued by
    /// this registry (durable library URLs pass through here unharmed).
    pub fn revoke(&mut self, url: &str) -> bool {
        let revoked = self.live.remove(url).is_some();
        if revoked {
            debug!(url = %url, "Object URL revoked");
        }
        revoked
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.live.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Release everything, e.g. when the owning page is torn down
    pub fn revoke_all(&mut self) {
        if !self.live.is_empty() {
            debug!(count = self.live.len(), "Revoking all object URLs");
            self.live.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_revoke() {
        let mut registry = ObjectUrlRegistry::new();
        let url = registry.create("photo.jpg");

        assert!(url.starts_with("blob:"));
        assert!(registry.is_live(&url));
        assert!(registry.revoke(&url));
        assert!(!registry.is_live(&url));
    }

    #[test]
    fn test_revoke_unknown_url_is_noop() {
        let mut registry = ObjectUrlRegistry::new();
        assert!(!registry.revoke("/media/audio/dialogue_gare.mp3"));
    }

    #[test]
    fn test_urls_are_unique() {
        let mut registry = ObjectUrlRegistry::new();
        let a = registry.create("a.png");
        let b = registry.create("a.png");
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_revoke_all() {
        let mut registry = ObjectUrlRegistry::new();
        registry.create("a.png");
        registry.create("b.png");
        registry.revoke_all();
        assert!(registry.is_empty());
    }
}
