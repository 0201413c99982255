//! Activity log page
//!
//! Chronological feed of operator actions. Pages record their notable
//! actions here so the feed grows over the session on top of the seeded
//! history.

use crate::models::metrics::ActivityLogEntry;
use crate::seed;
use crate::utils::helpers::now_label;

#[derive(Debug, Clone)]
pub struct LogsState {
    entries: Vec<ActivityLogEntry>,
}

impl LogsState {
    pub fn new() -> Self {
        Self {
            entries: seed::activity_log(),
        }
    }

    /// Newest first
    pub fn entries(&self) -> &[ActivityLogEntry] {
        &self.entries
    }

    /// Prepend a session entry stamped with the current time
    pub fn record(&mut self, category: &str, message: &str) {
        self.entries.insert(
            0,
            ActivityLogEntry {
                timestamp: now_label(),
                category: category.to_string(),
                message: message.to_string(),
            },
        );
    }
}

impl Default for LogsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends() {
        let mut page = LogsState::new();
        let before = page.entries().len();
        page.record("ADMIN_ACTION", "Plan Mensuel désactivé");
        assert_eq!(page.entries().len(), before + 1);
        assert_eq!(page.entries()[0].message, "Plan Mensuel désactivé");
    }

    #[test]
    fn test_seed_history_present() {
        let page = LogsState::new();
        assert_eq!(page.entries().len(), 5);
    }
}
