//! Shared helper functions

use chrono::{DateTime, Local, Utc};

/// Case-insensitive substring match, the filter semantics every page uses.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Format a byte count the way the media library displays sizes ("2.4 MB").
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let bytes = bytes as f64;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes / KB)
    } else {
        format!("{} B", bytes as u64)
    }
}

/// Short clock label used for chat timestamps ("10:30").
pub fn time_label(at: DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}

/// Current local clock label.
pub fn now_label() -> String {
    time_label(Local::now())
}

/// Date label used for `last_updated` / upload dates ("2023-10-25").
pub fn today_label() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("jean.d@example.com", "JEAN"));
        assert!(contains_ci("Série 1 - Découverte", "découverte"));
        assert!(!contains_ci("Marie Curie", "dupont"));
        // Empty needle matches everything, which is what an empty search box means
        assert!(contains_ci("anything", ""));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2 KB");
        assert_eq!(format_file_size(2_516_582), "2.4 MB");
    }

    #[test]
    fn test_today_label_shape() {
        let label = today_label();
        assert_eq!(label.len(), 10);
        assert_eq!(label.as_bytes()[4], b'-');
    }
}
