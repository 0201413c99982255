//! Media library models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Audio,
    Document,
}

impl MediaType {
    /// Classify an upload by its MIME prefix; anything that is neither an
    /// image nor audio lands in the document bucket.
    pub fn from_mime(mime: &str) -> MediaType {
        if mime.starts_with("image/") {
            MediaType::Image
        } else if mime.starts_with("audio/") {
            MediaType::Audio
        } else {
            MediaType::Document
        }
    }
}

/// One asset in the media library.
///
/// For freshly uploaded local files `url` is an ephemeral session-scoped
/// object URL, invalid after reload; only library items seeded from durable
/// storage survive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MediaType,
    pub url: String,
    pub size: String,
    pub date: String,
    /// Only for images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    /// Only for audio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Descriptor for a file the operator picked locally. The engine never reads
/// file contents; the shell hands over name, MIME type, and size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUpload {
    pub name: String,
    pub mime: String,
    pub size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_classification() {
        assert_eq!(MediaType::from_mime("image/jpeg"), MediaType::Image);
        assert_eq!(MediaType::from_mime("image/png"), MediaType::Image);
        assert_eq!(MediaType::from_mime("audio/mpeg"), MediaType::Audio);
        assert_eq!(MediaType::from_mime("application/pdf"), MediaType::Document);
        assert_eq!(MediaType::from_mime("text/plain"), MediaType::Document);
    }
}
