//! Media library page
//!
//! Grid of uploaded assets with a type filter, name search, a preview modal
//! and confirmation-gated deletion. Image uploads are referenced through
//! ephemeral object URLs released when the item is deleted.

use tracing::info;

use crate::models::media::{FileUpload, MediaItem, MediaType};
use crate::seed;
use crate::state::objects::ObjectUrlRegistry;
use crate::utils::errors::{AdminError, Result};
use crate::utils::helpers::{contains_ci, format_file_size, today_label};
use crate::utils::ids::next_id;
use crate::utils::logging::log_admin_action;

/// Type filter tabs of the library grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaFilter {
    #[default]
    All,
    Image,
    Audio,
    Document,
}

impl MediaFilter {
    pub fn matches(&self, kind: MediaType) -> bool {
        match self {
            MediaFilter::All => true,
            MediaFilter::Image => kind == MediaType::Image,
            MediaFilter::Audio => kind == MediaType::Audio,
            MediaFilter::Document => kind == MediaType::Document,
        }
    }
}

/// Local state of the media library
#[derive(Debug, Clone)]
pub struct MediaState {
    items: Vec<MediaItem>,
    filter: MediaFilter,
    search: String,
    /// media id shown in the preview modal
    preview: Option<String>,
    /// media id awaiting delete confirmation
    pending_delete: Option<String>,
    objects: ObjectUrlRegistry,
}

impl MediaState {
    pub fn new() -> Self {
        Self::with_data(seed::media_items())
    }

    pub fn with_data(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            filter: MediaFilter::All,
            search: String::new(),
            preview: None,
            pending_delete: None,
            objects: ObjectUrlRegistry::new(),
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn filter(&self) -> MediaFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: MediaFilter) {
        self.filter = filter;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Items passing both the type filter and the name search
    pub fn visible(&self) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item.kind) && contains_ci(&item.name, &self.search))
            .collect()
    }

    /// Register uploads at the head of the grid. Images get an ephemeral
    /// object URL; audio and documents get a durable library path. Returns
    /// the new item ids, in upload order.
    pub fn upload(&mut self, files: Vec<FileUpload>) -> Vec<String> {
        let mut ids = Vec::with_capacity(files.len());
        for file in files {
            let kind = MediaType::from_mime(&file.mime);
            let url = match kind {
                MediaType::Image => self.objects.create(&file.name),
                MediaType::Audio => format!("/media/audio/{}", file.name),
                MediaType::Document => format!("/media/documents/{}", file.name),
            };
            let id = next_id("media");
            let item = MediaItem {
                id: id.clone(),
                name: file.name.clone(),
                kind,
                url,
                size: format_file_size(file.size_bytes),
                date: today_label(),
                dimensions: None,
                duration: None,
            };
            info!(media_id = %id, name = %file.name, kind = ?kind, "Media uploaded");
            self.items.insert(0, item);
            ids.push(id);
        }
        ids
    }

    // --- preview ---------------------------------------------------------

    pub fn open_preview(&mut self, media_id: &str) -> Result<()> {
        if !self.items.iter().any(|item| item.id == media_id) {
            return Err(AdminError::MediaNotFound {
                media_id: media_id.to_string(),
            });
        }
        self.preview = Some(media_id.to_string());
        Ok(())
    }

    pub fn preview(&self) -> Option<&MediaItem> {
        let id = self.preview.as_deref()?;
        self.items.iter().find(|item| item.id == id)
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    // --- deletion --------------------------------------------------------

    /// Stage an item for deletion; nothing is removed until confirmed
    pub fn request_delete(&mut self, media_id: &str) -> Result<()> {
        if !self.items.iter().any(|item| item.id == media_id) {
            return Err(AdminError::MediaNotFound {
                media_id: media_id.to_string(),
            });
        }
        self.pending_delete = Some(media_id.to_string());
        Ok(())
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Remove the staged item, releasing its object URL if it was an
    /// upload, and close any preview of it. Returns the removed id.
    pub fn confirm_delete(&mut self) -> Result<String> {
        let media_id = self
            .pending_delete
            .take()
            .ok_or_else(|| AdminError::NoOpenForm("delete confirmation".to_string()))?;

        let position = self
            .items
            .iter()
            .position(|item| item.id == media_id)
            .ok_or_else(|| AdminError::MediaNotFound {
                media_id: media_id.clone(),
            })?;

        let removed = self.items.remove(position);
        self.objects.revoke(&removed.url);
        if self.preview.as_deref() == Some(media_id.as_str()) {
            self.preview = None;
        }
        log_admin_action("media_deleted", Some(&media_id), Some(&removed.name));
        Ok(media_id)
    }

    #[cfg(test)]
    fn object_urls(&self) -> &ObjectUrlRegistry {
        &self.objects
    }
}

impl Default for MediaState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn upload_file(name: &str, mime: &str, size: u64) -> FileUpload {
        FileUpload {
            name: name.to_string(),
            mime: mime.to_string(),
            size_bytes: size,
        }
    }

    #[test]
    fn test_filter_and_search_combine() {
        let mut page = MediaState::new();
        page.set_filter(MediaFilter::Audio);
        let audio_only = page.visible();
        assert!(audio_only.iter().all(|item| item.kind == MediaType::Audio));

        page.set_search("gare");
        let both = page.visible();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].name, "dialogue_gare.mp3");

        // A search that matches only non-audio items yields nothing
        page.set_search("plan_quartier");
        assert!(page.visible().is_empty());
    }

    #[test]
    fn test_upload_classifies_and_prepends() {
        let mut page = MediaState::new();
        let before = page.items().len();
        let ids = page.upload(vec![
            upload_file("affiche.png", "image/png", 2_500_000),
            upload_file("consignes.pdf", "application/pdf", 80_000),
        ]);

        assert_eq!(ids.len(), 2);
        assert_eq!(page.items().len(), before + 2);
        // Most recent upload sits first
        assert_eq!(page.items()[0].name, "consignes.pdf");
        assert_eq!(page.items()[0].kind, MediaType::Document);
        assert_eq!(page.items()[1].kind, MediaType::Image);
        assert!(page.items()[1].url.starts_with("blob:"));
        assert_eq!(page.items()[1].size, "2.4 MB");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut page = MediaState::new();
        let before = page.items().len();

        page.request_delete("media_1").unwrap();
        assert_eq!(page.items().len(), before);

        page.cancel_delete();
        assert_matches!(page.confirm_delete().unwrap_err(), AdminError::NoOpenForm(_));
        assert_eq!(page.items().len(), before);

        page.request_delete("media_1").unwrap();
        assert_eq!(page.confirm_delete().unwrap(), "media_1");
        assert_eq!(page.items().len(), before - 1);
    }

    #[test]
    fn test_confirmed_delete_releases_object_url() {
        let mut page = MediaState::new();
        let ids = page.upload(vec![upload_file("photo.jpg", "image/jpeg", 1_000)]);
        let url = page.items()[0].url.clone();
        assert!(page.object_urls().is_live(&url));

        page.request_delete(&ids[0]).unwrap();
        page.confirm_delete().unwrap();
        assert!(!page.object_urls().is_live(&url));
    }

    #[test]
    fn test_delete_closes_matching_preview() {
        let mut page = MediaState::new();
        page.open_preview("media_2").unwrap();
        page.request_delete("media_2").unwrap();
        page.confirm_delete().unwrap();
        assert!(page.preview().is_none());
    }

    #[test]
    fn test_unknown_media_is_rejected() {
        let mut page = MediaState::new();
        assert_matches!(
            page.open_preview("media_999").unwrap_err(),
            AdminError::MediaNotFound { .. }
        );
        assert_matches!(
            page.request_delete("media_999").unwrap_err(),
            AdminError::MediaNotFound { .. }
        );
    }
}
