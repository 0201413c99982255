//! Catalog editor page
//!
//! Lets an operator browse Modules → Series → Questions and edit drafts in a
//! modal form. The page owns a local copy of the catalog seeds; every save
//! replaces rows in the local arrays, nothing is written back anywhere, and a
//! fresh construction restores the seed state.

use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::models::catalog::{
    ModuleCode, Question, QuestionType, Series, TcfModule, MAX_DIFFICULTY, MIN_DIFFICULTY,
    POINT_SCALE,
};
use crate::models::media::FileUpload;
use crate::seed;
use crate::state::objects::ObjectUrlRegistry;
use crate::utils::errors::{AdminError, Result};
use crate::utils::helpers::{contains_ci, today_label};
use crate::utils::ids::next_id;
use crate::utils::logging::log_content_change;

/// Which media slot of a question an attachment targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    Audio,
    Image,
}

/// Where an attachment comes from
#[derive(Debug, Clone)]
pub enum MediaSource {
    /// A freshly chosen local file, wrapped in an ephemeral object URL
    Upload(FileUpload),
    /// A library item; its URL is copied as-is
    Library { url: String },
}

/// Local state of the catalog editor
#[derive(Debug, Clone)]
pub struct CatalogState {
    modules: Vec<TcfModule>,
    series: Vec<Series>,
    questions: Vec<Question>,
    active_module: ModuleCode,
    selected_series: Option<String>,
    search: String,
    series_form: Option<Series>,
    question_form: Option<Question>,
    objects: ObjectUrlRegistry,
    config: CatalogConfig,
}

impl CatalogState {
    /// Build the page from the seed datasets
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_data(seed::modules(), seed::series(), seed::questions(), config)
    }

    /// Build the page from explicit collections (tests, imports)
    pub fn with_data(
        modules: Vec<TcfModule>,
        series: Vec<Series>,
        questions: Vec<Question>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            modules,
            series,
            questions,
            active_module: ModuleCode::CE,
            selected_series: None,
            search: String::new(),
            series_form: None,
            question_form: None,
            objects: ObjectUrlRegistry::new(),
            config,
        }
    }

    pub fn modules(&self) -> &[TcfModule] {
        &self.modules
    }

    pub fn active_module(&self) -> ModuleCode {
        self.active_module
    }

    pub fn selected_series(&self) -> Option<&Series> {
        let id = self.selected_series.as_deref()?;
        self.series.iter().find(|s| s.id == id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Switch the module tab; any selected series belongs to the previous
    /// tab and is cleared.
    pub fn select_module(&mut self, code: ModuleCode) {
        debug!(module = %code, "Module tab selected");
        self.active_module = code;
        self.selected_series = None;
    }

    /// Enter the question table view for one series
    pub fn select_series(&mut self, series_id: &str) -> Result<()> {
        if !self.series.iter().any(|s| s.id == series_id) {
            return Err(AdminError::SeriesNotFound {
                series_id: series_id.to_string(),
            });
        }
        self.selected_series = Some(series_id.to_string());
        Ok(())
    }

    /// Return to the series grid, clearing the question search
    pub fn back(&mut self) {
        self.selected_series = None;
        self.search.clear();
    }

    /// Series of the active module tab
    pub fn visible_series(&self) -> Vec<&Series> {
        self.series
            .iter()
            .filter(|s| s.module_id == self.active_module)
            .collect()
    }

    /// Questions of the selected series matching the current search
    /// (case-insensitive substring on the question text). Empty when no
    /// series is selected.
    pub fn visible_questions(&self) -> Vec<&Question> {
        let Some(series_id) = self.selected_series.as_deref() else {
            return Vec::new();
        };
        self.questions
            .iter()
            .filter(|q| q.series_id == series_id && contains_ci(&q.text, &self.search))
            .collect()
    }

    // --- series form -----------------------------------------------------

    /// Open the series modal, either with a copy of an existing series or
    /// with creation defaults for the active module.
    pub fn open_series_form(&mut self, existing: Option<&str>) -> Result<()> {
        let draft = match existing {
            Some(id) => self
                .series
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or_else(|| AdminError::SeriesNotFound {
                    series_id: id.to_string(),
                })?,
            None => Series {
                id: String::new(),
                module_id: self.active_module,
                title: String::new(),
                description: Some(String::new()),
                question_count: self.config.default_question_count,
                is_premium: false,
                is_active: false,
                last_updated: today_label(),
            },
        };
        self.series_form = Some(draft);
        Ok(())
    }

    pub fn series_form(&self) -> Option<&Series> {
        self.series_form.as_ref()
    }

    pub fn series_form_mut(&mut self) -> Option<&mut Series> {
        self.series_form.as_mut()
    }

    pub fn close_series_form(&mut self) {
        self.series_form = None;
    }

    /// Persist the open series draft into the local array: replace by id, or
    /// append with a fresh `s_<timestamp>` id. Returns the saved id.
    pub fn save_series(&mut self) -> Result<String> {
        let mut draft = self
            .series_form
            .take()
            .ok_or_else(|| AdminError::NoOpenForm("series".to_string()))?;

        if draft.title.trim().is_empty() {
            // Put the draft back so the operator can fix it
            self.series_form = Some(draft);
            return Err(AdminError::Validation("Series title is required".to_string()));
        }

        draft.last_updated = today_label();

        let id = if draft.id.is_empty() {
            let id = next_id("s");
            draft.id = id.clone();
            self.series.push(draft);
            log_content_change("series", &id, "created");
            id
        } else {
            let id = draft.id.clone();
            match self.series.iter_mut().find(|s| s.id == id) {
                Some(slot) => *slot = draft,
                None => self.series.push(draft),
            }
            log_content_change("series", &id, "updated");
            id
        };
        Ok(id)
    }

    // --- question form ---------------------------------------------------

    /// Open the question modal, either with a copy of an existing question
    /// or with creation defaults (4 empty choices, answer 0, points 3,
    /// difficulty 1, QCM). Requires a selected series for new questions.
    pub fn open_question_form(&mut self, existing: Option<&str>) -> Result<()> {
        let draft = match existing {
            Some(id) => self
                .questions
                .iter()
                .find(|q| q.id == id)
                .cloned()
                .ok_or_else(|| AdminError::QuestionNotFound {
                    question_id: id.to_string(),
                })?,
            None => {
                let series_id = self.selected_series.clone().ok_or_else(|| {
                    AdminError::Validation("Select a series before adding questions".to_string())
                })?;
                Question {
                    id: String::new(),
                    text: String::new(),
                    module_id: self.active_module,
                    series_id,
                    difficulty: MIN_DIFFICULTY,
                    kind: QuestionType::Qcm,
                    points: POINT_SCALE[0],
                    choices: vec![String::new(); self.config.max_choices],
                    correct_answer: 0,
                    audio_url: None,
                    image_url: None,
                }
            }
        };
        self.question_form = Some(draft);
        Ok(())
    }

    pub fn question_form(&self) -> Option<&Question> {
        self.question_form.as_ref()
    }

    pub fn question_form_mut(&mut self) -> Option<&mut Question> {
        self.question_form.as_mut()
    }

    pub fn close_question_form(&mut self) {
        self.question_form = None;
    }

    fn validate_question(draft: &Question) -> Result<()> {
        if draft.text.trim().is_empty() {
            return Err(AdminError::Validation("Question text is required".to_string()));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&draft.difficulty) {
            return Err(AdminError::Validation(format!(
                "Difficulty must be between {} and {}",
                MIN_DIFFICULTY, MAX_DIFFICULTY
            )));
        }
        if !POINT_SCALE.contains(&draft.points) {
            return Err(AdminError::Validation(format!(
                "Points must be one of {:?}",
                POINT_SCALE
            )));
        }
        if draft.kind == QuestionType::Qcm {
            let filled = draft.choices.iter().filter(|c| !c.trim().is_empty()).count();
            if filled < 2 {
                return Err(AdminError::Validation(
                    "A choice question needs at least 2 choices".to_string(),
                ));
            }
        }
        if !draft.choices.is_empty() && draft.correct_answer >= draft.choices.len() {
            return Err(AdminError::Validation(
                "Correct answer index is out of range".to_string(),
            ));
        }
        Ok(())
    }

    /// Persist the open question draft: replace by id, or append with a
    /// fresh `q_<timestamp>` id. Invalid drafts are rejected and the
    /// collection is left untouched. Returns the saved id.
    pub fn save_question(&mut self) -> Result<String> {
        let mut draft = self
            .question_form
            .take()
            .ok_or_else(|| AdminError::NoOpenForm("question".to_string()))?;

        if let Err(err) = Self::validate_question(&draft) {
            // Put the draft back so the operator can fix it
            self.question_form = Some(draft);
            return Err(err);
        }

        let id = if draft.id.is_empty() {
            let id = next_id("q");
            draft.id = id.clone();
            self.questions.push(draft);
            log_content_change("question", &id, "created");
            id
        } else {
            let id = draft.id.clone();
            match self.questions.iter().position(|q| q.id == id) {
                Some(pos) => {
                    // Replacing a row releases any object URL the old row
                    // held that the new draft no longer references
                    let old = std::mem::replace(&mut self.questions[pos], draft);
                    let current = &self.questions[pos];
                    for url in [old.audio_url, old.image_url].into_iter().flatten() {
                        let still_used = current.audio_url.as_deref() == Some(url.as_str())
                            || current.image_url.as_deref() == Some(url.as_str());
                        if !still_used {
                            self.objects.revoke(&url);
                        }
                    }
                }
                None => self.questions.push(draft),
            }
            log_content_change("question", &id, "updated");
            id
        };
        Ok(id)
    }

    /// Remove one question and release any object URLs it referenced
    pub fn delete_question(&mut self, question_id: &str) -> Result<()> {
        let position = self
            .questions
            .iter()
            .position(|q| q.id == question_id)
            .ok_or_else(|| AdminError::QuestionNotFound {
                question_id: question_id.to_string(),
            })?;

        let removed = self.questions.remove(position);
        for url in [removed.audio_url, removed.image_url].into_iter().flatten() {
            self.objects.revoke(&url);
        }
        info!(question_id = question_id, "Question deleted");
        Ok(())
    }

    // --- media attachment ------------------------------------------------

    /// Attach audio or an image to the open question draft. Uploads get an
    /// ephemeral object URL; library picks copy the stored URL. Replacing an
    /// attachment releases the previous object URL.
    pub fn attach_media(&mut self, slot: MediaSlot, source: MediaSource) -> Result<()> {
        // Resolve the draft before minting anything; a failed call must not
        // leave an orphaned URL in the registry
        let draft = self
            .question_form
            .as_mut()
            .ok_or_else(|| AdminError::NoOpenForm("question".to_string()))?;

        let url = match &source {
            MediaSource::Upload(file) => self.objects.create(&file.name),
            MediaSource::Library { url } => url.clone(),
        };

        let field = match slot {
            MediaSlot::Audio => &mut draft.audio_url,
            MediaSlot::Image => &mut draft.image_url,
        };
        let previous = field.replace(url);
        if let Some(previous) = previous {
            self.objects.revoke(&previous);
        }
        Ok(())
    }

    /// Unset the draft's audio or image attachment
    pub fn clear_media(&mut self, slot: MediaSlot) -> Result<()> {
        let draft = self
            .question_form
            .as_mut()
            .ok_or_else(|| AdminError::NoOpenForm("question".to_string()))?;

        let field = match slot {
            MediaSlot::Audio => &mut draft.audio_url,
            MediaSlot::Image => &mut draft.image_url,
        };
        if let Some(previous) = field.take() {
            self.objects.revoke(&previous);
        }
        Ok(())
    }

    #[cfg(test)]
    fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[cfg(test)]
    fn object_urls(&self) -> &ObjectUrlRegistry {
        &self.objects
    }
}
