//! Memory record model with submission validation helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::journal::core::errors::{JournalError, JournalResult};
use crate::journal::core::ids::MemoryId;

/// Maximum number of photos a single memory may carry.
pub const MAX_IMAGES: usize = 10;

/// Date format used by the `date` field.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A persisted journal entry.
///
/// Wire format is camelCase JSON: `{id, title, date, story, imageUrls}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    /// Unique identifier, assigned at creation.
    pub id: MemoryId,
    /// Display title.
    pub title: String,
    /// Calendar date (`YYYY-MM-DD`), no timezone semantics.
    pub date: String,
    /// Free-text narrative.
    pub story: String,
    /// Photo references (data URLs or remote URLs), oldest-added first.
    pub image_urls: Vec<String>,
}

impl Memory {
    /// Materialize a draft into a memory with a fresh id.
    ///
    /// The draft is cloned, not consumed: the caller's copy is untouched.
    #[must_use]
    pub fn from_draft(draft: &MemoryDraft) -> Self {
        Self {
            id: MemoryId::new(),
            title: draft.title.clone(),
            date: draft.date.clone(),
            story: draft.story.clone(),
            image_urls: draft.image_urls.clone(),
        }
    }
}

/// A memory candidate before id assignment.
///
/// Carries the submission contract (`validate`) used by the presentation
/// layer. Storage-side components accept drafts as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryDraft {
    /// Display title.
    pub title: String,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Free-text narrative.
    pub story: String,
    /// Photo references.
    pub image_urls: Vec<String>,
}

impl MemoryDraft {
    /// Create a draft with no photos attached yet.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        story: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            story: story.into(),
            image_urls: Vec::new(),
        }
    }

    /// Attach one more photo reference.
    ///
    /// # Errors
    /// Returns an error once the draft already holds [`MAX_IMAGES`] photos;
    /// the draft is left unchanged.
    pub fn push_image(&mut self, image_url: impl Into<String>) -> JournalResult<()> {
        if self.image_urls.len() >= MAX_IMAGES {
            return Err(JournalError::InvalidDraft(format!(
                "a memory can hold at most {MAX_IMAGES} photos"
            )));
        }

        self.image_urls.push(image_url.into());
        Ok(())
    }

    /// Check the submission contract: every field populated, a well-formed
    /// date, and between one and [`MAX_IMAGES`] photos.
    ///
    /// # Errors
    /// Returns an error describing the first violated rule.
    pub fn validate(&self) -> JournalResult<()> {
        if self.title.trim().is_empty() {
            return Err(JournalError::InvalidDraft("title is empty".to_string()));
        }

        if NaiveDate::parse_from_str(&self.date, DATE_FORMAT).is_err() {
            return Err(JournalError::InvalidDraft(format!(
                "date must be formatted as YYYY-MM-DD, got {:?}",
                self.date
            )));
        }

        if self.story.trim().is_empty() {
            return Err(JournalError::InvalidDraft("story is empty".to_string()));
        }

        if self.image_urls.is_empty() {
            return Err(JournalError::InvalidDraft(
                "at least one photo is required".to_string(),
            ));
        }

        if self.image_urls.len() > MAX_IMAGES {
            return Err(JournalError::InvalidDraft(format!(
                "a memory can hold at most {MAX_IMAGES} photos"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> MemoryDraft {
        let mut draft = MemoryDraft::new("First Date", "2024-02-14", "We watched the sunset.");
        draft.push_image("data:img1").unwrap();
        draft
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_empty_story_rejected() {
        let mut draft = valid_draft();
        draft.story = String::new();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_malformed_date_rejected() {
        for bad in ["14/02/2024", "2024-2-14x", "yesterday", ""] {
            let mut draft = valid_draft();
            draft.date = bad.to_string();
            assert!(draft.validate().is_err(), "accepted bad date {bad:?}");
        }
    }

    #[test]
    fn test_zero_images_rejected() {
        let draft = MemoryDraft::new("First Date", "2024-02-14", "We watched the sunset.");
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_eleventh_image_rejected_draft_keeps_ten() {
        let mut draft = MemoryDraft::new("Trip", "2024-06-01", "Ten snapshots.");
        for i in 0..MAX_IMAGES {
            draft.push_image(format!("data:img{i}")).unwrap();
        }

        assert!(draft.push_image("data:img10").is_err());
        assert_eq!(draft.image_urls.len(), MAX_IMAGES);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_from_draft_leaves_draft_untouched() {
        let draft = valid_draft();
        let before = draft.clone();
        let memory = Memory::from_draft(&draft);

        assert_eq!(draft, before);
        assert_eq!(memory.title, draft.title);
        assert_eq!(memory.image_urls, draft.image_urls);
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let memory = Memory::from_draft(&valid_draft());
        let json = serde_json::to_string(&memory).unwrap();
        assert!(json.contains("\"imageUrls\""));
        assert!(!json.contains("image_urls"));
    }
}
