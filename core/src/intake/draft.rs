use super::attachments::{partition_batch, Attachment, UNSUPPORTED_UPLOAD_NOTICE};
use super::suggestion::pick_suggestion;
use crate::error::{CoreError, CoreResult};
use rand::Rng;

pub const MAX_TEXT_CHARS: usize = 2000;

pub const EMPTY_SUBMISSION_NOTICE: &str = "Please provide either a description or upload a file.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextUpdate {
    pub accepted_chars: usize,
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFilesOutcome {
    pub added: usize,
    pub rejected: Vec<String>,
}

/// The in-progress request: free text plus ordered attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeDraft {
    text: String,
    attachments: Vec<Attachment>,
}

impl IntakeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Replaces the text. Input past `MAX_TEXT_CHARS` characters is cut at
    /// the cap and never stored.
    pub fn set_text(&mut self, s: &str) -> TextUpdate {
        match s.char_indices().nth(MAX_TEXT_CHARS) {
            Some((cut, _)) => {
                self.text = s[..cut].to_string();
                TextUpdate {
                    accepted_chars: MAX_TEXT_CHARS,
                    truncated: true,
                }
            }
            None => {
                self.text = s.to_string();
                TextUpdate {
                    accepted_chars: self.text.chars().count(),
                    truncated: false,
                }
            }
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.char_count(), MAX_TEXT_CHARS)
    }

    /// Appends the acceptable part of `batch`. A batch with nothing acceptable
    /// leaves the draft untouched and fails with the upload notice.
    pub fn add_files(&mut self, batch: Vec<Attachment>) -> CoreResult<AddFilesOutcome> {
        let partition = partition_batch(batch);
        if partition.accepted.is_empty() {
            return Err(CoreError::Validation(UNSUPPORTED_UPLOAD_NOTICE.to_string()));
        }
        let added = partition.accepted.len();
        self.attachments.extend(partition.accepted);
        Ok(AddFilesOutcome {
            added,
            rejected: partition.rejected,
        })
    }

    /// Out-of-range indices are ignored.
    pub fn remove_file(&mut self, index: usize) -> Option<Attachment> {
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            None
        }
    }

    pub fn request_suggestion<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        let s = pick_suggestion(rng);
        self.set_text(s);
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.attachments.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.attachments.is_empty()
    }

    pub fn is_submittable(&self) -> bool {
        !self.is_blank()
    }
}
