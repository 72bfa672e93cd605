use crate::intake::attachments::Attachment;
use crate::intake::draft::IntakeDraft;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub job_description: String,
    pub files: Vec<Attachment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPart<'a> {
    Text {
        name: &'static str,
        value: &'a str,
    },
    File {
        name: &'static str,
        attachment: &'a Attachment,
    },
}

impl GenerationRequest {
    /// Snapshot of the draft at the moment of submission.
    pub fn from_draft(draft: &IntakeDraft) -> Self {
        Self {
            job_description: draft.text().to_string(),
            files: draft.attachments().to_vec(),
        }
    }

    /// Multipart parts in wire order: the description first, then one `file`
    /// part per attachment in attachment order.
    pub fn parts(&self) -> Vec<RequestPart<'_>> {
        let mut out = Vec::with_capacity(self.files.len() + 1);
        out.push(RequestPart::Text {
            name: JOB_DESCRIPTION_FIELD,
            value: &self.job_description,
        });
        for f in &self.files {
            out.push(RequestPart::File {
                name: FILE_FIELD,
                attachment: f,
            });
        }
        out
    }

    pub fn total_bytes(&self) -> usize {
        self.job_description.len() + self.files.iter().map(|f| f.len()).sum::<usize>()
    }
}

/// Whatever the service returned on success. The body shape is not
/// interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationResponse {
    pub submission_id: String,
    pub payload: serde_json::Value,
}

pub fn new_submission_id() -> String {
    format!("s_{}", Ulid::new())
}
