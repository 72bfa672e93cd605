use crate::error::{CoreError, CoreResult};
use sha2::{Digest, Sha256};
use std::path::Path;
use walkdir::WalkDir;

pub const ALLOWED_EXTENSIONS: [&str; 5] = ["pdf", "ppt", "pptx", "doc", "docx"];

pub const UNSUPPORTED_UPLOAD_NOTICE: &str =
    "Only PDF, PPT, PPTX, DOC, and DOCX files are allowed.";

#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content: Vec<u8>,
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("filename", &self.filename)
            .field("bytes", &self.content.len())
            .finish()
    }
}

impl Attachment {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                CoreError::InvalidInput(format!("not a file path: {}", path.display()))
            })?;
        let content = std::fs::read(path)?;
        Ok(Self { filename, content })
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn sha256_hex(&self) -> String {
        let mut h = Sha256::new();
        h.update(&self.content);
        hex::encode(h.finalize())
    }

    pub fn is_allowed(&self) -> bool {
        is_allowed(&self.filename)
    }

    pub fn mime_type(&self) -> &'static str {
        match extension_of(&self.filename).as_str() {
            "pdf" => "application/pdf",
            "ppt" => "application/vnd.ms-powerpoint",
            "pptx" => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            "doc" => "application/msword",
            "docx" => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }
}

/// Lowercased segment after the last dot. A name without a dot is its own
/// extension, so a file named `PDF` passes the allow-list.
pub fn extension_of(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or(filename)
        .to_lowercase()
}

pub fn is_allowed(filename: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension_of(filename).as_str())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPartition {
    pub accepted: Vec<Attachment>,
    pub rejected: Vec<String>,
}

/// Splits a candidate batch by the extension allow-list, keeping batch order
/// on both sides.
pub fn partition_batch(batch: Vec<Attachment>) -> BatchPartition {
    let mut out = BatchPartition::default();
    for a in batch {
        if a.is_allowed() {
            out.accepted.push(a);
        } else {
            out.rejected.push(a.filename);
        }
    }
    out
}

/// Reads every regular file under `dir` as a candidate batch, ordered by path.
///
/// Nothing is filtered here; the allow-list is applied when the batch is
/// added to a draft so that the rejection notice stays in one place.
pub fn collect_dir(dir: impl AsRef<Path>) -> CoreResult<Vec<Attachment>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(CoreError::InvalidInput(format!(
            "not a directory: {}",
            dir.display()
        )));
    }
    let mut out = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| CoreError::InvalidInput(e.to_string()))?;
        if entry.file_type().is_file() {
            out.push(Attachment::from_path(entry.path())?);
        }
    }
    Ok(out)
}
