use crate::error::{CoreError, CoreResult};
use crate::model::record::ProposalRecord;
use crate::model::status::ProposalStatus;
use std::collections::BTreeSet;
use std::path::PathBuf;
use time::macros::date;

/// Where the catalog's records come from.
pub trait RecordSource {
    fn describe(&self) -> String;
    fn load(&self) -> CoreResult<Vec<ProposalRecord>>;
}

/// The built-in sample collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleRecordSource;

impl RecordSource for SampleRecordSource {
    fn describe(&self) -> String {
        "built-in sample proposals".to_string()
    }

    fn load(&self) -> CoreResult<Vec<ProposalRecord>> {
        Ok(sample_records())
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileRecordSource {
    path: PathBuf,
}

impl JsonFileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileRecordSource {
    fn describe(&self) -> String {
        format!("records file {}", self.path.display())
    }

    fn load(&self) -> CoreResult<Vec<ProposalRecord>> {
        let bytes = std::fs::read(&self.path)?;
        let records: Vec<ProposalRecord> = serde_json::from_slice(&bytes)?;
        ensure_unique_ids(&records)?;
        Ok(records)
    }
}

pub fn ensure_unique_ids(records: &[ProposalRecord]) -> CoreResult<()> {
    let mut seen = BTreeSet::new();
    for r in records {
        if !seen.insert(r.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "duplicate proposal id: {}",
                r.id
            )));
        }
    }
    Ok(())
}

pub fn sample_records() -> Vec<ProposalRecord> {
    vec![
        ProposalRecord {
            id: "1".to_string(),
            title: "Marketing Campaign Proposal".to_string(),
            kind: "Marketing proposal".to_string(),
            content_type: "Pitch deck".to_string(),
            description: "Comprehensive marketing strategy for Q2 2024 product launch"
                .to_string(),
            status: ProposalStatus::Completed,
            created_at: date!(2024 - 01 - 15),
            updated_at: date!(2024 - 01 - 15),
            artifact_url: Some("/proposals/marketing-campaign.pdf".to_string()),
        },
        ProposalRecord {
            id: "2".to_string(),
            title: "Partnership Agreement Draft".to_string(),
            kind: "Partnership proposal".to_string(),
            content_type: "Proposal".to_string(),
            description: "Strategic partnership proposal with tech startup".to_string(),
            status: ProposalStatus::Draft,
            created_at: date!(2024 - 01 - 14),
            updated_at: date!(2024 - 01 - 16),
            artifact_url: None,
        },
        ProposalRecord {
            id: "3".to_string(),
            title: "Event Sponsorship Package".to_string(),
            kind: "Event proposal".to_string(),
            content_type: "One-pager".to_string(),
            description: "Annual conference sponsorship opportunities".to_string(),
            status: ProposalStatus::Shared,
            created_at: date!(2024 - 01 - 12),
            updated_at: date!(2024 - 01 - 13),
            artifact_url: Some("/proposals/event-sponsorship.pdf".to_string()),
        },
        ProposalRecord {
            id: "4".to_string(),
            title: "Project Development Proposal".to_string(),
            kind: "Project proposal".to_string(),
            content_type: "Report".to_string(),
            description: "Mobile app development project scope and timeline".to_string(),
            status: ProposalStatus::Completed,
            created_at: date!(2024 - 01 - 10),
            updated_at: date!(2024 - 01 - 11),
            artifact_url: Some("/proposals/project-development.pdf".to_string()),
        },
    ]
}
