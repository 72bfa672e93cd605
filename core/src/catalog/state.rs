use super::confirm::{Confirmation, DELETE_PROMPT};
use super::filter::{visible_records, FilterCriteria};
use super::source::{ensure_unique_ids, RecordSource};
use crate::error::{CoreError, CoreResult};
use crate::model::record::ProposalRecord;
use crate::model::status::{ProposalStatus, StatusFilter};
use serde::Serialize;
use tracing::info;

pub const ARTIFACT_MISSING_NOTICE: &str = "PDF not available for this proposal";

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub draft: usize,
    pub shared: usize,
}

impl StatusCounts {
    pub fn of(records: &[ProposalRecord]) -> Self {
        let mut out = StatusCounts {
            total: records.len(),
            ..Default::default()
        };
        for r in records {
            match r.status {
                ProposalStatus::Completed => out.completed += 1,
                ProposalStatus::Draft => out.draft += 1,
                ProposalStatus::Shared => out.shared += 1,
            }
        }
        out
    }

    pub fn count(&self, status: ProposalStatus) -> usize {
        match status {
            ProposalStatus::Completed => self.completed,
            ProposalStatus::Draft => self.draft,
            ProposalStatus::Shared => self.shared,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Filters are active and nothing passes them.
    NoMatches,
    /// The collection itself is empty.
    NoProposals,
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        "No proposals found"
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoMatches => "Try adjusting your search or filter criteria",
            EmptyState::NoProposals => "Get started by creating your first proposal",
        }
    }
}

/// In-memory proposal collection with the dashboard's filter and selection
/// state. Deletions stay local to this value.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ProposalRecord>,
    criteria: FilterCriteria,
    selected: Option<String>,
}

impl Catalog {
    pub fn new(records: Vec<ProposalRecord>) -> CoreResult<Self> {
        ensure_unique_ids(&records)?;
        Ok(Self {
            records,
            criteria: FilterCriteria::default(),
            selected: None,
        })
    }

    pub fn load<S: RecordSource + ?Sized>(source: &S) -> CoreResult<Self> {
        let records = source.load()?;
        info!(source = %source.describe(), records = records.len(), "catalog loaded");
        Self::new(records)
    }

    pub fn records(&self) -> &[ProposalRecord] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn get(&self, id: &str) -> Option<&ProposalRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search = term.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.criteria.status = status;
    }

    pub fn visible_records(&self) -> Vec<&ProposalRecord> {
        visible_records(&self.records, &self.criteria)
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible_records().is_empty() {
            return None;
        }
        if self.criteria.is_unfiltered() {
            Some(EmptyState::NoProposals)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    pub fn select_record(&mut self, id: Option<&str>) -> CoreResult<()> {
        match id {
            None => {
                self.selected = None;
                Ok(())
            }
            Some(id) => {
                if self.get(id).is_none() {
                    return Err(CoreError::Validation(format!("no proposal with id {}", id)));
                }
                self.selected = Some(id.to_string());
                Ok(())
            }
        }
    }

    pub fn selected_record(&self) -> Option<&ProposalRecord> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Removes one record after the operator confirms. A declined prompt
    /// leaves everything as it was.
    pub fn delete_record(
        &mut self,
        id: &str,
        confirmation: &dyn Confirmation,
    ) -> CoreResult<ProposalRecord> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::Validation(format!("no proposal with id {}", id)))?;
        if !confirmation.confirm(DELETE_PROMPT) {
            return Err(CoreError::OperatorDeclined("deletion cancelled".to_string()));
        }
        let removed = self.records.remove(idx);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        info!(id = %removed.id, remaining = self.records.len(), "proposal removed from local catalog");
        Ok(removed)
    }

    /// Recomputed on every call over the full, unfiltered collection.
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::of(&self.records)
    }

    pub fn artifact_for(&self, id: &str) -> CoreResult<&str> {
        let record = self
            .get(id)
            .ok_or_else(|| CoreError::Validation(format!("no proposal with id {}", id)))?;
        record
            .artifact_url
            .as_deref()
            .ok_or_else(|| CoreError::Validation(ARTIFACT_MISSING_NOTICE.to_string()))
    }
}
