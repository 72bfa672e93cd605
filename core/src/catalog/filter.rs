use crate::model::record::ProposalRecord;
use crate::model::status::StatusFilter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.status == StatusFilter::All
    }
}

// The term is used as typed, no trimming: "  " only matches text with two spaces.
pub fn matches_search(record: &ProposalRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
}

pub fn matches_status(record: &ProposalRecord, filter: StatusFilter) -> bool {
    filter.admits(record.status)
}

/// Ordered subsequence of `records` passing both predicates.
pub fn visible_records<'a>(
    records: &'a [ProposalRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ProposalRecord> {
    records
        .iter()
        .filter(|r| matches_search(r, &criteria.search) && matches_status(r, criteria.status))
        .collect()
}
