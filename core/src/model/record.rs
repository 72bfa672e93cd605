use crate::model::status::ProposalStatus;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content_type: String,
    pub description: String,
    pub status: ProposalStatus,
    #[serde(with = "iso_date")]
    pub created_at: Date,
    #[serde(with = "iso_date")]
    pub updated_at: Date,
    // Not cross-checked against `status`: a draft may carry an artifact and a
    // completed record may have none.
    #[serde(default, alias = "pdfUrl", skip_serializing_if = "Option::is_none")]
    pub artifact_url: Option<String>,
}

impl ProposalRecord {
    pub fn has_artifact(&self) -> bool {
        self.artifact_url.is_some()
    }
}

pub fn format_iso_date(d: Date) -> String {
    d.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| d.to_string())
}
