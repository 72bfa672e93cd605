use super::state::StatusCounts;
use crate::model::record::{format_iso_date, ProposalRecord};

pub fn render_stats(counts: &StatusCounts) -> String {
    format!(
        "Total: {} | Completed: {} | Drafts: {} | Shared: {}",
        counts.total, counts.completed, counts.draft, counts.shared
    )
}

pub fn status_badge(record: &ProposalRecord) -> String {
    let p = record.status.presentation();
    format!("[{} {}]", p.marker, p.label)
}

pub fn render_card(record: &ProposalRecord) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "{} {}  ({} · {})",
        status_badge(record),
        record.title,
        record.kind,
        record.content_type
    ));
    out.push(format!("    {}", record.description));
    let mut footer = format!(
        "    id={}  created {}",
        record.id,
        format_iso_date(record.created_at)
    );
    if record.has_artifact() {
        footer.push_str("  [PDF]");
    }
    out.push(footer);
    out.join("\n")
}

pub fn render_detail(record: &ProposalRecord) -> String {
    let mut out = Vec::new();
    out.push(format!("# {}", record.title));
    out.push(format!(
        "{}  {}  {}",
        status_badge(record),
        record.kind,
        record.content_type
    ));
    out.push("".to_string());
    out.push("Description".to_string());
    out.push(format!("  {}", record.description));
    out.push("".to_string());
    out.push(format!("Created:      {}", format_iso_date(record.created_at)));
    out.push(format!("Last updated: {}", format_iso_date(record.updated_at)));
    match &record.artifact_url {
        Some(url) => out.push(format!("Artifact:     {}", url)),
        None => out.push("Artifact:     not generated yet".to_string()),
    }
    out.join("\n")
}

/// Compact sidebar listing: title and creation date, collection order.
pub fn render_history(records: &[ProposalRecord]) -> String {
    let mut out = vec!["Proposal History".to_string()];
    for r in records {
        out.push(format!("  {}  {}", format_iso_date(r.created_at), r.title));
    }
    out.join("\n")
}
