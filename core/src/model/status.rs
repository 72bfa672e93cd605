use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Draft,
    Completed,
    Shared,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 3] = [
        ProposalStatus::Completed,
        ProposalStatus::Draft,
        ProposalStatus::Shared,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Draft => "draft",
            ProposalStatus::Completed => "completed",
            ProposalStatus::Shared => "shared",
        }
    }

    pub fn presentation(&self) -> StatusPresentation {
        match self {
            ProposalStatus::Completed => StatusPresentation {
                label: "completed",
                tone: BadgeTone::Green,
                marker: "✓",
            },
            ProposalStatus::Draft => StatusPresentation {
                label: "draft",
                tone: BadgeTone::Yellow,
                marker: "◷",
            },
            ProposalStatus::Shared => StatusPresentation {
                label: "shared",
                tone: BadgeTone::Blue,
                marker: "⇪",
            },
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProposalStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "draft" => Ok(ProposalStatus::Draft),
            "completed" => Ok(ProposalStatus::Completed),
            "shared" => Ok(ProposalStatus::Shared),
            other => Err(CoreError::InvalidInput(format!(
                "unknown proposal status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Yellow,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub tone: BadgeTone,
    pub marker: &'static str,
}

/// Catalog status selector. Unlike a record's own status it has an `all` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProposalStatus),
}

impl StatusFilter {
    pub fn admits(&self, status: ProposalStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.as_str(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<ProposalStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| {
                CoreError::InvalidInput(format!(
                    "status filter must be one of all|completed|draft|shared, got {}",
                    s
                ))
            })
    }
}
