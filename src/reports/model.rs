//! Finished incident reports.
//!
//! A report is built once from a completed conversation and is immutable
//! afterwards apart from its status, which only moves forward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::CompletedDraft;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    Reported,
    Resolved,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Reported => "reported",
            ReportStatus::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Recoverable data problems noticed while assembling a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityFlag {
    InvalidAge { raw: String },
}

/// Policy for the evidence answer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EvidencePolicy {
    /// Keep the whole answer as one entry.
    #[default]
    SingleEntry,
    /// Split the answer on whitespace into separate links.
    SplitWhitespace,
}

impl EvidencePolicy {
    pub fn apply(self, raw: &str) -> Vec<String> {
        match self {
            EvidencePolicy::SingleEntry => vec![raw.to_string()],
            EvidencePolicy::SplitWhitespace => {
                raw.split_whitespace().map(str::to_string).collect()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub id: Uuid,
    /// Account that submitted the report, when one was signed in.
    pub user_id: Option<String>,
    pub respondent_name: String,
    pub respondent_age: Option<u32>,
    pub location: Location,
    pub bullying_type: String,
    pub evidence_links: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
    #[serde(default)]
    pub data_quality: Vec<DataQualityFlag>,
}

impl Report {
    /// Builds a pending report. `location.address` should be `draft.address()`.
    pub fn from_draft(
        draft: &CompletedDraft,
        user_id: Option<String>,
        location: Location,
        evidence_policy: EvidencePolicy,
    ) -> Self {
        let respondent_age = parse_age(&draft.raw_age);
        let mut data_quality = Vec::new();
        if respondent_age.is_none() {
            data_quality.push(DataQualityFlag::InvalidAge {
                raw: draft.raw_age.clone(),
            });
        }
        Self {
            id: Uuid::new_v4(),
            user_id,
            respondent_name: draft.name.clone(),
            respondent_age,
            location,
            bullying_type: draft.bullying_type.clone(),
            evidence_links: evidence_policy.apply(&draft.evidence),
            created_at: Utc::now(),
            status: ReportStatus::Pending,
            data_quality,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReportStatus::Pending
    }

    pub fn has_data_quality_issues(&self) -> bool {
        !self.data_quality.is_empty()
    }
}

/// Reads an age the way a lenient integer parse would: leading whitespace,
/// an optional `+`, then as many digits as follow. Anything else is `None`.
pub fn parse_age(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
