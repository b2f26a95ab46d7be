use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{Report, ReportStatus};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvidenceLink {
    pub label: String,
    pub url: String,
}

/// Flattened view of a report for list and dashboard rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub id: Uuid,
    pub bullying_type: String,
    pub respondent: String,
    pub address: String,
    pub reported_on: NaiveDate,
    pub status: ReportStatus,
    pub evidence: Vec<EvidenceLink>,
}

impl ReportSummary {
    pub fn from_report(report: &Report) -> Self {
        let respondent = match report.respondent_age {
            Some(age) => format!("{} ({age})", report.respondent_name),
            None => format!("{} (age unknown)", report.respondent_name),
        };
        Self {
            id: report.id,
            bullying_type: report.bullying_type.clone(),
            respondent,
            address: report.location.address.clone(),
            reported_on: report.created_at.date_naive(),
            status: report.status,
            evidence: report
                .evidence_links
                .iter()
                .enumerate()
                .map(|(idx, url)| EvidenceLink {
                    label: format!("Evidence #{}", idx + 1),
                    url: url.clone(),
                })
                .collect(),
        }
    }

    pub fn headline(&self) -> String {
        format!(
            "[{}] {} - {} - {} ({})",
            self.status, self.bullying_type, self.respondent, self.address, self.reported_on
        )
    }
}
