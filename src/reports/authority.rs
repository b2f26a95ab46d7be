use anyhow::Result;
use serde_json::json;

use super::model::Report;
use crate::events::{EventLog, EventType};

/// Hands a report to an outside body (police cyber cell, platform trust team).
pub trait AuthorityChannel {
    fn forward(&mut self, report: &Report) -> Result<()>;
}

/// Records the hand-off in the event log. No transport is wired up yet.
#[derive(Debug, Clone)]
pub struct LoggingAuthority {
    events: EventLog,
}

impl LoggingAuthority {
    pub fn new(events: EventLog) -> Self {
        Self { events }
    }
}

impl AuthorityChannel for LoggingAuthority {
    fn forward(&mut self, report: &Report) -> Result<()> {
        self.events.record(
            EventType::ReportForwarded,
            json!({
                "report_id": report.id,
                "bullying_type": report.bullying_type,
                "address": report.location.address,
                "evidence_count": report.evidence_links.len(),
            }),
        )?;
        Ok(())
    }
}
