use anyhow::{bail, Context, Result};
use uuid::Uuid;

use super::model::{Report, ReportStatus};

/// Receives finished reports. Implementations append; they never deduplicate.
pub trait ReportSink {
    fn append(&mut self, report: Report) -> Result<()>;
}

impl ReportSink for Vec<Report> {
    fn append(&mut self, report: Report) -> Result<()> {
        self.push(report);
        Ok(())
    }
}

/// In-memory collection backing the map, the lists and the admin view.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    reports: Vec<Report>,
}

impl ReportSink for ReportStore {
    fn append(&mut self, report: Report) -> Result<()> {
        self.reports.push(report);
        Ok(())
    }
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn get(&self, id: &Uuid) -> Option<&Report> {
        self.reports.iter().find(|r| &r.id == id)
    }

    /// Reports still awaiting an admin decision, in submission order.
    pub fn pending(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter().filter(|r| r.is_pending())
    }

    /// Moves a pending report to `Reported`.
    pub fn mark_reported(&mut self, id: &Uuid) -> Result<&Report> {
        let report = self
            .reports
            .iter_mut()
            .find(|r| &r.id == id)
            .with_context(|| format!("No report with id {id}"))?;
        if report.status != ReportStatus::Pending {
            bail!("Report {id} is already {}", report.status);
        }
        report.status = ReportStatus::Reported;
        Ok(report)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
