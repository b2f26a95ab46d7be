//! Groups reports that share coordinates into map markers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::model::Report;

/// Initial map centre (India).
pub const MAP_CENTER: (f64, f64) = (20.5937, 78.9629);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarkerColor {
    Blue,
    Orange,
    Red,
}

impl MarkerColor {
    pub fn for_count(count: usize) -> Self {
        if count >= 5 {
            MarkerColor::Red
        } else if count >= 3 {
            MarkerColor::Orange
        } else {
            MarkerColor::Blue
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterEntry {
    pub report_id: Uuid,
    pub bullying_type: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCluster {
    pub lat: f64,
    pub lng: f64,
    pub entries: Vec<ClusterEntry>,
}

impl ReportCluster {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn color(&self) -> MarkerColor {
        MarkerColor::for_count(self.count())
    }

    /// "1 Report" / "n Reports".
    pub fn label(&self) -> String {
        match self.count() {
            1 => "1 Report".to_string(),
            n => format!("{n} Reports"),
        }
    }
}

/// One cluster per distinct (lat, lng), in order of first appearance.
pub fn cluster_reports(reports: &[Report]) -> Vec<ReportCluster> {
    let mut index: HashMap<(u64, u64), usize> = HashMap::new();
    let mut clusters: Vec<ReportCluster> = Vec::new();
    for report in reports {
        let key = (
            report.location.lat.to_bits(),
            report.location.lng.to_bits(),
        );
        let slot = *index.entry(key).or_insert_with(|| {
            clusters.push(ReportCluster {
                lat: report.location.lat,
                lng: report.location.lng,
                entries: Vec::new(),
            });
            clusters.len() - 1
        });
        clusters[slot].entries.push(ClusterEntry {
            report_id: report.id,
            bullying_type: report.bullying_type.clone(),
            address: report.location.address.clone(),
        });
    }
    clusters
}
