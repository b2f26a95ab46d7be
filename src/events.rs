use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Type of desk events that can be logged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ConversationStarted,
    AnswerRecorded,
    AnswerIgnored,
    ReportSubmitted,
    ReportDropped,
    ReportForwarded,
    StoryPosted,
}

/// General-purpose desk event stored as JSONL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskEvent {
    pub event_id: Uuid,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl DeskEvent {
    pub fn new(event_type: EventType, details: serde_json::Value) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            details,
        }
    }
}

/// Append-only event log. A disabled log accepts and discards everything.
#[derive(Debug, Clone)]
pub struct EventLog {
    events_path: Option<PathBuf>,
}

impl EventLog {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            events_path: Some(path.into()),
        }
    }

    pub fn disabled() -> Self {
        Self { events_path: None }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.events_path.as_ref()
    }

    pub fn append(&self, event: &DeskEvent) -> Result<()> {
        let Some(path) = &self.events_path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open event log {:?}", path))?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// Builds and appends an event, returning its id.
    pub fn record(&self, event_type: EventType, details: serde_json::Value) -> Result<Uuid> {
        let event = DeskEvent::new(event_type, details);
        self.append(&event)?;
        Ok(event.event_id)
    }

    pub fn load(&self) -> Result<Vec<DeskEvent>> {
        let Some(path) = &self.events_path else {
            return Ok(Vec::new());
        };
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: DeskEvent = serde_json::from_str(line)
                .with_context(|| format!("Corrupt event line in {:?}", path))?;
            events.push(event);
        }
        Ok(events)
    }

    pub fn load_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<DeskEvent>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|event| event.timestamp >= cutoff)
            .collect())
    }
}
