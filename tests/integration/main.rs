use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn events_path(&self) -> PathBuf {
        self.workspace.path().join("logs").join("events.jsonl")
    }
}

mod admin_forwarding;
mod community_board;
mod config_script;
mod workspace_home;
pub mod support;
