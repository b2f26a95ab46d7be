use anyhow::Result;
use cyberguard::desk::{config_file_path, load_or_default, save, workspace_root};
use cyberguard::reports::EvidencePolicy;
use cyberguard::{AppConfig, EventType, ReportDesk};
use std::env;

use crate::IntegrationHarness;

#[test]
fn open_uses_cyberguard_home_for_config_and_events() -> Result<()> {
    let harness = IntegrationHarness::new();
    env::set_var("CYBERGUARD_HOME", harness.workspace_path());
    assert_eq!(workspace_root()?, harness.workspace_path());

    let mut config = AppConfig::default();
    config.chat.bot_name = "Ana".into();
    config.reports.evidence_policy = EvidencePolicy::SplitWhitespace;
    save(&config)?;
    assert_eq!(
        config_file_path()?,
        harness.workspace_path().join("config").join("config.toml")
    );

    let loaded = load_or_default()?;
    assert_eq!(loaded.chat.bot_name, "Ana");
    assert_eq!(loaded.reports.evidence_policy, EvidencePolicy::SplitWhitespace);

    let desk = ReportDesk::open()?;
    assert!(desk.transcript().messages()[0].text.contains("I'm Ana"));
    assert!(harness.events_path().exists());
    let events = desk.events().load()?;
    assert_eq!(events[0].event_type, EventType::ConversationStarted);
    Ok(())
}
