use anyhow::Result;
use cyberguard::chat::ScriptOverride;
use cyberguard::desk::load_from;
use cyberguard::{AppConfig, Step, Submission};
use std::collections::BTreeMap;

use crate::support::desk_fixture::{DeskFixture, SCENARIO};

#[test]
fn bot_name_and_overrides_reach_the_transcript() -> Result<()> {
    let mut prompts = BTreeMap::new();
    prompts.insert("age".to_string(), "And your age?".to_string());
    let mut config = AppConfig::default();
    config.chat.bot_name = "Ana".into();
    config.chat.script = Some(ScriptOverride {
        prompts,
        bullying_types: None,
        closing_message: Some("Saved.".into()),
    });

    let mut fixture = DeskFixture::with_config(&config)?.signed_in(false);
    let greeting = &fixture.desk.transcript().messages()[0];
    assert!(greeting.text.contains("I'm Ana"));

    fixture.desk.submit_answer("Alex")?;
    assert_eq!(
        fixture.desk.transcript().last().map(|m| m.text.as_str()),
        Some("And your age?")
    );

    let outcome = fixture.run_conversation(&SCENARIO[1..])?;
    assert!(matches!(outcome, Submission::Submitted(_)));
    assert_eq!(
        fixture.desk.transcript().last().map(|m| m.text.as_str()),
        Some("Saved.")
    );
    assert_eq!(fixture.desk.engine().step(), Step::Name);
    Ok(())
}

#[test]
fn config_file_round_trips_through_toml() -> Result<()> {
    let fixture = DeskFixture::new()?;
    let path = fixture.harness.workspace_path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[chat]
bot_name = "Billy"

[chat.script]
bullying_types = ["Harassment", "Doxxing"]

[chat.script.prompts]
city = "Which town?"

[reports]
require_user = false
"#,
    )?;
    let config = load_from(&path)?;
    assert!(!config.reports.require_user);

    let mut fixture = DeskFixture::with_config(&config)?;
    fixture.run_conversation(&SCENARIO[..5])?;
    assert_eq!(
        fixture.desk.engine().current_options().map(|o| o.to_vec()),
        Some(vec!["Harassment".to_string(), "Doxxing".to_string()])
    );
    Ok(())
}
