use anyhow::Result;
use cyberguard::EventType;

use crate::support::desk_fixture::DeskFixture;

#[test]
fn stories_need_a_signed_in_author() -> Result<()> {
    let mut fixture = DeskFixture::new()?;
    assert!(fixture.desk.post_story("Hello", "Body").is_err());

    let mut fixture = fixture.signed_in(false);
    let first = fixture.desk.post_story("Hello", "It gets better")?;
    fixture.desk.post_story("Again", "Block and report")?;
    fixture.desk.add_comment(&first, "Thanks for sharing")?;

    let stories = fixture.desk.stories();
    assert_eq!(stories[0].title, "Again");
    assert_eq!(stories[1].comments[0].content, "Thanks for sharing");
    assert_eq!(stories[1].username, "alex");

    let posted = fixture
        .desk
        .events()
        .load()?
        .into_iter()
        .filter(|e| e.event_type == EventType::StoryPosted)
        .count();
    assert_eq!(posted, 2);
    Ok(())
}
