//! Community board where users share stories and reply to them.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: Uuid,
    pub user_id: String,
    pub username: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Stories, newest first.
#[derive(Debug, Clone, Default)]
pub struct StoryBoard {
    stories: Vec<Story>,
}

impl StoryBoard {
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn post(&mut self, author: &User, title: &str, content: &str) -> Result<&Story> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            bail!("A story needs both a title and some content");
        }
        self.stories.insert(
            0,
            Story {
                id: Uuid::new_v4(),
                user_id: author.id.clone(),
                username: author.username.clone(),
                title: title.to_string(),
                content: content.to_string(),
                created_at: Utc::now(),
                comments: Vec::new(),
            },
        );
        Ok(&self.stories[0])
    }

    pub fn comment(&mut self, story_id: &Uuid, author: &User, content: &str) -> Result<&Comment> {
        let content = content.trim();
        if content.is_empty() {
            bail!("Comment is empty");
        }
        let story = self
            .stories
            .iter_mut()
            .find(|s| &s.id == story_id)
            .with_context(|| format!("No story with id {story_id}"))?;
        story.comments.push(Comment {
            id: Uuid::new_v4(),
            user_id: author.id.clone(),
            username: author.username.clone(),
            content: content.to_string(),
            created_at: Utc::now(),
        });
        story.comments.last().context("comment just pushed")
    }
}
