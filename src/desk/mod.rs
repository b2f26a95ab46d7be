pub mod community;
mod config;
pub mod user;

pub use community::{Comment, Story, StoryBoard};
pub use config::{
    config_file_path, ensure_workspace_structure, load_from, load_or_default, save,
    workspace_root, AppConfig, ChatSettings, GeocodingSettings, ReportSettings, WorkspacePaths,
    CONFIG_FILE_NAME,
};
pub use user::User;

use crate::chat::{ConversationEngine, ConversationScript, Step, Transcript, TurnOutcome};
use crate::events::{EventLog, EventType};
use crate::reports::ReportStatus;
use crate::reports::{
    cluster_reports, AuthorityChannel, Geocoder, LoggingAuthority, RandomGeocoder, Report,
    ReportCluster, ReportSink, ReportStore, ReportSummary,
};
use anyhow::{bail, Context, Result};
use serde_json::json;
use uuid::Uuid;

/// What a single chat turn did at the desk level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input, nothing happened.
    Ignored,
    /// Answer stored; the engine now waits on `next`.
    Continued { next: Step },
    /// Conversation finished and the report reached the store.
    Submitted(Uuid),
    /// Conversation finished but nobody was signed in, so no report was kept.
    Dropped,
}

/// Owns the conversation, the report collection and their collaborators.
pub struct ReportDesk {
    engine: ConversationEngine,
    store: ReportStore,
    stories: StoryBoard,
    geocoder: Box<dyn Geocoder>,
    authority: Box<dyn AuthorityChannel>,
    events: EventLog,
    settings: ReportSettings,
    current_user: Option<User>,
}

impl ReportDesk {
    pub fn new(config: &AppConfig, events: EventLog) -> Result<Self> {
        let mut script = ConversationScript::for_bot(&config.chat.bot_name);
        if let Some(overrides) = &config.chat.script {
            script = script.with_override(overrides);
        }
        let desk = Self {
            engine: ConversationEngine::new(script),
            store: ReportStore::new(),
            stories: StoryBoard::default(),
            geocoder: Box::new(RandomGeocoder::new(config.geocoding.decimals)),
            authority: Box::new(LoggingAuthority::new(events.clone())),
            events,
            settings: config.reports.clone(),
            current_user: None,
        };
        desk.log_conversation_started();
        Ok(desk)
    }

    /// Desk backed by the workspace config and event log.
    pub fn open() -> Result<Self> {
        let paths = ensure_workspace_structure()?;
        let config = load_or_default()?;
        Self::new(&config, EventLog::at(paths.events_log()))
    }

    pub fn with_geocoder(mut self, geocoder: Box<dyn Geocoder>) -> Self {
        self.geocoder = geocoder;
        self
    }

    pub fn with_authority(mut self, authority: Box<dyn AuthorityChannel>) -> Self {
        self.authority = authority;
        self
    }

    pub fn sign_in(&mut self, user: User) {
        self.current_user = Some(user);
    }

    pub fn sign_out(&mut self) -> Option<User> {
        self.current_user.take()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Feeds one typed answer or selected option to the conversation.
    ///
    /// Only the report sink can fail a turn; event log problems are reported
    /// on stderr and the turn still counts.
    pub fn submit_answer(&mut self, text: &str) -> Result<Submission> {
        let answering = self.engine.step();
        match self.engine.submit_answer(text) {
            TurnOutcome::Ignored => {
                self.note(
                    EventType::AnswerIgnored,
                    json!({ "field": answering.field_name() }),
                );
                Ok(Submission::Ignored)
            }
            TurnOutcome::Advanced { answered, next } => {
                self.note(
                    EventType::AnswerRecorded,
                    json!({ "field": answered.field_name(), "step": answered.index() }),
                );
                Ok(Submission::Continued { next })
            }
            TurnOutcome::Completed(draft) => {
                let user_id = self.current_user.as_ref().map(|u| u.id.clone());
                let outcome = if user_id.is_none() && self.settings.require_user {
                    self.note(
                        EventType::ReportDropped,
                        json!({ "reason": "no signed-in user" }),
                    );
                    Submission::Dropped
                } else {
                    let location = self.geocoder.locate(&draft.address());
                    let report = Report::from_draft(
                        &draft,
                        user_id,
                        location,
                        self.settings.evidence_policy,
                    );
                    let id = report.id;
                    let flags = report.data_quality.len();
                    self.store.append(report)?;
                    self.note(
                        EventType::ReportSubmitted,
                        json!({ "report_id": id, "data_quality_flags": flags }),
                    );
                    Submission::Submitted(id)
                };
                self.log_conversation_started();
                Ok(outcome)
            }
        }
    }

    fn log_conversation_started(&self) {
        self.note(
            EventType::ConversationStarted,
            json!({ "transcript_len": self.engine.transcript().len() }),
        );
    }

    /// Best-effort event write.
    fn note(&self, event_type: EventType, details: serde_json::Value) {
        if let Err(err) = self.events.record(event_type, details) {
            eprintln!("warning: could not record {event_type:?} event: {err:#}");
        }
    }

    fn require_admin(&self) -> Result<&User> {
        let user = self
            .current_user
            .as_ref()
            .context("Sign in to use the admin dashboard")?;
        if !user.is_admin {
            bail!("User {} is not an administrator", user.username);
        }
        Ok(user)
    }

    /// Admin action: forwards a pending report, then marks it reported.
    /// A failed forward leaves the report pending so it can be retried.
    pub fn report_to_authority(&mut self, report_id: &Uuid) -> Result<()> {
        self.require_admin()?;
        let stored = self
            .store
            .get(report_id)
            .with_context(|| format!("No report with id {report_id}"))?;
        if !stored.is_pending() {
            bail!("Report {report_id} is already {}", stored.status);
        }
        let mut outgoing = stored.clone();
        outgoing.status = ReportStatus::Reported;
        self.authority
            .forward(&outgoing)
            .with_context(|| format!("Forwarding report {report_id} failed"))?;
        self.store.mark_reported(report_id)?;
        Ok(())
    }

    /// Admin dashboard listing.
    pub fn pending_reports(&self) -> Result<Vec<&Report>> {
        self.require_admin()?;
        Ok(self.store.pending().collect())
    }

    pub fn reports(&self) -> &[Report] {
        self.store.reports()
    }

    pub fn report_summaries(&self) -> Vec<ReportSummary> {
        self.store
            .reports()
            .iter()
            .map(ReportSummary::from_report)
            .collect()
    }

    pub fn clusters(&self) -> Vec<ReportCluster> {
        cluster_reports(self.store.reports())
    }

    pub fn post_story(&mut self, title: &str, content: &str) -> Result<Uuid> {
        let author = self
            .current_user
            .as_ref()
            .context("Sign in to share a story")?;
        let id = self.stories.post(author, title, content)?.id;
        self.note(EventType::StoryPosted, json!({ "story_id": id }));
        Ok(id)
    }

    pub fn add_comment(&mut self, story_id: &Uuid, content: &str) -> Result<Uuid> {
        let author = self
            .current_user
            .as_ref()
            .context("Sign in to comment")?;
        Ok(self.stories.comment(story_id, author, content)?.id)
    }

    pub fn stories(&self) -> &[Story] {
        self.stories.stories()
    }

    pub fn engine(&self) -> &ConversationEngine {
        &self.engine
    }

    pub fn transcript(&self) -> &Transcript {
        self.engine.transcript()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }
}
