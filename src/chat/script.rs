//! Fixed prompt script driving the reporting conversation.
//!
//! The order of steps never changes; only the wording and the
//! bullying-type choice labels can be replaced through configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One question of the script, in asking order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Name,
    Age,
    State,
    District,
    City,
    BullyingType,
    Evidence,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Name,
        Step::Age,
        Step::State,
        Step::District,
        Step::City,
        Step::BullyingType,
        Step::Evidence,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            Step::Name => 0,
            Step::Age => 1,
            Step::State => 2,
            Step::District => 3,
            Step::City => 4,
            Step::BullyingType => 5,
            Step::Evidence => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following step, or `None` after the evidence question.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Draft field populated by the answer to this step.
    pub fn field_name(self) -> &'static str {
        match self {
            Step::Name => "name",
            Step::Age => "age",
            Step::State => "state",
            Step::District => "district",
            Step::City => "city",
            Step::BullyingType => "bullying_type",
            Step::Evidence => "evidence_links",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.field_name() == name)
    }
}

pub const DEFAULT_BULLYING_TYPES: [&str; 6] = [
    "Harassment",
    "Cyberstalking",
    "Impersonation",
    "Hate Speech",
    "Threats",
    "Other",
];

const DEFAULT_CLOSING: &str = "Thank you for your report. It has been submitted and will be reviewed by our team. Is there anything else I can help you with?";

/// Optional wording overrides loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScriptOverride {
    /// Prompt text keyed by field name (`name`, `age`, ..., `evidence_links`).
    #[serde(default)]
    pub prompts: BTreeMap<String, String>,
    #[serde(default)]
    pub bullying_types: Option<Vec<String>>,
    #[serde(default)]
    pub closing_message: Option<String>,
}

/// Static prompt table for the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationScript {
    prompts: [String; Step::COUNT],
    bullying_types: Vec<String>,
    closing_message: String,
}

impl Default for ConversationScript {
    fn default() -> Self {
        Self::for_bot("Billy")
    }
}

impl ConversationScript {
    /// Default script with the greeting introducing `bot_name`.
    pub fn for_bot(bot_name: &str) -> Self {
        let greeting = format!(
            "Hi! I'm {bot_name}, your friendly anti-bullying assistant. I'm here to help you report cyberbullying incidents. What's your name?"
        );
        Self {
            prompts: [
                greeting,
                "Thank you. How old are you?".into(),
                "Which state do you live in?".into(),
                "What district are you from?".into(),
                "And which city?".into(),
                "What type of cyberbullying are you experiencing?".into(),
                "Please provide any evidence links (social media posts, screenshots, etc.):".into(),
            ],
            bullying_types: DEFAULT_BULLYING_TYPES.iter().map(|s| s.to_string()).collect(),
            closing_message: DEFAULT_CLOSING.into(),
        }
    }

    /// Applies configured overrides. Unknown prompt keys are ignored.
    pub fn with_override(mut self, overrides: &ScriptOverride) -> Self {
        for (field, text) in &overrides.prompts {
            if let Some(step) = Step::from_field_name(field) {
                self.prompts[step.index()] = text.clone();
            }
        }
        if let Some(types) = &overrides.bullying_types {
            if !types.is_empty() {
                self.bullying_types = types.clone();
            }
        }
        if let Some(closing) = &overrides.closing_message {
            self.closing_message = closing.clone();
        }
        self
    }

    pub fn prompt(&self, step: Step) -> &str {
        &self.prompts[step.index()]
    }

    /// Choice labels shown with the prompt for `step`, if it is a choice step.
    pub fn options(&self, step: Step) -> Option<&[String]> {
        match step {
            Step::BullyingType => Some(&self.bullying_types),
            _ => None,
        }
    }

    pub fn bullying_types(&self) -> &[String] {
        &self.bullying_types
    }

    pub fn closing_message(&self) -> &str {
        &self.closing_message
    }
}
