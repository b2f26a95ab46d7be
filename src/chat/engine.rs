//! Guided reporting conversation.
//!
//! A linear flow manager asks the scripted questions one at a time,
//! collecting each answer into a draft. The seventh answer closes the draft
//! and the engine starts over, keeping the transcript for display.

use serde::{Deserialize, Serialize};

use super::script::{ConversationScript, Step};
use super::transcript::{Message, Transcript};

/// Answers collected so far, one slot per step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    answers: [Option<String>; Step::COUNT],
}

impl Draft {
    pub fn get(&self, step: Step) -> Option<&str> {
        self.answers[step.index()].as_deref()
    }

    fn set(&mut self, step: Step, value: String) {
        self.answers[step.index()] = Some(value);
    }

    pub fn filled(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    /// Closes the draft once every field is present.
    fn complete(&mut self) -> Option<CompletedDraft> {
        if self.filled() != Step::COUNT {
            return None;
        }
        let [name, age, state, district, city, bullying_type, evidence] =
            std::mem::take(&mut self.answers);
        Some(CompletedDraft {
            name: name?,
            raw_age: age?,
            state: state?,
            district: district?,
            city: city?,
            bullying_type: bullying_type?,
            evidence: evidence?,
        })
    }
}

/// Every answer of one finished conversation, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedDraft {
    pub name: String,
    pub raw_age: String,
    pub state: String,
    pub district: String,
    pub city: String,
    pub bullying_type: String,
    pub evidence: String,
}

impl CompletedDraft {
    /// `"{city}, {district}, {state}"`, no escaping.
    pub fn address(&self) -> String {
        format!("{}, {}, {}", self.city, self.district, self.state)
    }
}

/// Result of feeding one answer to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank input; nothing changed.
    Ignored,
    /// The answer was stored and the next question asked.
    Advanced { answered: Step, next: Step },
    /// The final answer arrived; the engine is back at the first step.
    Completed(CompletedDraft),
}

#[derive(Debug, Clone)]
pub struct ConversationEngine {
    script: ConversationScript,
    step: Step,
    draft: Draft,
    transcript: Transcript,
}

impl Default for ConversationEngine {
    fn default() -> Self {
        Self::new(ConversationScript::default())
    }
}

impl ConversationEngine {
    /// Creates an engine whose transcript already holds the greeting.
    pub fn new(script: ConversationScript) -> Self {
        let mut engine = Self {
            script,
            step: Step::Name,
            draft: Draft::default(),
            transcript: Transcript::new(),
        };
        engine.ask(Step::Name);
        engine
    }

    pub fn submit_answer(&mut self, raw_input: &str) -> TurnOutcome {
        let answer = raw_input.trim();
        if answer.is_empty() {
            return TurnOutcome::Ignored;
        }

        self.transcript.push(Message::user(answer));
        let answered = self.step;
        self.draft.set(answered, answer.to_string());

        match answered.next() {
            Some(next) => {
                self.ask(next);
                self.step = next;
                TurnOutcome::Advanced { answered, next }
            }
            None => {
                let completed = self.draft.complete();
                self.transcript
                    .push(Message::bot(self.script.closing_message(), None));
                self.step = Step::Name;
                self.draft = Draft::default();
                match completed {
                    Some(draft) => TurnOutcome::Completed(draft),
                    // Unreachable while steps only move forward one at a time.
                    None => TurnOutcome::Ignored,
                }
            }
        }
    }

    fn ask(&mut self, step: Step) {
        let options = self.script.options(step).map(<[String]>::to_vec);
        self.transcript
            .push(Message::bot(self.script.prompt(step), options));
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn script(&self) -> &ConversationScript {
        &self.script
    }

    /// Choice labels offered for the question currently awaiting an answer.
    pub fn current_options(&self) -> Option<&[String]> {
        self.script.options(self.step)
    }
}
