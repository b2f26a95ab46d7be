pub mod engine;
pub mod script;
pub mod transcript;

pub use engine::{CompletedDraft, ConversationEngine, Draft, TurnOutcome};
pub use script::{ConversationScript, ScriptOverride, Step, DEFAULT_BULLYING_TYPES};
pub use transcript::{Message, Sender, Transcript};
