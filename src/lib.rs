pub mod chat;
pub mod desk;
pub mod events;
pub mod reports;

// Re-export commonly used types for convenience.
pub use chat::{ConversationEngine, ConversationScript, Message, Sender, Step, TurnOutcome};
pub use desk::{AppConfig, ReportDesk, Submission, User};
pub use events::{DeskEvent, EventLog, EventType};
pub use reports::{Report, ReportSink, ReportStatus, ReportStore};
