mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::QuizError;
pub use progress::QuizProgress;
pub use service::{QuizSession, QuizState, SubmitOutcome};
pub use workflow::QuizFlow;
