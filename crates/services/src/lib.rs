#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod presenter;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{LoadError, QuizError};
pub use loader::{load_quiz_content, load_quiz_content_from_str};
pub use presenter::{AnswerMark, Renderer, ScoreGauge};
pub use sessions::{QuizFlow, QuizProgress, QuizSession, QuizState, SubmitOutcome};
