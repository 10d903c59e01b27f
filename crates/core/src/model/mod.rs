mod ids;
mod question;
mod quiz;
mod results;
mod score;

pub use ids::Choice;
pub use question::{Question, QuestionDraft};
pub use quiz::{ContentError, FeedbackKind, FeedbackMessages, QuizContent, QuizContentDraft};
pub use results::{QuestionOutcome, QuizResults};
pub use score::{ScoreError, ScorePercent};
