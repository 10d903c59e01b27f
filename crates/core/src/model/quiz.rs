use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::question::{Question, QuestionDraft};
use crate::model::score::ScorePercent;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Reasons quiz content is refused before a session can start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("quiz must contain at least one question")]
    NoQuestions,

    #[error("question {question} has an empty body")]
    EmptyBody { question: usize },

    #[error("question {question} has no answers")]
    NoAnswers { question: usize },

    #[error("question {question} is missing its correct answer")]
    MissingCorrectAnswer { question: usize },

    #[error("question {question} marks answer {index} as correct but only has {answers} answers")]
    CorrectAnswerOutOfRange {
        question: usize,
        index: i64,
        answers: usize,
    },
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// Which feedback message a finished quiz shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    /// Every answer was right.
    Perfect,
    /// Anything below a full score.
    Imperfect,
}

impl FeedbackKind {
    #[must_use]
    pub fn for_score(score: ScorePercent) -> Self {
        if score.is_perfect() {
            Self::Perfect
        } else {
            Self::Imperfect
        }
    }
}

/// Messages keyed the way content files key them: `"100"` and `"<100"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessages {
    #[serde(rename = "100")]
    pub perfect: String,
    #[serde(rename = "<100")]
    pub imperfect: String,
}

impl FeedbackMessages {
    pub fn new(perfect: impl Into<String>, imperfect: impl Into<String>) -> Self {
        Self {
            perfect: perfect.into(),
            imperfect: imperfect.into(),
        }
    }

    #[must_use]
    pub fn message(&self, kind: FeedbackKind) -> &str {
        match kind {
            FeedbackKind::Perfect => &self.perfect,
            FeedbackKind::Imperfect => &self.imperfect,
        }
    }
}

//
// ─── QUIZ CONTENT ──────────────────────────────────────────────────────────────
//

/// Quiz content exactly as it is read from JSON, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizContentDraft {
    pub questions: Vec<QuestionDraft>,
    pub feedback_messages: FeedbackMessages,
    #[serde(default)]
    pub call_to_action: String,
}

/// Validated, immutable quiz content. Always holds at least one question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "QuizContentDraft")]
pub struct QuizContent {
    questions: Vec<Question>,
    feedback: FeedbackMessages,
    call_to_action: String,
}

impl QuizContentDraft {
    pub fn new(
        questions: Vec<QuestionDraft>,
        feedback_messages: FeedbackMessages,
        call_to_action: impl Into<String>,
    ) -> Self {
        Self {
            questions,
            feedback_messages,
            call_to_action: call_to_action.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `ContentError::NoQuestions` for an empty question list, or the
    /// first question-level error encountered in order.
    pub fn validate(self) -> Result<QuizContent, ContentError> {
        if self.questions.is_empty() {
            return Err(ContentError::NoQuestions);
        }

        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(position, draft)| draft.validate(position))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuizContent {
            questions,
            feedback: self.feedback_messages,
            call_to_action: self.call_to_action,
        })
    }
}

impl TryFrom<QuizContentDraft> for QuizContent {
    type Error = ContentError;

    fn try_from(draft: QuizContentDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl QuizContent {
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Validated content is never empty; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn feedback(&self) -> &FeedbackMessages {
        &self.feedback
    }

    #[must_use]
    pub fn call_to_action(&self) -> &str {
        &self.call_to_action
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
