use serde::{Deserialize, Serialize};

use crate::model::ids::Choice;
use crate::model::quiz::ContentError;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in quiz content files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub body: String,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<i64>,
}

/// A question whose correct answer is known to point into its answer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    body: String,
    answers: Vec<String>,
    correct: Choice,
}

//
// ─── QUESTION DRAFT IMPL ───────────────────────────────────────────────────────
//

impl QuestionDraft {
    pub fn new(body: impl Into<String>, answers: Vec<String>, correct_answer: Option<i64>) -> Self {
        Self {
            body: body.into(),
            answers,
            correct_answer,
        }
    }

    /// Validate the draft; `position` is the question's index in the quiz and is
    /// only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyBody` if the body is blank.
    /// Returns `ContentError::NoAnswers` if the answer list is empty.
    /// Returns `ContentError::MissingCorrectAnswer` if no correct answer is given.
    /// Returns `ContentError::CorrectAnswerOutOfRange` if it does not index an answer.
    pub fn validate(self, position: usize) -> Result<Question, ContentError> {
        if self.body.trim().is_empty() {
            return Err(ContentError::EmptyBody { question: position });
        }
        if self.answers.is_empty() {
            return Err(ContentError::NoAnswers { question: position });
        }

        let raw = self
            .correct_answer
            .ok_or(ContentError::MissingCorrectAnswer { question: position })?;
        let correct = usize::try_from(raw)
            .ok()
            .filter(|index| *index < self.answers.len())
            .ok_or(ContentError::CorrectAnswerOutOfRange {
                question: position,
                index: raw,
                answers: self.answers.len(),
            })?;

        Ok(Question {
            body: self.body,
            answers: self.answers,
            correct: Choice::new(correct),
        })
    }
}

//
// ─── QUESTION ACCESSORS ────────────────────────────────────────────────────────
//

impl Question {
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, choice: Choice) -> Option<&str> {
        self.answers.get(choice.index()).map(String::as_str)
    }

    #[must_use]
    pub fn correct_answer(&self) -> Choice {
        self.correct
    }

    #[must_use]
    pub fn accepts(&self, choice: Choice) -> bool {
        choice.index() < self.answers.len()
    }

    /// A missing response never counts as correct.
    #[must_use]
    pub fn is_correct(&self, response: Option<Choice>) -> bool {
        response == Some(self.correct)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
