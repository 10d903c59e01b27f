//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{ContentError, ScoreError};

/// Errors emitted by `QuizSession` and `QuizFlow`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("choice {choice} is not an answer of question {question} ({answers} answers)")]
    OutOfRangeChoice {
        question: usize,
        choice: usize,
        answers: usize,
    },
    #[error("quiz already finished")]
    Finished,
    #[error("quiz has not finished yet")]
    NotFinished,
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Errors emitted while loading quiz content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read quiz content from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("quiz content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Content(#[from] ContentError),
}
