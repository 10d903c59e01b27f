//! Reads quiz content files in their JSON shape and validates them.

use std::path::Path;

use quiz_core::model::{QuizContent, QuizContentDraft};
use tracing::debug;

use crate::error::LoadError;

/// Parse and validate quiz content from a JSON string.
///
/// # Errors
///
/// Returns `LoadError::Json` for malformed JSON and `LoadError::Content` when
/// the parsed content fails validation.
pub fn load_quiz_content_from_str(json: &str) -> Result<QuizContent, LoadError> {
    let draft: QuizContentDraft = serde_json::from_str(json)?;
    let content = draft.validate()?;
    debug!(questions = content.len(), "quiz content loaded");
    Ok(content)
}

/// Read, parse and validate a quiz content file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise the errors of
/// [`load_quiz_content_from_str`].
pub fn load_quiz_content(path: impl AsRef<Path>) -> Result<QuizContent, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_quiz_content_from_str(&json)
}
