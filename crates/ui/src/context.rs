use std::sync::Arc;

use quiz_core::model::QuizContent;

/// Quizzes to mount, one widget each, provided by the composition root
/// (e.g. `crates/app`).
#[derive(Clone)]
pub struct AppContext {
    title: String,
    quizzes: Vec<Arc<QuizContent>>,
}

impl AppContext {
    #[must_use]
    pub fn new(title: impl Into<String>, quizzes: Vec<QuizContent>) -> Self {
        Self {
            title: title.into(),
            quizzes: quizzes.into_iter().map(Arc::new).collect(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Arc<QuizContent>] {
        &self.quizzes
    }
}

/// Build an `AppContext` for the given quizzes.
#[must_use]
pub fn build_app_context(title: impl Into<String>, quizzes: Vec<QuizContent>) -> AppContext {
    AppContext::new(title, quizzes)
}
