use std::collections::{BTreeMap, BTreeSet};

use services::{AnswerMark, Renderer};

/// State of the "Next" button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdvanceControl {
    Enabled,
    #[default]
    Disabled,
    Removed,
}

/// Retained render state for one quiz widget.
///
/// `QuizFlow` drives it through `Renderer`; components only read it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizFrame {
    visible: BTreeSet<usize>,
    results_revealed: bool,
    marks: BTreeMap<(usize, usize), AnswerMark>,
    progress: String,
    feedback: Vec<String>,
    call_to_action: Vec<String>,
    control: AdvanceControl,
}

impl QuizFrame {
    /// Questions are all visible once results are revealed.
    #[must_use]
    pub fn is_question_visible(&self, index: usize) -> bool {
        self.results_revealed || self.visible.contains(&index)
    }

    #[must_use]
    pub fn results_revealed(&self) -> bool {
        self.results_revealed
    }

    #[must_use]
    pub fn mark(&self, question: usize, answer: usize) -> Option<AnswerMark> {
        self.marks.get(&(question, answer)).copied()
    }

    #[must_use]
    pub fn progress(&self) -> &str {
        &self.progress
    }

    #[must_use]
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    #[must_use]
    pub fn call_to_action(&self) -> &[String] {
        &self.call_to_action
    }

    #[must_use]
    pub fn control(&self) -> AdvanceControl {
        self.control
    }
}

impl Renderer for QuizFrame {
    fn show_question(&mut self, index: usize) {
        self.visible.insert(index);
    }

    fn hide_question(&mut self, index: usize) {
        self.visible.remove(&index);
    }

    fn set_progress_text(&mut self, text: &str) {
        text.clone_into(&mut self.progress);
    }

    fn highlight_answer(&mut self, question: usize, answer: usize, mark: AnswerMark) {
        self.marks.insert((question, answer), mark);
    }

    fn reveal_all_results(&mut self) {
        self.results_revealed = true;
    }

    fn append_feedback(&mut self, text: &str) {
        self.feedback.push(text.to_string());
    }

    fn append_call_to_action(&mut self, content: &str) {
        self.call_to_action.push(content.to_string());
    }

    fn disable_advance_control(&mut self, disabled: bool) {
        // a removed control stays removed
        if self.control != AdvanceControl::Removed {
            self.control = if disabled {
                AdvanceControl::Disabled
            } else {
                AdvanceControl::Enabled
            };
        }
    }

    fn remove_advance_control(&mut self) {
        self.control = AdvanceControl::Removed;
    }
}
