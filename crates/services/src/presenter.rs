//! Presentation seams driven by a quiz flow.
//!
//! Implementations decide how things look; the flow only decides what happens
//! and when. All calls are synchronous and happen on the UI thread.

use quiz_core::model::ScorePercent;

/// How an answer is highlighted once results are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerMark {
    /// The question's correct answer.
    Correct,
    /// A submitted answer that was wrong.
    Incorrect,
}

/// Draws questions, progress and results for one quiz widget.
pub trait Renderer {
    fn show_question(&mut self, index: usize);
    fn hide_question(&mut self, index: usize);
    fn set_progress_text(&mut self, text: &str);
    fn highlight_answer(&mut self, question: usize, answer: usize, mark: AnswerMark);
    fn reveal_all_results(&mut self);
    fn append_feedback(&mut self, text: &str);
    fn append_call_to_action(&mut self, content: &str);
    fn disable_advance_control(&mut self, disabled: bool);
    fn remove_advance_control(&mut self);
}

/// Visual indicator of the final score.
pub trait ScoreGauge {
    fn configure(&mut self);
    fn render(&mut self);
    fn set_value(&mut self, score: ScorePercent);
}
