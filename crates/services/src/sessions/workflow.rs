use quiz_core::model::{Choice, QuizResults};
use tracing::{debug, info};

use super::service::{QuizSession, SubmitOutcome};
use crate::error::QuizError;
use crate::presenter::{AnswerMark, Renderer, ScoreGauge};

/// Drives one quiz widget: forwards user events to a `QuizSession` and tells
/// the renderer and gauge what to show.
///
/// Each widget mount owns its own flow; nothing is shared between widgets.
pub struct QuizFlow<R, G> {
    session: QuizSession,
    renderer: R,
    gauge: G,
    selection: Option<Choice>,
    results: Option<QuizResults>,
}

impl<R: Renderer, G: ScoreGauge> QuizFlow<R, G> {
    #[must_use]
    pub fn new(session: QuizSession, renderer: R, gauge: G) -> Self {
        Self {
            session,
            renderer,
            gauge,
            selection: None,
            results: None,
        }
    }

    /// Show the first question with its counter. The advance control starts
    /// disabled until a choice is selected.
    pub fn mount(&mut self) {
        if let Some(index) = self.session.current_index() {
            self.renderer.show_question(index);
            self.renderer
                .set_progress_text(&self.session.progress().label());
            self.renderer.disable_advance_control(true);
            debug!(
                question = index,
                total = self.session.total_questions(),
                "quiz mounted"
            );
        }
    }

    /// Remember the choice picked for the current question and enable the
    /// advance control.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` after the last answer and
    /// `QuizError::OutOfRangeChoice` for answers the question does not have.
    pub fn select_choice(&mut self, choice: Choice) -> Result<(), QuizError> {
        self.session.check_choice(choice)?;
        self.selection = Some(choice);
        self.renderer.disable_advance_control(false);
        Ok(())
    }

    #[must_use]
    pub fn selection(&self) -> Option<Choice> {
        self.selection
    }

    /// Submit the pending selection, or no answer if nothing was selected.
    ///
    /// # Errors
    ///
    /// See [`QuizFlow::submit_current_answer`].
    pub fn advance(&mut self) -> Result<SubmitOutcome, QuizError> {
        let outcome = self.submit_current_answer(self.selection)?;
        self.selection = None;
        Ok(outcome)
    }

    /// Record `choice` for the current question, then either move on to the
    /// next question or present the results.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` if the quiz is already over and
    /// `QuizError::OutOfRangeChoice` for invalid choices. Nothing is rendered
    /// on error.
    pub fn submit_current_answer(
        &mut self,
        choice: Option<Choice>,
    ) -> Result<SubmitOutcome, QuizError> {
        let outcome = self.session.submit_current_answer(choice)?;

        match outcome {
            SubmitOutcome::Advanced { answered, next } => {
                debug!(answered, next, ?choice, "question answered");
                self.renderer.hide_question(answered);
                self.renderer.show_question(next);
                self.renderer
                    .set_progress_text(&self.session.progress().label());
                self.renderer.disable_advance_control(true);
            }
            SubmitOutcome::Finished { answered } => {
                debug!(answered, ?choice, "last question answered");
                self.renderer.hide_question(answered);
                self.present_results()?;
            }
        }

        Ok(outcome)
    }

    fn present_results(&mut self) -> Result<(), QuizError> {
        let results = self.session.compute_results()?;

        self.renderer.set_progress_text("");

        for outcome in results.outcomes() {
            self.renderer.highlight_answer(
                outcome.question,
                outcome.correct.index(),
                AnswerMark::Correct,
            );
            if let Some(wrong) = outcome.wrong_choice() {
                self.renderer
                    .highlight_answer(outcome.question, wrong.index(), AnswerMark::Incorrect);
            }
        }
        self.renderer.reveal_all_results();

        let score = results.score();
        self.gauge.configure();
        self.gauge.render();
        self.gauge.set_value(score);

        let feedback = self.session.content().feedback().message(results.feedback());
        self.renderer.append_feedback(feedback);
        self.renderer.remove_advance_control();
        self.renderer
            .append_call_to_action(self.session.content().call_to_action());

        info!(
            correct = results.correct_count(),
            total = results.total(),
            score = %score,
            "quiz finished"
        );
        self.results = Some(results);
        Ok(())
    }

    /// Score the finished quiz without touching the renderer or gauge.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFinished` while questions remain.
    pub fn compute_results(&self) -> Result<QuizResults, QuizError> {
        self.session.compute_results()
    }

    /// Results presented when the quiz finished.
    #[must_use]
    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn gauge(&self) -> &G {
        &self.gauge
    }
}
