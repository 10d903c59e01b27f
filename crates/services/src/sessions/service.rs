use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::Clock;
use quiz_core::model::{Choice, Question, QuizContent, QuizResults};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Where a session is in its question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Waiting for an answer to the question at this index.
    Active(usize),
    /// Every question has a response. Terminal.
    Finished { completed_at: DateTime<Utc> },
}

/// What happened after a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answered question and the one now waiting for input.
    Advanced { answered: usize, next: usize },
    /// The last question was answered.
    Finished { answered: usize },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Steps through a quiz one question at a time, recording one response per
/// question in question order.
///
/// A response of `None` means the user advanced without choosing an answer;
/// it is kept and scored as incorrect.
pub struct QuizSession {
    content: QuizContent,
    responses: Vec<Option<Choice>>,
    state: QuizState,
    clock: Clock,
}

impl QuizSession {
    /// Start a session at the first question.
    ///
    /// `QuizContent` is validated on construction, so every session has at
    /// least one question with an in-range correct answer.
    #[must_use]
    pub fn new(content: QuizContent) -> Self {
        Self {
            content,
            responses: Vec::new(),
            state: QuizState::Active(0),
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn content(&self) -> &QuizContent {
        &self.content
    }

    #[must_use]
    pub fn responses(&self) -> &[Option<Choice>] {
        &self.responses
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.content.len()
    }

    /// Index of the question awaiting an answer, `None` once finished.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Active(index) => Some(index),
            QuizState::Finished { .. } => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index()
            .and_then(|index| self.content.question(index))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuizState::Finished { .. })
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            QuizState::Finished { completed_at } => Some(completed_at),
            QuizState::Active(_) => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::new(self.total_questions(), self.responses.len())
    }

    /// Check that `choice` is an answer of the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` if no question is waiting.
    /// Returns `QuizError::OutOfRangeChoice` if the question has no such answer.
    pub fn check_choice(&self, choice: Choice) -> Result<(), QuizError> {
        let index = self.current_index().ok_or(QuizError::Finished)?;
        let question = self.content.question(index).ok_or(QuizError::Finished)?;
        if question.accepts(choice) {
            Ok(())
        } else {
            Err(QuizError::OutOfRangeChoice {
                question: index,
                choice: choice.index(),
                answers: question.answers().len(),
            })
        }
    }

    /// Record the response to the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` if the quiz is already over.
    /// Returns `QuizError::OutOfRangeChoice` for a choice the question does not
    /// have; the session is left unchanged.
    pub fn submit_current_answer(
        &mut self,
        choice: Option<Choice>,
    ) -> Result<SubmitOutcome, QuizError> {
        let answered = self.current_index().ok_or(QuizError::Finished)?;
        if let Some(choice) = choice {
            self.check_choice(choice)?;
        }

        self.responses.push(choice);

        if self.responses.len() < self.total_questions() {
            let next = self.responses.len();
            self.state = QuizState::Active(next);
            Ok(SubmitOutcome::Advanced { answered, next })
        } else {
            self.state = QuizState::Finished {
                completed_at: self.clock.now(),
            };
            Ok(SubmitOutcome::Finished { answered })
        }
    }

    /// Score the finished quiz. Depends only on the content and the recorded
    /// responses, so repeated calls return equal results.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFinished` while questions remain.
    pub fn compute_results(&self) -> Result<QuizResults, QuizError> {
        let completed_at = self.completed_at().ok_or(QuizError::NotFinished)?;
        Ok(QuizResults::tally(
            &self.content,
            &self.responses,
            completed_at,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.content.len())
            .field("responses", &self.responses)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{FeedbackKind, FeedbackMessages, QuestionDraft, QuizContentDraft};
    use quiz_core::time::{fixed_clock, fixed_now};

    fn build_content(correct: &[i64]) -> QuizContent {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(i, c)| {
                QuestionDraft::new(
                    format!("Question {i}"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    Some(*c),
                )
            })
            .collect();
        QuizContentDraft::new(questions, FeedbackMessages::new("perfect", "imperfect"), "cta")
            .validate()
            .unwrap()
    }

    fn build_session(correct: &[i64]) -> QuizSession {
        QuizSession::new(build_content(correct)).with_clock(fixed_clock())
    }

    fn submit_all(session: &mut QuizSession, picks: &[usize]) {
        for pick in picks {
            session
                .submit_current_answer(Some(Choice::new(*pick)))
                .unwrap();
        }
    }

    #[test]
    fn new_session_starts_at_first_question() {
        let session = build_session(&[0, 1]);
        assert_eq!(session.state(), QuizState::Active(0));
        assert_eq!(session.current_index(), Some(0));
        assert!(session.responses().is_empty());
        assert_eq!(session.current_question().unwrap().body(), "Question 0");
    }

    #[test]
    fn session_advances_and_finishes_after_last_answer() {
        let mut session = build_session(&[0, 1, 2]);

        let first = session.submit_current_answer(Some(Choice::new(0))).unwrap();
        assert_eq!(first, SubmitOutcome::Advanced { answered: 0, next: 1 });
        assert_eq!(session.current_index(), Some(session.responses().len()));

        let second = session.submit_current_answer(Some(Choice::new(1))).unwrap();
        assert_eq!(second, SubmitOutcome::Advanced { answered: 1, next: 2 });

        let last = session.submit_current_answer(Some(Choice::new(2))).unwrap();
        assert_eq!(last, SubmitOutcome::Finished { answered: 2 });
        assert!(session.is_finished());
        assert_eq!(session.completed_at(), Some(fixed_now()));
        assert_eq!(session.current_index(), None);
    }

    #[test]
    fn submit_after_finish_is_rejected() {
        let mut session = build_session(&[0]);
        submit_all(&mut session, &[0]);

        let err = session.submit_current_answer(Some(Choice::new(0))).unwrap_err();
        assert!(matches!(err, QuizError::Finished));
        assert_eq!(session.responses().len(), 1);
    }

    #[test]
    fn out_of_range_choice_leaves_session_unchanged() {
        let mut session = build_session(&[0, 0]);
        let err = session.submit_current_answer(Some(Choice::new(4))).unwrap_err();
        assert!(matches!(
            err,
            QuizError::OutOfRangeChoice {
                question: 0,
                choice: 4,
                answers: 4
            }
        ));
        assert_eq!(session.state(), QuizState::Active(0));
        assert!(session.responses().is_empty());
    }

    #[test]
    fn no_selection_is_recorded_and_scored_wrong() {
        let mut session = build_session(&[0, 0]);
        session.submit_current_answer(None).unwrap();
        session.submit_current_answer(Some(Choice::new(0))).unwrap();

        assert_eq!(session.responses(), &[None, Some(Choice::new(0))]);
        let results = session.compute_results().unwrap();
        assert_eq!(results.correct_count(), 1);
        assert_eq!(results.score().to_string(), "50.0");
    }

    #[test]
    fn results_require_finished_session() {
        let mut session = build_session(&[0, 0]);
        session.submit_current_answer(Some(Choice::new(0))).unwrap();
        assert!(matches!(
            session.compute_results().unwrap_err(),
            QuizError::NotFinished
        ));
    }

    #[test]
    fn all_correct_scores_a_whole_hundred() {
        let mut session = build_session(&[0, 1, 2]);
        submit_all(&mut session, &[0, 1, 2]);

        let results = session.compute_results().unwrap();
        assert!(results.score().is_perfect());
        assert_eq!(results.score().to_string(), "100");
        assert_eq!(results.feedback(), FeedbackKind::Perfect);
        assert_eq!(
            session.content().feedback().message(results.feedback()),
            "perfect"
        );
    }

    #[test]
    fn all_wrong_scores_a_whole_zero() {
        let mut session = build_session(&[0, 0]);
        submit_all(&mut session, &[1, 1]);

        let results = session.compute_results().unwrap();
        assert_eq!(results.score().to_string(), "0");
        assert_eq!(results.feedback(), FeedbackKind::Imperfect);
    }

    #[test]
    fn three_of_four_keeps_one_decimal() {
        let mut session = build_session(&[0, 1, 2, 3]);
        submit_all(&mut session, &[0, 1, 2, 0]);

        let results = session.compute_results().unwrap();
        assert_eq!(results.correct_count(), 3);
        assert_eq!(results.score().to_string(), "75.0");
        assert_eq!(results.feedback(), FeedbackKind::Imperfect);
    }

    #[test]
    fn compute_results_is_repeatable() {
        let mut session = build_session(&[1, 1, 0]);
        submit_all(&mut session, &[1, 0, 0]);

        let first = session.compute_results().unwrap();
        let second = session.compute_results().unwrap();
        assert_eq!(first, second);
    }
}
