use chrono::{DateTime, Utc};

use crate::model::ids::Choice;
use crate::model::quiz::{FeedbackKind, QuizContent};
use crate::model::score::{ScoreError, ScorePercent};

/// How a single question was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub question: usize,
    pub response: Option<Choice>,
    pub correct: Choice,
}

impl QuestionOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.response == Some(self.correct)
    }

    /// The submitted answer when it was wrong; `None` for right or missing answers.
    #[must_use]
    pub fn wrong_choice(&self) -> Option<Choice> {
        self.response.filter(|choice| *choice != self.correct)
    }
}

/// Scored outcome of a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    outcomes: Vec<QuestionOutcome>,
    correct_count: usize,
    score: ScorePercent,
    feedback: FeedbackKind,
    completed_at: DateTime<Utc>,
}

impl QuizResults {
    /// Score `responses` against `content`, pairing them by position.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::CountMismatch` if there are more responses than questions.
    pub fn tally(
        content: &QuizContent,
        responses: &[Option<Choice>],
        completed_at: DateTime<Utc>,
    ) -> Result<Self, ScoreError> {
        let total = content.len();
        if responses.len() > total {
            return Err(ScoreError::CountMismatch {
                correct: responses.len(),
                total,
            });
        }

        let outcomes: Vec<_> = content
            .questions()
            .iter()
            .enumerate()
            .map(|(question, q)| QuestionOutcome {
                question,
                response: responses.get(question).copied().flatten(),
                correct: q.correct_answer(),
            })
            .collect();

        let correct_count = outcomes.iter().filter(|o| o.is_correct()).count();
        let score = ScorePercent::from_counts(correct_count, total)?;

        Ok(Self {
            outcomes,
            correct_count,
            score,
            feedback: FeedbackKind::for_score(score),
            completed_at,
        })
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn score(&self) -> ScorePercent {
        self.score
    }

    #[must_use]
    pub fn feedback(&self) -> FeedbackKind {
        self.feedback
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
