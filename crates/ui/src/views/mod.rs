mod quiz;

#[cfg(test)]
mod view_smoke;

pub use quiz::{QuestionCard, QuizWidget, ScoreGaugeView};
