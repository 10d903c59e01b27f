use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("cannot score a quiz without questions")]
    NoQuestions,

    #[error("correct answers ({correct}) exceed question count ({total})")]
    CountMismatch { correct: usize, total: usize },
}

/// Percentage of correct answers, rounded half-up to one decimal place.
///
/// Stored in tenths of a percent so equality is exact. A full or empty score
/// displays as a bare integer (`"100"`, `"0"`); anything else keeps its single
/// decimal (`"75.0"`, `"66.7"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScorePercent {
    tenths: u32,
}

impl ScorePercent {
    const FULL_TENTHS: u32 = 1000;

    /// # Errors
    ///
    /// Returns `ScoreError::NoQuestions` if `total` is zero.
    /// Returns `ScoreError::CountMismatch` if `correct > total`.
    pub fn from_counts(correct: usize, total: usize) -> Result<Self, ScoreError> {
        if total == 0 {
            return Err(ScoreError::NoQuestions);
        }
        if correct > total {
            return Err(ScoreError::CountMismatch { correct, total });
        }

        let correct = correct as u128;
        let total = total as u128;
        // round(correct / total * 1000), half-up, in integer arithmetic
        let tenths = (correct * 2000 + total) / (2 * total);

        Ok(Self {
            tenths: u32::try_from(tenths).unwrap_or(Self::FULL_TENTHS),
        })
    }

    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    #[must_use]
    pub fn tenths(self) -> u32 {
        self.tenths
    }

    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.tenths == Self::FULL_TENTHS
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.tenths == 0
    }

    /// True when the score displays without a decimal part.
    #[must_use]
    pub fn is_whole_display(self) -> bool {
        self.is_perfect() || self.is_zero()
    }

    /// Fraction of a full score in `0.0..=1.0`, for gauges.
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.tenths) / f64::from(Self::FULL_TENTHS)
    }
}

impl fmt::Display for ScorePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole_display() {
            write!(f, "{}", self.tenths / 10)
        } else {
            write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
        }
    }
}
