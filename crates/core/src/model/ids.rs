use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of an answer within a question's answer list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Choice(usize);

impl Choice {
    /// Creates a new `Choice`
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying answer index
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Choice({})", self.0)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Choice {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl FromStr for Choice {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<usize>().map(Self)
    }
}
