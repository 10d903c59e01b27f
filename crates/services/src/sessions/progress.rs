/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_finished: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn new(total: usize, answered: usize) -> Self {
        let answered = answered.min(total);
        Self {
            total,
            answered,
            remaining: total - answered,
            is_finished: answered == total,
        }
    }

    /// Counter shown above the active question, e.g. `"2/5"`; empty when finished.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_finished {
            String::new()
        } else {
            format!("{}/{}", self.answered + 1, self.total)
        }
    }
}
