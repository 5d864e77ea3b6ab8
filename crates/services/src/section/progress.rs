use quiz_core::model::{AnswerMap, ShuffledQuestion};

/// Aggregated view of section progress, useful for UI.
///
/// Indexes into `attempted` / `correct` follow the shuffled order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressMetrics {
    pub total: usize,
    pub attempted: Vec<bool>,
    pub correct: Vec<bool>,
    pub attempted_count: usize,
    pub correct_count: usize,
    /// `100 × attempted / total`, unrounded.
    pub progress_percent: f64,
    /// `100 × correct / total`, rounded half up.
    pub score_percent: u32,
}

impl ProgressMetrics {
    #[must_use]
    pub fn compute(questions: &[ShuffledQuestion], answers: &AnswerMap) -> Self {
        let recorded: Vec<_> = questions
            .iter()
            .map(|question| answers.get(question.shuffled_number()))
            .collect();
        let attempted: Vec<bool> = recorded.iter().map(Option::is_some).collect();
        let correct: Vec<bool> = questions
            .iter()
            .zip(&recorded)
            .map(|(question, letter)| letter.is_some_and(|letter| question.is_correct(letter)))
            .collect();

        let total = questions.len();
        let attempted_count = attempted.iter().filter(|hit| **hit).count();
        let correct_count = correct.iter().filter(|hit| **hit).count();

        Self {
            total,
            attempted,
            correct,
            attempted_count,
            correct_count,
            progress_percent: percent(attempted_count, total),
            score_percent: rounded_percent(correct_count, total),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.attempted_count == self.total
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}

fn rounded_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (200 * part + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}
