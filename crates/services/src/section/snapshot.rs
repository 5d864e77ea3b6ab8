use std::sync::Arc;

use quiz_core::model::{AnswerLetter, AnswerMap, SectionName, ShuffledNumber, ShuffledQuestion};

use super::controller::SectionPhase;
use super::pagination::PageWindow;
use super::progress::ProgressMetrics;

/// DOM id of a question card, used for jump-to-question scrolling.
#[must_use]
pub fn question_anchor(section: &SectionName, number: ShuffledNumber) -> String {
    format!("question-{}-{number}", section.slug())
}

/// One entry of the paged question index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub number: ShuffledNumber,
    pub attempted: bool,
}

/// Immutable state of a section after an action.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSnapshot {
    pub section: SectionName,
    pub phase: SectionPhase,
    pub questions: Arc<[ShuffledQuestion]>,
    pub answers: AnswerMap,
    pub metrics: ProgressMetrics,
    pub page: PageWindow,
    /// Incremented on every restart; views key their cards on it.
    pub reset_count: u64,
    /// False when the last storage operation failed; progress may not survive a restart.
    pub storage_healthy: bool,
}

impl SectionSnapshot {
    #[must_use]
    pub fn selected(&self, number: ShuffledNumber) -> Option<AnswerLetter> {
        self.answers.get(number)
    }

    /// Index entries on the current page.
    #[must_use]
    pub fn page_entries(&self) -> Vec<IndexEntry> {
        let range = self.page.start..self.page.end;
        self.questions
            .get(range.clone())
            .unwrap_or_default()
            .iter()
            .zip(range)
            .map(|(question, index)| IndexEntry {
                number: question.shuffled_number(),
                attempted: self.metrics.attempted.get(index).copied().unwrap_or(false),
            })
            .collect()
    }

    #[must_use]
    pub fn anchor(&self, number: ShuffledNumber) -> String {
        question_anchor(&self.section, number)
    }
}
