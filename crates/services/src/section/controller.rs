use std::sync::Arc;

use quiz_core::model::{
    AnswerLetter, AnswerMap, Question, Section, SectionName, ShuffledNumber, ShuffledQuestion,
};
use storage::repository::{KeyValueStore, StorageError};

use crate::shuffle::shuffle_section_thread_rng;

use super::pagination::Pagination;
use super::progress::ProgressMetrics;
use super::snapshot::{SectionSnapshot, question_anchor};
use super::store::SectionStore;

/// Lifecycle of a section controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPhase {
    Uninitialized,
    Loaded,
    Restarting,
}

/// Result of [`SectionController::record_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Recorded { correct: bool },
    /// The question already had an answer; the first one stands.
    AlreadyAnswered,
    UnknownQuestion,
    /// The letter does not name an option of the question.
    InvalidLetter,
}

/// Per-section quiz state: the current shuffle, recorded answers and the
/// index page.
///
/// Persistence is best-effort. Storage failures are logged and reflected in
/// `storage_healthy`; the in-memory state stays authoritative.
#[derive(Clone)]
pub struct SectionController {
    section: SectionName,
    questions: Arc<[Question]>,
    store: SectionStore,
    phase: SectionPhase,
    shuffled: Arc<[ShuffledQuestion]>,
    answers: AnswerMap,
    pagination: Pagination,
    reset_count: u64,
    storage_healthy: bool,
}

impl SectionController {
    #[must_use]
    pub fn new(section: &Section, kv: Arc<dyn KeyValueStore>) -> Self {
        let store = SectionStore::new(kv, section.name().clone());
        Self {
            section: section.name().clone(),
            questions: section.shared_questions(),
            store,
            phase: SectionPhase::Uninitialized,
            shuffled: Arc::from(Vec::new()),
            answers: AnswerMap::new(),
            pagination: Pagination::new(0),
            reset_count: 0,
            storage_healthy: true,
        }
    }

    /// Restore the persisted shuffle and answers, creating a shuffle when none
    /// is usable.
    pub async fn load(&mut self) {
        let mut healthy = true;

        let persisted = self.store.read_shuffle(&self.questions).await;
        let persisted = self.note(&mut healthy, "read shuffle", persisted).flatten();
        let (shuffled, answers) = if let Some(shuffled) = persisted {
            let answers = self.store.read_answers().await;
            let answers = self
                .note(&mut healthy, "read answers", answers)
                .flatten()
                .unwrap_or_default();
            (shuffled, answers)
        } else {
            let fresh = self.fresh_shuffle();
            let written = self.store.write_shuffle(&fresh).await;
            self.note(&mut healthy, "write shuffle", written);
            // Answers are keyed by shuffled number and only valid for their shuffle.
            let cleared = self.store.clear_answers().await;
            self.note(&mut healthy, "clear answers", cleared);
            tracing::debug!(section = %self.section, questions = fresh.len(), "created shuffle");
            (fresh, AnswerMap::new())
        };

        self.shuffled = shuffled.into();
        self.answers = answers;
        self.pagination = Pagination::new(self.shuffled.len());
        self.storage_healthy = healthy;
        self.phase = SectionPhase::Loaded;
        tracing::debug!(
            section = %self.section,
            answered = self.answers.len(),
            "section loaded"
        );
    }

    /// Record the first answer for a question and persist the answer map.
    ///
    /// Later answers for the same question are ignored.
    pub async fn record_answer(
        &mut self,
        number: ShuffledNumber,
        letter: AnswerLetter,
    ) -> AnswerOutcome {
        let Some(question) = self.question(number) else {
            return AnswerOutcome::UnknownQuestion;
        };
        if !question.has_option(letter) {
            return AnswerOutcome::InvalidLetter;
        }
        let correct = question.is_correct(letter);
        if !self.answers.record(number, letter) {
            return AnswerOutcome::AlreadyAnswered;
        }

        let written = self.store.write_answers(&self.answers).await;
        self.storage_healthy = self.check("write answers", written).is_some();
        tracing::debug!(section = %self.section, %number, %letter, correct, "answer recorded");
        AnswerOutcome::Recorded { correct }
    }

    /// Discard the shuffle and answers and start the section over.
    pub async fn restart(&mut self) {
        self.phase = SectionPhase::Restarting;
        let mut healthy = true;

        let swept = self.store.sweep_legacy().await;
        self.note(&mut healthy, "sweep legacy keys", swept);

        let fresh = self.fresh_shuffle();
        let written = self.store.write_shuffle(&fresh).await;
        self.note(&mut healthy, "write shuffle", written);

        let cleared = self.store.clear_answers().await;
        self.note(&mut healthy, "clear answers", cleared);

        self.shuffled = fresh.into();
        self.answers.clear();
        self.pagination = Pagination::new(self.shuffled.len());
        self.reset_count += 1;
        self.storage_healthy = healthy;
        self.phase = SectionPhase::Loaded;
        tracing::info!(section = %self.section, reset_count = self.reset_count, "section restarted");
    }

    pub fn next_page(&mut self) {
        self.pagination.next();
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    /// Anchor of the card to scroll to. The index page is left unchanged.
    #[must_use]
    pub fn jump_to(&self, number: ShuffledNumber) -> Option<String> {
        self.question(number)
            .map(|question| question_anchor(&self.section, question.shuffled_number()))
    }

    #[must_use]
    pub fn snapshot(&self) -> SectionSnapshot {
        SectionSnapshot {
            section: self.section.clone(),
            phase: self.phase,
            questions: Arc::clone(&self.shuffled),
            answers: self.answers.clone(),
            metrics: self.metrics(),
            page: self.pagination.window(),
            reset_count: self.reset_count,
            storage_healthy: self.storage_healthy,
        }
    }

    #[must_use]
    pub fn metrics(&self) -> ProgressMetrics {
        ProgressMetrics::compute(&self.shuffled, &self.answers)
    }

    #[must_use]
    pub fn section(&self) -> &SectionName {
        &self.section
    }

    #[must_use]
    pub fn phase(&self) -> SectionPhase {
        self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[ShuffledQuestion] {
        &self.shuffled
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    #[must_use]
    pub fn reset_count(&self) -> u64 {
        self.reset_count
    }

    #[must_use]
    pub fn storage_healthy(&self) -> bool {
        self.storage_healthy
    }

    fn question(&self, number: ShuffledNumber) -> Option<&ShuffledQuestion> {
        let question = self.shuffled.get(number.position()?)?;
        (question.shuffled_number() == number).then_some(question)
    }

    fn fresh_shuffle(&self) -> Vec<ShuffledQuestion> {
        shuffle_section_thread_rng(&self.questions).unwrap_or_else(|err| {
            tracing::error!(section = %self.section, error = %err, "shuffle failed");
            Vec::new()
        })
    }

    fn check<T>(&self, action: &str, result: Result<T, StorageError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(section = %self.section, action, error = %err, "storage unavailable");
                None
            }
        }
    }

    fn note<T>(&self, healthy: &mut bool, action: &str, result: Result<T, StorageError>) -> Option<T> {
        let value = self.check(action, result);
        *healthy &= value.is_some();
        value
    }
}
