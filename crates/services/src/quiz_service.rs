use std::sync::Arc;

use quiz_core::model::{QuestionBank, Section, SectionName};
use storage::repository::Storage;

use crate::error::QuizError;
use crate::section::SectionController;

/// Entry point for the UI: owns the question bank and the persistence backend.
#[derive(Clone)]
pub struct QuizService {
    bank: Arc<QuestionBank>,
    storage: Storage,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: QuestionBank, storage: Storage) -> Self {
        Self {
            bank: Arc::new(bank),
            storage,
        }
    }

    /// Service backed by an in-memory store.
    #[must_use]
    pub fn in_memory(bank: QuestionBank) -> Self {
        Self::new(bank, Storage::in_memory())
    }

    /// Service backed by a migrated `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Sqlite` if the database cannot be opened or migrated.
    pub async fn sqlite(db_url: &str, bank: QuestionBank) -> Result<Self, QuizError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(bank, storage))
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn section_names(&self) -> impl Iterator<Item = &SectionName> {
        self.bank.section_names()
    }

    /// First section of the bank, shown when no section is selected.
    #[must_use]
    pub fn default_section(&self) -> Option<&SectionName> {
        self.bank.first().map(Section::name)
    }

    /// Build a controller for `name` and restore its persisted state.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownSection` if the bank has no such section.
    pub async fn open_section(&self, name: &str) -> Result<SectionController, QuizError> {
        let section = self
            .bank
            .section(name)
            .ok_or_else(|| QuizError::UnknownSection(name.to_owned()))?;
        let mut controller = SectionController::new(section, Arc::clone(&self.storage.kv));
        controller.load().await;
        Ok(controller)
    }
}
