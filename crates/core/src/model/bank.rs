use std::sync::Arc;

use thiserror::Error;

use crate::model::ids::{SectionName, SectionNameError};
use crate::model::question::{Question, QuestionError, QuestionRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank has no sections")]
    Empty,

    #[error(transparent)]
    SectionName(#[from] SectionNameError),

    #[error("duplicate section {0:?}")]
    DuplicateSection(String),

    #[error("section {section:?}: {source}")]
    InvalidQuestion {
        section: String,
        #[source]
        source: QuestionError,
    },
}

/// A named group of questions in bank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: SectionName,
    questions: Arc<[Question]>,
}

impl Section {
    #[must_use]
    pub fn new(name: SectionName, questions: Vec<Question>) -> Self {
        Self {
            name,
            questions: questions.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &SectionName {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Shared handle to the questions, for controllers that outlive a borrow.
    #[must_use]
    pub fn shared_questions(&self) -> Arc<[Question]> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Read-only collection of sections, in the order the bank lists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    sections: Vec<Section>,
}

impl QuestionBank {
    /// Validate raw bank entries.
    ///
    /// Sections may be empty; an empty section is a valid zero-question quiz.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if there are no sections, a section name is blank
    /// or repeated, or any question fails validation.
    pub fn from_records(
        entries: impl IntoIterator<Item = (String, Vec<QuestionRecord>)>,
    ) -> Result<Self, BankError> {
        let mut sections: Vec<Section> = Vec::new();
        for (raw_name, records) in entries {
            let name = SectionName::new(raw_name.clone())?;
            if sections.iter().any(|section| section.name == name) {
                return Err(BankError::DuplicateSection(raw_name));
            }
            let questions = records
                .into_iter()
                .map(QuestionRecord::into_question)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| BankError::InvalidQuestion {
                    section: raw_name.clone(),
                    source,
                })?;
            sections.push(Section::new(name, questions));
        }

        if sections.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { sections })
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.name.as_str() == name)
    }

    /// First section in bank order.
    #[must_use]
    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &SectionName> {
        self.sections.iter().map(Section::name)
    }
}
