use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::letter::{AnswerLetter, LetterError, MAX_OPTIONS};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {number}: prompt cannot be empty")]
    EmptyPrompt { number: u32 },

    #[error("question {number}: needs at least 2 options, got {count}")]
    TooFewOptions { number: u32, count: usize },

    #[error("question {number}: at most 26 options are supported, got {count}")]
    TooManyOptions { number: u32, count: usize },

    #[error("question {number}: {source}")]
    InvalidLetter {
        number: u32,
        #[source]
        source: LetterError,
    },

    #[error("question {number}: answer {letter} does not name one of {count} options")]
    AnswerOutOfRange {
        number: u32,
        letter: AnswerLetter,
        count: usize,
    },

    #[error("question {number}: answer {letter} points at {found:?}, expected {expected:?}")]
    AnswerTextMismatch {
        number: u32,
        letter: AnswerLetter,
        expected: String,
        found: String,
    },
}

//
// ─── BANK RECORD ───────────────────────────────────────────────────────────────
//

/// Question as written in the question bank JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub number: u32,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
}

impl QuestionRecord {
    /// Validate the record into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the answer letter is malformed or the
    /// question shape is invalid.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        let number = self.number;
        let answer_letter = self
            .answer
            .parse::<AnswerLetter>()
            .map_err(|source| QuestionError::InvalidLetter { number, source })?;
        Question::new(
            number,
            self.question,
            self.options,
            answer_letter,
            self.explanation,
        )
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question from the bank. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    number: u32,
    text: String,
    options: Vec<String>,
    answer_letter: AnswerLetter,
    explanation: String,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, there are fewer than
    /// two or more than 26 options, or the answer letter has no option.
    pub fn new(
        number: u32,
        text: impl Into<String>,
        options: Vec<String>,
        answer_letter: AnswerLetter,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { number });
        }
        validate_options(number, &options, answer_letter)?;

        Ok(Self {
            number,
            text,
            options,
            answer_letter,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer_letter(&self) -> AnswerLetter {
        self.answer_letter
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        // `new` guarantees the letter resolves.
        &self.options[self.answer_letter.index()]
    }
}

pub(crate) fn validate_options(
    number: u32,
    options: &[String],
    answer_letter: AnswerLetter,
) -> Result<(), QuestionError> {
    let count = options.len();
    if count < 2 {
        return Err(QuestionError::TooFewOptions { number, count });
    }
    if count > MAX_OPTIONS {
        return Err(QuestionError::TooManyOptions { number, count });
    }
    if answer_letter.index() >= count {
        return Err(QuestionError::AnswerOutOfRange {
            number,
            letter: answer_letter,
            count,
        });
    }
    Ok(())
}
