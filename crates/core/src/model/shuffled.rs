use serde::{Deserialize, Serialize};

use crate::model::ids::ShuffledNumber;
use crate::model::letter::AnswerLetter;
use crate::model::question::{Question, QuestionError, validate_options};

/// A question as presented in one shuffle of its section.
///
/// Options are reordered and `answer_letter` points at the new position of
/// the correct option. The serialized shape is the persisted format of a
/// section shuffle, so field names are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffledQuestion {
    number: u32,
    #[serde(rename = "question")]
    text: String,
    options: Vec<String>,
    #[serde(rename = "answer")]
    answer_letter: AnswerLetter,
    #[serde(default)]
    explanation: String,
    correct_answer_text: String,
    shuffled_number: ShuffledNumber,
}

impl ShuffledQuestion {
    /// Build the shuffled form of `question` given its reordered options.
    ///
    /// The correct option is located by text: the first option equal to the
    /// original correct text becomes the answer.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::AnswerTextMismatch` if the correct text is no
    /// longer among `options`, or a shape error if `options` is invalid.
    pub fn from_reordered(
        question: &Question,
        options: Vec<String>,
        shuffled_number: ShuffledNumber,
    ) -> Result<Self, QuestionError> {
        let correct = question.correct_option();
        let Some(index) = options.iter().position(|option| option == correct) else {
            return Err(QuestionError::AnswerTextMismatch {
                number: question.number(),
                letter: question.answer_letter(),
                expected: correct.to_string(),
                found: String::new(),
            });
        };
        let answer_letter = AnswerLetter::from_index(index).map_err(|source| {
            QuestionError::InvalidLetter {
                number: question.number(),
                source,
            }
        })?;

        let shuffled = Self {
            number: question.number(),
            text: question.text().to_string(),
            options,
            answer_letter,
            explanation: question.explanation().to_string(),
            correct_answer_text: correct.to_string(),
            shuffled_number,
        };
        shuffled.check_invariants()?;
        Ok(shuffled)
    }

    /// Verify that `answer_letter` names an option holding `correct_answer_text`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` describing the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), QuestionError> {
        validate_options(self.number, &self.options, self.answer_letter)?;
        let found = &self.options[self.answer_letter.index()];
        if *found != self.correct_answer_text {
            return Err(QuestionError::AnswerTextMismatch {
                number: self.number,
                letter: self.answer_letter,
                expected: self.correct_answer_text.clone(),
                found: found.clone(),
            });
        }
        Ok(())
    }

    /// Original 1-based number in the bank.
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

    #[must_use]
    pub fn correct_answer_text(&self) -> &str {
        &self.correct_answer_text
    }

    #[must_use]
    pub fn shuffled_number(&self) -> ShuffledNumber {
        self.shuffled_number
    }

    /// True when `letter` names one of this question's options.
    #[must_use]
    pub fn has_option(&self, letter: AnswerLetter) -> bool {
        letter.index() < self.options.len()
    }

    #[must_use]
    pub fn is_correct(&self, letter: AnswerLetter) -> bool {
        letter == self.answer_letter
    }
}
