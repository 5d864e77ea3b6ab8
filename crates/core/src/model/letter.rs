use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Options are labelled `A` through `Z`.
pub const MAX_OPTIONS: usize = 26;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LetterError {
    #[error("answer letter must be a single letter A-Z, got {raw:?}")]
    Invalid { raw: String },

    #[error("option index {index} has no letter")]
    OutOfRange { index: usize },
}

/// Letter naming one option of a question (`A` is the first option).
///
/// Stored as the 0-based option index; displayed and serialized as the
/// uppercase letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnswerLetter(u8);

impl AnswerLetter {
    /// # Errors
    ///
    /// Returns `LetterError::OutOfRange` if the index is beyond `Z`.
    pub fn from_index(index: usize) -> Result<Self, LetterError> {
        if index >= MAX_OPTIONS {
            return Err(LetterError::OutOfRange { index });
        }
        u8::try_from(index)
            .map(Self)
            .map_err(|_| LetterError::OutOfRange { index })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn as_char(&self) -> char {
        char::from(b'A' + self.0)
    }

    /// Letters for the first `count` options, in order.
    pub fn sequence(count: usize) -> impl Iterator<Item = Self> {
        (0..count.min(MAX_OPTIONS)).filter_map(|index| Self::from_index(index).ok())
    }
}

impl FromStr for AnswerLetter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => {
                let upper = ch.to_ascii_uppercase() as u8;
                Ok(Self(upper - b'A'))
            }
            _ => Err(LetterError::Invalid { raw: s.to_string() }),
        }
    }
}

impl TryFrom<String> for AnswerLetter {
    type Error = LetterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AnswerLetter> for String {
    fn from(value: AnswerLetter) -> Self {
        value.as_char().to_string()
    }
}

impl fmt::Debug for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnswerLetter({})", self.as_char())
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("b".parse::<AnswerLetter>().unwrap().index(), 1);
        assert_eq!(" C ".parse::<AnswerLetter>().unwrap().index(), 2);
    }

    #[test]
    fn rejects_non_letters() {
        assert!("".parse::<AnswerLetter>().is_err());
        assert!("AB".parse::<AnswerLetter>().is_err());
        assert!("1".parse::<AnswerLetter>().is_err());
    }

    #[test]
    fn index_beyond_z_is_rejected() {
        assert_eq!(AnswerLetter::from_index(25).unwrap().as_char(), 'Z');
        assert_eq!(
            AnswerLetter::from_index(26),
            Err(LetterError::OutOfRange { index: 26 })
        );
    }

    #[test]
    fn serializes_as_letter_string() {
        let letter = AnswerLetter::from_index(3).unwrap();
        assert_eq!(serde_json::to_string(&letter).unwrap(), "\"D\"");
        let back: AnswerLetter = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(back, letter);
    }

    #[test]
    fn sequence_labels_options_from_a() {
        let labels: String = AnswerLetter::sequence(4).map(|l| l.as_char()).collect();
        assert_eq!(labels, "ABCD");
    }
}
