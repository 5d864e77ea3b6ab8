use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 1-based position of a question inside the current shuffle of its section.
///
/// This is the identifier used for answer keys, UI keys and navigation. It is
/// reassigned every time a section is reshuffled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShuffledNumber(u32);

impl ShuffledNumber {
    /// Creates a new `ShuffledNumber`
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Number for the question at the given 0-based position.
    ///
    /// Returns `None` if the position does not fit in `u32`.
    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        u32::try_from(position)
            .ok()
            .and_then(|value| value.checked_add(1))
            .map(Self)
    }

    /// Returns the underlying value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// 0-based position this number refers to.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.0
            .checked_sub(1)
            .and_then(|value| usize::try_from(value).ok())
    }
}

impl fmt::Debug for ShuffledNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShuffledNumber({})", self.0)
    }
}

impl fmt::Display for ShuffledNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `ShuffledNumber` from a string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse ShuffledNumber from {raw:?}")]
pub struct ParseShuffledNumberError {
    raw: String,
}

impl FromStr for ShuffledNumber {
    type Err = ParseShuffledNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(ParseShuffledNumberError { raw: s.to_string() }),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionNameError {
    #[error("section name cannot be empty")]
    Empty,
}

/// Name of a question bank section.
///
/// The name is used verbatim inside persisted storage keys, so it is kept
/// exactly as written in the bank (only blank names are rejected).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionName(String);

impl SectionName {
    /// # Errors
    ///
    /// Returns `SectionNameError::Empty` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, SectionNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SectionNameError::Empty);
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase, dash-separated form safe for DOM ids.
    #[must_use]
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.0.len());
        let mut last_dash = true;
        for ch in self.0.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        if slug.is_empty() {
            slug.push_str("section");
        }
        slug
    }
}

impl TryFrom<String> for SectionName {
    type Error = SectionNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionName> for String {
    fn from(value: SectionName) -> Self {
        value.0
    }
}

impl AsRef<str> for SectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionName({:?})", self.0)
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
