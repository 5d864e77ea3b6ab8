use quiz_core::model::SectionName;

const SHUFFLE_PREFIX: &str = "section-shuffle-";
const ANSWERS_PREFIX: &str = "section-answers-";

/// Storage keys owned by one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionKeys {
    shuffle: String,
    answers: String,
    legacy_prefix: String,
}

impl SectionKeys {
    #[must_use]
    pub fn new(section: &SectionName) -> Self {
        Self {
            shuffle: format!("{SHUFFLE_PREFIX}{section}"),
            answers: format!("{ANSWERS_PREFIX}{section}"),
            legacy_prefix: format!("section-{section}-"),
        }
    }

    /// `section-shuffle-<section>`
    #[must_use]
    pub fn shuffle(&self) -> &str {
        &self.shuffle
    }

    /// `section-answers-<section>`
    #[must_use]
    pub fn answers(&self) -> &str {
        &self.answers
    }

    /// True for old per-question keys (`section-<section>-*`) that restart sweeps.
    ///
    /// This section's own shuffle and answer keys never match, even when the
    /// section name makes the prefixes overlap (a section called `shuffle-X`).
    #[must_use]
    pub fn is_legacy(&self, key: &str) -> bool {
        key.starts_with(&self.legacy_prefix) && key != self.shuffle && key != self.answers
    }
}
