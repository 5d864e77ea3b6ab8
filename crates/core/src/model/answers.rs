use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::ids::ShuffledNumber;
use crate::model::letter::AnswerLetter;

/// Answers recorded for one section, keyed by shuffled number.
///
/// Serialized as a JSON object whose keys are the shuffled numbers as
/// strings (`{"1":"B","4":"A"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<ShuffledNumber, AnswerLetter>);

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer unless the question already has one.
    ///
    /// Returns `false` (and leaves the stored letter untouched) when an
    /// answer already exists.
    pub fn record(&mut self, number: ShuffledNumber, letter: AnswerLetter) -> bool {
        if self.0.contains_key(&number) {
            return false;
        }
        self.0.insert(number, letter);
        true
    }

    #[must_use]
    pub fn get(&self, number: ShuffledNumber) -> Option<AnswerLetter> {
        self.0.get(&number).copied()
    }

    #[must_use]
    pub fn contains(&self, number: ShuffledNumber) -> bool {
        self.0.contains_key(&number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShuffledNumber, AnswerLetter)> + '_ {
        self.0.iter().map(|(number, letter)| (*number, *letter))
    }
}

impl FromIterator<(ShuffledNumber, AnswerLetter)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (ShuffledNumber, AnswerLetter)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (number, letter) in iter {
            map.record(number, letter);
        }
        map
    }
}
