use std::sync::Arc;

use quiz_core::model::{AnswerMap, Question, SectionName, ShuffledQuestion};
use storage::repository::{KeyValueStore, StorageError};

use super::keys::SectionKeys;

/// Typed JSON persistence for one section's shuffle and answers.
///
/// Decode failures are reported as "not present"; only backend failures are
/// returned as errors.
#[derive(Clone)]
pub struct SectionStore {
    kv: Arc<dyn KeyValueStore>,
    section: SectionName,
    keys: SectionKeys,
}

impl SectionStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>, section: SectionName) -> Self {
        let keys = SectionKeys::new(&section);
        Self { kv, section, keys }
    }

    #[must_use]
    pub fn keys(&self) -> &SectionKeys {
        &self.keys
    }

    /// Read the persisted shuffle if it is usable for `questions`.
    ///
    /// A stored shuffle that does not parse, whose length differs from the
    /// bank, whose numbering is not `1..=n`, or whose answer letters do not
    /// point at the recorded correct text is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn read_shuffle(
        &self,
        questions: &[Question],
    ) -> Result<Option<Vec<ShuffledQuestion>>, StorageError> {
        let Some(raw) = self.kv.get(self.keys.shuffle()).await? else {
            return Ok(None);
        };

        let shuffled = match serde_json::from_str::<Vec<ShuffledQuestion>>(&raw) {
            Ok(shuffled) => shuffled,
            Err(err) => {
                tracing::warn!(section = %self.section, error = %err, "discarding unreadable shuffle");
                return Ok(None);
            }
        };

        if let Err(reason) = check_shuffle(&shuffled, questions) {
            tracing::warn!(section = %self.section, reason, "discarding stale shuffle");
            return Ok(None);
        }
        Ok(Some(shuffled))
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the shuffle cannot be encoded or stored.
    pub async fn write_shuffle(&self, shuffled: &[ShuffledQuestion]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(shuffled)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv.set(self.keys.shuffle(), &raw).await
    }

    /// Read the persisted answers; unreadable JSON is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn read_answers(&self) -> Result<Option<AnswerMap>, StorageError> {
        let Some(raw) = self.kv.get(self.keys.answers()).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<AnswerMap>(&raw) {
            Ok(answers) => Ok(Some(answers)),
            Err(err) => {
                tracing::warn!(section = %self.section, error = %err, "discarding unreadable answers");
                Ok(None)
            }
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the answers cannot be encoded or stored.
    pub async fn write_answers(&self, answers: &AnswerMap) -> Result<(), StorageError> {
        let raw = serde_json::to_string(answers)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv.set(self.keys.answers(), &raw).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the key cannot be removed.
    pub async fn clear_answers(&self) -> Result<(), StorageError> {
        self.kv.remove(self.keys.answers()).await
    }

    /// Delete old per-question keys of this section. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if keys cannot be listed or removed.
    pub async fn sweep_legacy(&self) -> Result<usize, StorageError> {
        let mut removed = 0;
        for key in self.kv.list_keys().await? {
            if self.keys.is_legacy(&key) {
                self.kv.remove(&key).await?;
                removed += 1;
            }
        }
        if removed > 0 {
            tracing::debug!(section = %self.section, removed, "swept legacy keys");
        }
        Ok(removed)
    }
}

fn check_shuffle(shuffled: &[ShuffledQuestion], questions: &[Question]) -> Result<(), &'static str> {
    if shuffled.len() != questions.len() {
        return Err("question count differs from bank");
    }
    for (expected, question) in (1_u32..).zip(shuffled) {
        if question.shuffled_number().value() != expected {
            return Err("shuffled numbers are not sequential");
        }
        if question.check_invariants().is_err() {
            return Err("answer letter does not match correct text");
        }
    }
    Ok(())
}
