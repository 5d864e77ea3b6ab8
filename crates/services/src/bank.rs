//! Question bank loading.
//!
//! The bank is a JSON object mapping section names to question lists. Section
//! order is the key order of the document, so the object is read entry by
//! entry instead of through a hash map.

use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use quiz_core::model::{QuestionBank, QuestionRecord};

use crate::error::BankLoadError;

/// Sample bank compiled into the binary, used when no bank path is configured.
pub const BUNDLED_BANK_JSON: &str = include_str!("../data/quiz_bank.json");

struct OrderedSections(Vec<(String, Vec<QuestionRecord>)>);

impl<'de> Deserialize<'de> for OrderedSections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = OrderedSections;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping section names to question lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<QuestionRecord>>()? {
                    entries.push(entry);
                }
                Ok(OrderedSections(entries))
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}

/// Parse and validate a bank from its JSON text.
///
/// # Errors
///
/// Returns `BankLoadError::Json` for malformed JSON and
/// `BankLoadError::Invalid` when a section or question fails validation.
pub fn load_bank_from_str(json: &str) -> Result<QuestionBank, BankLoadError> {
    let OrderedSections(entries) = serde_json::from_str(json)?;
    let bank = QuestionBank::from_records(entries)?;
    tracing::debug!(sections = bank.sections().len(), "loaded question bank");
    Ok(bank)
}

/// Read a bank from a JSON file.
///
/// # Errors
///
/// Returns `BankLoadError::Io` if the file cannot be read, otherwise the
/// errors of [`load_bank_from_str`].
pub fn load_bank_from_path(path: impl AsRef<Path>) -> Result<QuestionBank, BankLoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| BankLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_bank_from_str(&json)
}
