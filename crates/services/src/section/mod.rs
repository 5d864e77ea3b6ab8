mod controller;
mod keys;
mod pagination;
mod progress;
mod snapshot;
mod store;

// Public API of the section subsystem.
pub use controller::{AnswerOutcome, SectionController, SectionPhase};
pub use keys::SectionKeys;
pub use pagination::{PAGE_SIZE, PageWindow, Pagination};
pub use progress::ProgressMetrics;
pub use snapshot::{IndexEntry, SectionSnapshot, question_anchor};
pub use store::SectionStore;
