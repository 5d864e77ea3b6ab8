#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod quiz_service;
pub mod section;
pub mod shuffle;

pub use bank::{BUNDLED_BANK_JSON, load_bank_from_path, load_bank_from_str};
pub use error::{BankLoadError, QuizError};
pub use quiz_service::QuizService;
pub use section::{
    AnswerOutcome, IndexEntry, PAGE_SIZE, PageWindow, Pagination, ProgressMetrics,
    SectionController, SectionKeys, SectionPhase, SectionSnapshot, SectionStore,
    question_anchor,
};
pub use shuffle::{shuffle_section, shuffle_section_thread_rng};
