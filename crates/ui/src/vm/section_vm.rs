use quiz_core::model::{AnswerLetter, ShuffledNumber};
use services::{AnswerOutcome, QuizError, QuizService, SectionController, SectionSnapshot};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionIntent {
    Answer {
        number: ShuffledNumber,
        letter: AnswerLetter,
    },
    Restart,
    NextPage,
    PrevPage,
    JumpTo(ShuffledNumber),
}

/// What the view should do after an intent was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionEffect {
    None,
    ScrollTo(String),
}

pub struct SectionVm {
    controller: SectionController,
}

impl SectionVm {
    #[must_use]
    pub fn new(controller: SectionController) -> Self {
        Self { controller }
    }

    #[must_use]
    pub fn snapshot(&self) -> SectionSnapshot {
        self.controller.snapshot()
    }

    /// Page moves and jumps; storage-backed intents are ignored here.
    pub fn apply_sync(&mut self, intent: SectionIntent) -> SectionEffect {
        match intent {
            SectionIntent::NextPage => self.controller.next_page(),
            SectionIntent::PrevPage => self.controller.prev_page(),
            SectionIntent::JumpTo(number) => {
                if let Some(anchor) = self.controller.jump_to(number) {
                    return SectionEffect::ScrollTo(anchor);
                }
            }
            SectionIntent::Answer { .. } | SectionIntent::Restart => {}
        }
        SectionEffect::None
    }

    pub async fn apply(&mut self, intent: SectionIntent) -> SectionEffect {
        match intent {
            SectionIntent::Answer { number, letter } => {
                let outcome = self.controller.record_answer(number, letter).await;
                if !matches!(outcome, AnswerOutcome::Recorded { .. }) {
                    tracing::debug!(%number, %letter, ?outcome, "answer not recorded");
                }
                SectionEffect::None
            }
            SectionIntent::Restart => {
                self.controller.restart().await;
                SectionEffect::None
            }
            other => self.apply_sync(other),
        }
    }
}

/// Open a section and map service errors to view errors.
///
/// # Errors
///
/// Returns `ViewError::SectionNotFound` for names missing from the bank.
pub async fn open_section(quiz: &QuizService, name: &str) -> Result<SectionVm, ViewError> {
    match quiz.open_section(name).await {
        Ok(controller) => Ok(SectionVm::new(controller)),
        Err(QuizError::UnknownSection(_)) => Err(ViewError::SectionNotFound),
        Err(err) => {
            tracing::error!(section = name, error = %err, "failed to open section");
            Err(ViewError::Unknown)
        }
    }
}

/// Header figures for the section view.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionHeaderVm {
    pub title: String,
    pub score_label: String,
    pub progress_style: String,
    pub page_label: Option<String>,
    pub has_prev: bool,
    pub has_next: bool,
    pub storage_warning: Option<&'static str>,
}

impl SectionHeaderVm {
    #[must_use]
    pub fn from_snapshot(snapshot: &SectionSnapshot) -> Self {
        let page = snapshot.page;
        Self {
            title: snapshot.section.to_string(),
            score_label: format!("Success: {}%", snapshot.metrics.score_percent),
            progress_style: format!("width: {:.1}%", snapshot.metrics.progress_percent),
            page_label: (page.total_pages > 0)
                .then(|| format!("Page {} of {}", page.current_page + 1, page.total_pages)),
            has_prev: page.has_prev,
            has_next: page.has_next,
            storage_warning: (!snapshot.storage_healthy)
                .then_some("Progress could not be saved. Answers may be lost after closing."),
        }
    }
}
