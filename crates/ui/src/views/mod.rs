mod home;
mod question_card;
mod section;
mod state;

pub use home::{HomeView, SectionRouteView};
pub use question_card::QuestionCard;
pub use section::{SectionPanel, SectionView};
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
pub(crate) use section::SectionTestHandles;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
