mod question_card_vm;
mod section_vm;

pub use question_card_vm::{FeedbackVm, OptionVm, QuestionCardVm, map_question_cards};
pub use section_vm::{
    SectionEffect, SectionHeaderVm, SectionIntent, SectionVm, open_section,
};
