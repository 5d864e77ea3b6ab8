use dioxus::prelude::*;

use quiz_core::model::{AnswerLetter, ShuffledNumber};

use crate::vm::QuestionCardVm;

/// A single question with its radio options and, once answered, feedback.
///
/// `on_answered` fires at most once per card: options are disabled as soon
/// as an answer is recorded.
#[component]
pub fn QuestionCard(
    vm: QuestionCardVm,
    on_answered: EventHandler<(ShuffledNumber, AnswerLetter)>,
) -> Element {
    let number = vm.number;
    let card_class = if vm.answered { "question-card answered" } else { "question-card" };
    let options: Vec<_> = vm
        .options
        .iter()
        .map(|option| (option.clone(), vm.answer_event(option.letter)))
        .collect();

    rsx! {
        article { class: "{card_class}", id: "{vm.anchor}",
            h3 { class: "question-prompt", "{number}. {vm.prompt}" }
            fieldset { class: "question-options", disabled: vm.answered,
                for (option, answer) in options {
                    label { key: "{option.input_id}", class: "question-option", r#for: "{option.input_id}",
                        input {
                            r#type: "radio",
                            id: "{option.input_id}",
                            name: "{vm.group}",
                            value: "{option.letter}",
                            checked: option.checked,
                            disabled: option.disabled,
                            onchange: move |_| {
                                if let Some(answer) = answer {
                                    on_answered.call(answer);
                                }
                            },
                        }
                        span { class: "option-letter", "{option.label}" }
                        span { class: "option-text", " {option.text}" }
                    }
                }
            }
            if let Some(feedback) = vm.feedback.as_ref() {
                p { class: "{feedback.class()}", "{feedback.message()}" }
            }
            if let Some(explanation) = vm.explanation.as_ref() {
                p { class: "explanation", "{explanation}" }
            }
        }
    }
}
