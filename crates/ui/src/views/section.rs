use std::collections::VecDeque;

use dioxus::document::eval;
use dioxus::prelude::*;

use quiz_core::model::{AnswerLetter, ShuffledNumber};
use services::SectionSnapshot;

use crate::context::AppContext;
use crate::views::{QuestionCard, ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    SectionEffect, SectionHeaderVm, SectionIntent, SectionVm, map_question_cards, open_section,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn scroll_to(anchor: &str) {
    let js = format!(
        "document.getElementById({anchor:?})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    );
    let _ = eval(&js);
}

fn run_effect(effect: SectionEffect) {
    match effect {
        SectionEffect::None => {}
        SectionEffect::ScrollTo(anchor) => scroll_to(&anchor),
    }
}

/// Loads a section and drives its controller from user intents.
#[component]
pub fn SectionView(name: String) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();

    let vm = use_signal(|| None::<SectionVm>);
    let snapshot = use_signal(|| None::<SectionSnapshot>);

    let resource = use_resource(move || {
        let quiz = quiz.clone();
        let name = name.clone();
        let mut vm = vm;
        let mut snapshot = snapshot;

        async move {
            let opened = open_section(&quiz, &name).await?;
            snapshot.set(Some(opened.snapshot()));
            vm.set(Some(opened));
            Ok::<_, ViewError>(())
        }
    });

    // Intents run one at a time, in arrival order. The drain task takes the
    // vm out of its signal for each intent and always puts it back.
    let queue = use_signal(VecDeque::<SectionIntent>::new);
    let draining = use_signal(|| false);

    let dispatch = use_callback(move |intent: SectionIntent| {
        let mut queue = queue;
        let mut draining = draining;

        queue.write().push_back(intent);
        if *draining.peek() {
            return;
        }
        draining.set(true);

        spawn(async move {
            let mut vm = vm;
            let mut snapshot = snapshot;

            loop {
                let next = queue.write().pop_front();
                let Some(intent) = next else {
                    break;
                };
                let taken = {
                    let mut guard = vm.write();
                    guard.take()
                };
                let Some(mut vm_value) = taken else {
                    tracing::warn!(?intent, "section not loaded; dropping queued intents");
                    queue.write().clear();
                    break;
                };

                let effect = vm_value.apply(intent).await;

                snapshot.set(Some(vm_value.snapshot()));
                {
                    let mut guard = vm.write();
                    *guard = Some(vm_value);
                }
                run_effect(effect);
            }

            draining.set(false);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SectionTestHandles>() {
                handles.register(dispatch, snapshot);
            }
        }
    }

    let state = view_state_from_resource(resource);
    let current = snapshot.read().clone();

    rsx! {
        div { class: "page",
            match (state, current) {
                (ViewState::Error(err), _) => rsx! {
                    div { class: "section-error",
                        h2 { "{err.message()}" }
                    }
                },
                (_, Some(snapshot)) => rsx! {
                    SectionPanel { snapshot, on_intent: dispatch }
                },
                (ViewState::Idle, None) => rsx! {
                    p { "Idle" }
                },
                (ViewState::Loading | ViewState::Ready(()), None) => rsx! {
                    p { "Loading..." }
                },
            }
        }
    }
}

/// Pure rendering of a section snapshot.
#[component]
pub fn SectionPanel(snapshot: SectionSnapshot, on_intent: EventHandler<SectionIntent>) -> Element {
    let stats = SectionHeaderVm::from_snapshot(&snapshot);
    let cards = map_question_cards(&snapshot);
    let index: Vec<(ShuffledNumber, &'static str)> = snapshot
        .page_entries()
        .into_iter()
        .map(|entry| {
            let class = if entry.attempted { "index-item attempted" } else { "index-item" };
            (entry.number, class)
        })
        .collect();
    let reset_count = snapshot.reset_count;

    rsx! {
        section { class: "section-view",
            header { class: "section-header",
                h2 { "{stats.title}" }
                button {
                    class: "restart",
                    onclick: move |_| on_intent.call(SectionIntent::Restart),
                    "Restart Section"
                }
            }
            if let Some(warning) = stats.storage_warning {
                p { class: "storage-warning", role: "alert", "{warning}" }
            }
            div { class: "section-stats",
                span { class: "score", "{stats.score_label}" }
                div { class: "progress",
                    div { class: "progress-fill", style: "{stats.progress_style}" }
                }
            }
            nav { class: "question-index",
                div { class: "index-numbers",
                    for (number, class) in index {
                        button {
                            key: "{number}",
                            class: "{class}",
                            onclick: move |_| on_intent.call(SectionIntent::JumpTo(number)),
                            "{number}"
                        }
                    }
                }
                if let Some(label) = stats.page_label.as_ref() {
                    div { class: "pager",
                        button {
                            disabled: !stats.has_prev,
                            onclick: move |_| on_intent.call(SectionIntent::PrevPage),
                            "Prev"
                        }
                        span { class: "page-label", "{label}" }
                        button {
                            disabled: !stats.has_next,
                            onclick: move |_| on_intent.call(SectionIntent::NextPage),
                            "Next"
                        }
                    }
                }
            }
            if cards.is_empty() {
                p { class: "empty", "This section has no questions." }
            }
            div { class: "question-list",
                for card in cards {
                    QuestionCard {
                        key: "{reset_count}-{card.number}",
                        vm: card,
                        on_answered: move |(number, letter): (ShuffledNumber, AnswerLetter)| {
                            on_intent.call(SectionIntent::Answer { number, letter });
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SectionTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SectionIntent>>>>,
    snapshot: Rc<RefCell<Option<Signal<Option<SectionSnapshot>>>>>,
}

#[cfg(test)]
impl SectionTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<SectionIntent>,
        snapshot: Signal<Option<SectionSnapshot>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.snapshot.borrow_mut() = Some(snapshot);
    }

    pub(crate) fn dispatch(&self) -> Callback<SectionIntent> {
        (*self.dispatch.borrow()).expect("section dispatch registered")
    }

    pub(crate) fn snapshot(&self) -> Option<SectionSnapshot> {
        let signal = (*self.snapshot.borrow()).expect("section snapshot registered");
        signal.peek().clone()
    }
}
