use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use quiz_core::model::{AnswerLetter, Question, ShuffledNumber, ShuffledQuestion};
use storage::repository::{InMemoryStore, KeyValueStore, StorageError};

use super::QuestionCard;
use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_store};
use crate::vm::{QuestionCardVm, SectionIntent};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_first_section() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.load().await;
    let html = harness.render();

    assert!(html.contains("Networking"), "missing section title in {html}");
    assert!(html.contains("Restart Section"), "missing restart in {html}");
    assert!(html.contains("Success: 0%"), "missing score in {html}");
    assert!(html.contains("Page 1 of 1"), "missing pager in {html}");
    assert_eq!(html.matches("question-card").count(), 3, "expected 3 cards in {html}");
    assert!(!html.contains("storage-warning"), "unexpected warning in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_section_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Section("Nope".into()));
    harness.load().await;
    let html = harness.render();
    assert!(html.contains("Section not found"), "missing fallback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_shows_feedback_and_score() {
    let mut harness = setup_view_harness(ViewKind::Section("Networking".into()));
    harness.load().await;

    let snapshot = harness.handles.snapshot().expect("section loaded");
    let first = snapshot.questions[0].clone();
    let dispatch = harness.handles.dispatch();
    harness.dom.in_runtime(|| {
        dispatch.call(SectionIntent::Answer {
            number: first.shuffled_number(),
            letter: first.answer_letter(),
        });
    });
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("✅ Correct!"), "missing feedback in {html}");
    assert!(html.contains("Success: 33%"), "missing score in {html}");
    assert!(html.contains("index-item attempted"), "missing index highlight in {html}");

    let stored = harness
        .kv
        .get("section-answers-Networking")
        .await
        .unwrap()
        .expect("answers persisted");
    assert_eq!(stored, format!(r#"{{"1":"{}"}}"#, first.answer_letter()));
}

#[tokio::test(flavor = "current_thread")]
async fn restart_clears_feedback() {
    let mut harness = setup_view_harness(ViewKind::Section("Storage".into()));
    harness.load().await;

    let snapshot = harness.handles.snapshot().expect("section loaded");
    let only = snapshot.questions[0].clone();
    let dispatch = harness.handles.dispatch();
    harness.dom.in_runtime(|| {
        dispatch.call(SectionIntent::Answer {
            number: only.shuffled_number(),
            letter: only.answer_letter(),
        });
    });
    harness.drive_async().await;
    assert!(harness.render().contains("Success: 100%"));

    harness.dom.in_runtime(|| dispatch.call(SectionIntent::Restart));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Success: 0%"), "score not reset in {html}");
    assert!(!html.contains("Correct!"), "stale feedback in {html}");
    assert_eq!(harness.handles.snapshot().map(|s| s.reset_count), Some(1));
    assert_eq!(harness.kv.get("section-answers-Storage").await.unwrap(), None);
}

struct FailingStore;

#[async_trait::async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failing_storage_renders_warning_and_questions() {
    let mut harness =
        setup_view_harness_with_store(ViewKind::Section("Networking".into()), Arc::new(FailingStore));
    harness.load().await;
    let html = harness.render();

    assert!(html.contains("storage-warning"), "missing warning in {html}");
    assert_eq!(html.matches("question-card").count(), 3, "expected cards in {html}");
}

/// Delays every write so an answer is still in flight when the next one arrives.
#[derive(Default)]
struct SlowStore {
    inner: InMemoryStore,
}

#[async_trait::async_trait]
impl KeyValueStore for SlowStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }

    async fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        self.inner.list_keys().await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn back_to_back_answers_are_both_recorded() {
    let mut harness = setup_view_harness_with_store(
        ViewKind::Section("Networking".into()),
        Arc::new(SlowStore::default()),
    );
    harness.load().await;

    let snapshot = harness.handles.snapshot().expect("section loaded");
    let first = snapshot.questions[0].clone();
    let second = snapshot.questions[1].clone();
    let dispatch = harness.handles.dispatch();
    harness.dom.in_runtime(|| {
        dispatch.call(SectionIntent::Answer {
            number: first.shuffled_number(),
            letter: first.answer_letter(),
        });
        dispatch.call(SectionIntent::Answer {
            number: second.shuffled_number(),
            letter: second.answer_letter(),
        });
    });
    harness.drive_async().await;
    harness.drive_async().await;

    let snapshot = harness.handles.snapshot().expect("section loaded");
    assert_eq!(snapshot.metrics.attempted_count, 2);
    assert_eq!(snapshot.metrics.correct_count, 2);

    let stored = harness
        .kv
        .get("section-answers-Networking")
        .await
        .unwrap()
        .expect("answers persisted");
    assert_eq!(
        stored,
        format!(
            r#"{{"1":"{}","2":"{}"}}"#,
            first.answer_letter(),
            second.answer_letter()
        )
    );
}

#[component]
fn CardHarness(vm: QuestionCardVm) -> Element {
    rsx! {
        QuestionCard { vm, on_answered: move |_: (ShuffledNumber, AnswerLetter)| {} }
    }
}

fn render_card(selected: Option<&str>) -> String {
    let source = Question::new(
        1,
        "Which layer does TCP live on?",
        vec!["Network".into(), "Transport".into(), "Session".into()],
        "B".parse().unwrap(),
        "TCP is a transport protocol.",
    )
    .unwrap();
    let question = ShuffledQuestion::from_reordered(
        &source,
        vec!["Session".into(), "Network".into(), "Transport".into()],
        ShuffledNumber::new(1),
    )
    .unwrap();
    let selected = selected.map(|raw| raw.parse::<AnswerLetter>().unwrap());
    let vm = QuestionCardVm::new("question-networking-1".into(), &question, selected);

    let mut dom = VirtualDom::new_with_props(CardHarness, CardHarnessProps { vm });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn unanswered_card_renders_enabled_options() {
    let html = render_card(None);
    assert_eq!(html.matches(r#"type="radio""#).count(), 3, "expected radios in {html}");
    assert!(!html.contains("disabled=true"), "unexpected disabled in {html}");
    assert!(!html.contains("checked=true"), "unexpected checked in {html}");
    assert!(!html.contains("feedback"), "unexpected feedback in {html}");
}

#[test]
fn answered_card_renders_locked_selection() {
    let html = render_card(Some("A"));
    // fieldset plus one per option
    assert_eq!(html.matches(" disabled=true").count(), 4, "expected locked card in {html}");
    assert_eq!(html.matches(" checked=true").count(), 1, "expected one selection in {html}");
    assert!(html.contains("❌ Incorrect. Correct answer: C"), "missing feedback in {html}");
    assert!(html.contains("TCP is a transport protocol."), "missing explanation in {html}");
}
