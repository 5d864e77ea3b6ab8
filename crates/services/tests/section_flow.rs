use std::sync::Arc;

use quiz_core::model::{AnswerLetter, ShuffledNumber, ShuffledQuestion};
use services::{AnswerOutcome, QuizService, load_bank_from_str};
use storage::repository::{InMemoryStore, KeyValueStore, Storage};

const NETWORKING: &str = r#"{
  "Networking": [
    { "number": 1, "question": "Which layer does TCP live on?",
      "options": ["Network", "Transport", "Session"], "answer": "B",
      "explanation": "TCP is a transport protocol." },
    { "number": 2, "question": "Default HTTPS port?",
      "options": ["80", "8080", "443", "22"], "answer": "C" },
    { "number": 3, "question": "What does DNS resolve?",
      "options": ["Names to addresses", "Addresses to MACs"], "answer": "A",
      "explanation": "DNS maps host names to IP addresses." }
  ],
  "Storage": [
    { "number": 1, "question": "What does RAID 1 do?",
      "options": ["Striping", "Mirroring"], "answer": "B" }
  ]
}"#;

fn service(kv: &InMemoryStore) -> QuizService {
    let bank = load_bank_from_str(NETWORKING).expect("bank");
    QuizService::new(bank, Storage::from_store(Arc::new(kv.clone())))
}

fn wrong(question: &ShuffledQuestion) -> AnswerLetter {
    let index = (question.answer_letter().index() + 1) % question.options().len();
    AnswerLetter::from_index(index).expect("letter")
}

#[tokio::test]
async fn answering_the_first_question_scores_a_third() {
    let kv = InMemoryStore::new();
    let mut section = service(&kv).open_section("Networking").await.unwrap();

    let first = section.questions()[0].clone();
    assert_eq!(first.shuffled_number(), ShuffledNumber::new(1));
    let outcome = section
        .record_answer(first.shuffled_number(), first.answer_letter())
        .await;
    assert_eq!(outcome, AnswerOutcome::Recorded { correct: true });

    let snapshot = section.snapshot();
    assert_eq!(snapshot.metrics.attempted_count, 1);
    assert_eq!(snapshot.metrics.correct_count, 1);
    assert_eq!(snapshot.metrics.score_percent, 33);
    assert_eq!(snapshot.selected(first.shuffled_number()), Some(first.answer_letter()));

    let stored = kv.get("section-answers-Networking").await.unwrap().unwrap();
    assert_eq!(stored, format!(r#"{{"1":"{}"}}"#, first.answer_letter()));
}

#[tokio::test]
async fn shuffled_answer_letter_points_at_correct_text() {
    let kv = InMemoryStore::new();
    let section = service(&kv).open_section("Networking").await.unwrap();
    for question in section.questions() {
        let index = question.answer_letter().index();
        assert_eq!(question.options()[index], question.correct_answer_text());
    }
}

#[tokio::test]
async fn progress_survives_reopening() {
    let kv = InMemoryStore::new();
    let service = service(&kv);
    let mut section = service.open_section("Networking").await.unwrap();
    let second = section.questions()[1].clone();
    section
        .record_answer(second.shuffled_number(), wrong(&second))
        .await;

    let reopened = service.open_section("Networking").await.unwrap();
    assert_eq!(reopened.questions(), section.questions());
    assert_eq!(reopened.snapshot().metrics, section.snapshot().metrics);
    assert_eq!(reopened.metrics().correct_count, 0);
}

#[tokio::test]
async fn second_answer_is_ignored() {
    let kv = InMemoryStore::new();
    let mut section = service(&kv).open_section("Networking").await.unwrap();
    let first = section.questions()[0].clone();

    section
        .record_answer(first.shuffled_number(), wrong(&first))
        .await;
    let retry = section
        .record_answer(first.shuffled_number(), first.answer_letter())
        .await;

    assert_eq!(retry, AnswerOutcome::AlreadyAnswered);
    assert_eq!(section.metrics().correct_count, 0);
}

#[tokio::test]
async fn restart_wipes_answers_and_legacy_keys() {
    let kv = InMemoryStore::new();
    kv.set("section-Networking-q1", "A").await.unwrap();
    let service = service(&kv);
    let mut section = service.open_section("Networking").await.unwrap();
    let first = section.questions()[0].clone();
    section
        .record_answer(first.shuffled_number(), first.answer_letter())
        .await;

    section.restart().await;

    let snapshot = section.snapshot();
    assert_eq!(snapshot.reset_count, 1);
    assert_eq!(snapshot.metrics.attempted_count, 0);
    assert!(snapshot.storage_healthy);
    assert_eq!(kv.list_keys().await.unwrap(), ["section-shuffle-Networking"]);

    let reopened = service.open_section("Networking").await.unwrap();
    assert!(reopened.answers().is_empty());
    assert_eq!(reopened.questions(), section.questions());
}

#[tokio::test]
async fn corrupt_shuffle_is_replaced() {
    let kv = InMemoryStore::new();
    kv.set("section-shuffle-Networking", "{{{").await.unwrap();
    let section = service(&kv).open_section("Networking").await.unwrap();

    assert_eq!(section.questions().len(), 3);
    let stored = kv.get("section-shuffle-Networking").await.unwrap().unwrap();
    let parsed: Vec<ShuffledQuestion> = serde_json::from_str(&stored).unwrap();
    assert_eq!(parsed, section.questions());
}

#[tokio::test]
async fn sqlite_backend_persists_between_services() {
    let url = "sqlite:file:memdb_section_flow?mode=memory&cache=shared";
    let bank = load_bank_from_str(NETWORKING).unwrap();
    let service = QuizService::sqlite(url, bank.clone()).await.unwrap();
    let mut section = service.open_section("Storage").await.unwrap();
    let only = section.questions()[0].clone();
    section
        .record_answer(only.shuffled_number(), only.answer_letter())
        .await;
    assert!(section.metrics().is_complete());

    let again = QuizService::sqlite(url, bank).await.unwrap();
    let reopened = again.open_section("Storage").await.unwrap();
    assert_eq!(reopened.metrics().score_percent, 100);
    // keep the first pool alive so the shared in-memory database survives
    drop(service);
}
