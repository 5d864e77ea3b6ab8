use quiz_core::model::{AnswerLetter, ShuffledNumber, ShuffledQuestion};
use services::SectionSnapshot;

/// One radio option of a question card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub letter: AnswerLetter,
    /// `A.`, `B.`, ...
    pub label: String,
    pub text: String,
    pub input_id: String,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackVm {
    Correct,
    Incorrect { correct_letter: AnswerLetter },
}

impl FeedbackVm {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Correct => "✅ Correct!".to_string(),
            Self::Incorrect { correct_letter } => {
                format!("❌ Incorrect. Correct answer: {correct_letter}")
            }
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Correct => "feedback correct",
            Self::Incorrect { .. } => "feedback incorrect",
        }
    }
}

/// Everything a question card renders. Cards hold no state of their own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub number: ShuffledNumber,
    pub anchor: String,
    /// Radio group name, unique per section and question.
    pub group: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub answered: bool,
    pub feedback: Option<FeedbackVm>,
    pub explanation: Option<String>,
}

impl QuestionCardVm {
    #[must_use]
    pub fn new(anchor: String, question: &ShuffledQuestion, selected: Option<AnswerLetter>) -> Self {
        let number = question.shuffled_number();
        let group = format!("{anchor}-options");
        let answered = selected.is_some();
        let options = AnswerLetter::sequence(question.options().len())
            .zip(question.options())
            .map(|(letter, text)| OptionVm {
                letter,
                label: format!("{letter}."),
                text: text.clone(),
                input_id: format!("{group}-{letter}"),
                checked: selected == Some(letter),
                disabled: answered,
            })
            .collect();

        let feedback = selected.map(|letter| {
            if question.is_correct(letter) {
                FeedbackVm::Correct
            } else {
                FeedbackVm::Incorrect {
                    correct_letter: question.answer_letter(),
                }
            }
        });
        let explanation = (answered && !question.explanation().trim().is_empty())
            .then(|| question.explanation().to_string());

        Self {
            number,
            anchor,
            group,
            prompt: question.text().to_string(),
            options,
            answered,
            feedback,
            explanation,
        }
    }

    /// Answer to report when an option is picked, or `None` once the card is answered.
    #[must_use]
    pub fn answer_event(&self, letter: AnswerLetter) -> Option<(ShuffledNumber, AnswerLetter)> {
        (!self.answered && self.options.iter().any(|option| option.letter == letter))
            .then_some((self.number, letter))
    }
}

/// Card view models for every question of a snapshot, in shuffled order.
#[must_use]
pub fn map_question_cards(snapshot: &SectionSnapshot) -> Vec<QuestionCardVm> {
    snapshot
        .questions
        .iter()
        .map(|question| {
            let number = question.shuffled_number();
            QuestionCardVm::new(snapshot.anchor(number), question, snapshot.selected(number))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;

    fn question() -> ShuffledQuestion {
        let source = Question::new(
            4,
            "Which port does HTTPS use?",
            vec!["80".into(), "443".into(), "22".into()],
            "B".parse().unwrap(),
            "HTTPS listens on 443.",
        )
        .unwrap();
        ShuffledQuestion::from_reordered(
            &source,
            vec!["22".into(), "80".into(), "443".into()],
            ShuffledNumber::new(2),
        )
        .unwrap()
    }

    fn letter(raw: &str) -> AnswerLetter {
        raw.parse().unwrap()
    }

    #[test]
    fn unanswered_card_is_selectable() {
        let vm = QuestionCardVm::new("question-net-2".into(), &question(), None);
        assert!(!vm.answered);
        assert_eq!(vm.feedback, None);
        assert_eq!(vm.explanation, None);
        let labels: Vec<&str> = vm.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["A.", "B.", "C."]);
        assert!(vm.options.iter().all(|o| !o.checked && !o.disabled));
        assert_eq!(vm.group, "question-net-2-options");
        assert_eq!(
            vm.answer_event(letter("C")),
            Some((ShuffledNumber::new(2), letter("C")))
        );
        assert_eq!(vm.answer_event(letter("D")), None);
    }

    #[test]
    fn correct_answer_locks_card() {
        let vm = QuestionCardVm::new("question-net-2".into(), &question(), Some(letter("C")));
        assert_eq!(vm.feedback, Some(FeedbackVm::Correct));
        assert_eq!(vm.feedback.as_ref().map(FeedbackVm::message).as_deref(), Some("✅ Correct!"));
        assert!(vm.options.iter().all(|o| o.disabled));
        assert!(vm.options[2].checked);
        assert_eq!(vm.explanation.as_deref(), Some("HTTPS listens on 443."));
        assert!(
            vm.options
                .iter()
                .all(|option| vm.answer_event(option.letter).is_none())
        );
    }

    #[test]
    fn wrong_answer_names_correct_letter() {
        let vm = QuestionCardVm::new("question-net-2".into(), &question(), Some(letter("A")));
        assert_eq!(
            vm.feedback.map(|f| f.message()).as_deref(),
            Some("❌ Incorrect. Correct answer: C")
        );
        assert!(vm.options[0].checked);
    }
}
