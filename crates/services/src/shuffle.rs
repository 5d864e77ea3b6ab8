//! Question and option shuffling.
//!
//! Both levels use `SliceRandom::shuffle`, a Fisher–Yates pass from the last
//! index down to 1 that swaps with a uniform index in `[0, i]`.

use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{Question, QuestionError, ShuffledNumber, ShuffledQuestion};

/// Produce a fresh shuffle of a section.
///
/// Question order and each question's options are permuted independently.
/// The correct option is tracked by its text, and shuffled numbers follow the
/// new order starting at 1. `questions` is left untouched.
///
/// # Errors
///
/// Returns `QuestionError` only if a reordered question cannot be rebuilt,
/// which would mean the input violated `Question` invariants.
pub fn shuffle_section<R>(
    questions: &[Question],
    rng: &mut R,
) -> Result<Vec<ShuffledQuestion>, QuestionError>
where
    R: Rng + ?Sized,
{
    let mut order: Vec<&Question> = questions.iter().collect();
    order.shuffle(rng);

    order
        .into_iter()
        .zip(1_u32..)
        .map(|(question, number)| {
            let mut options = question.options().to_vec();
            options.shuffle(rng);
            ShuffledQuestion::from_reordered(question, options, ShuffledNumber::new(number))
        })
        .collect()
}

/// [`shuffle_section`] with the thread-local RNG.
///
/// # Errors
///
/// See [`shuffle_section`].
pub fn shuffle_section_thread_rng(
    questions: &[Question],
) -> Result<Vec<ShuffledQuestion>, QuestionError> {
    shuffle_section(questions, &mut rand::rng())
}
