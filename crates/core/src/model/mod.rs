mod answers;
mod bank;
mod ids;
mod letter;
mod question;
mod shuffled;

pub use answers::AnswerMap;
pub use bank::{BankError, QuestionBank, Section};
pub use ids::{ParseShuffledNumberError, SectionName, SectionNameError, ShuffledNumber};
pub use letter::{AnswerLetter, LetterError, MAX_OPTIONS};
pub use question::{Question, QuestionError, QuestionRecord};
pub use shuffled::ShuffledQuestion;
