mod ledger;
mod notebook;
mod question;
mod ranking;
mod screen;
mod session;

pub use ledger::RankingLedger;
pub use notebook::WrongAnswerNotebook;
pub use question::{OPTION_COUNT, Question, QuestionError};
pub use ranking::{RANKING_TIMESTAMP_FORMAT, RankingEntry};
pub use screen::Screen;
pub use session::{Advance, AnswerOutcome, QuizSession};
