mod machine;
mod persist;
mod snapshot;
mod view;

// Public API of the quiz subsystem.
pub use machine::{QuizMachine, QuizMachineBuilder};
pub use snapshot::QuizSnapshot;
pub use view::{
    QuizProgress, RankingRow, ResultSummary, ReviewItem, WrongNoteItem, ranking_rows,
    wrong_note_items,
};
