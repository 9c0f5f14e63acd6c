use quiz_core::model::{
    Question, QuizSession, RankingEntry, RankingLedger, Screen, WrongAnswerNotebook,
};

/// Read model of everything the UI renders.
///
/// A fresh snapshot is published after every mutation; it is a plain value
/// with no tie to the machine that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub screen: Screen,
    pub category: String,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: u32,
    pub selected_answer: Option<usize>,
    pub is_answered: bool,
    pub wrong_answers: Vec<Question>,
    pub rankings: Vec<RankingEntry>,
}

impl QuizSnapshot {
    pub(crate) fn capture(
        screen: &Screen,
        session: &QuizSession,
        notebook: &WrongAnswerNotebook,
        ledger: &RankingLedger,
    ) -> Self {
        Self {
            screen: screen.clone(),
            category: session.category().to_owned(),
            questions: session.questions().to_vec(),
            current_index: session.current_index(),
            score: session.score(),
            selected_answer: session.selected_answer(),
            is_answered: session.is_answered(),
            wrong_answers: notebook.entries().to_vec(),
            rankings: ledger.entries().to_vec(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }
}
