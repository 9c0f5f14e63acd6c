use crate::model::Question;

/// What happened when an answer was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Nothing changed: the question was already answered or none is current.
    Ignored,
    Correct,
    Wrong { question: Question },
}

/// Result of moving past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextQuestion { index: usize },
    Finished { score: u32 },
}

/// Mutable state of a single quiz attempt.
///
/// The question list is a snapshot taken at start and never changes for the
/// lifetime of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    category: String,
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    selected_answer: Option<usize>,
    is_answered: bool,
}

impl QuizSession {
    #[must_use]
    pub fn start(category: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            category: category.into(),
            questions,
            current_index: 0,
            score: 0,
            selected_answer: None,
            is_answered: false,
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.is_answered
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Submit an answer for the current question.
    ///
    /// Out-of-range indices count as wrong answers. Returns
    /// `AnswerOutcome::Ignored` if the question was already answered or the
    /// session has no questions.
    pub fn answer(&mut self, selected: usize) -> AnswerOutcome {
        if self.is_answered {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.current_question() else {
            return AnswerOutcome::Ignored;
        };

        let outcome = if question.is_correct(selected) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Wrong {
                question: question.clone(),
            }
        };

        self.selected_answer = Some(selected);
        self.is_answered = true;
        if outcome == AnswerOutcome::Correct {
            self.score = self.score.saturating_add(1);
        }
        outcome
    }

    /// Move past the answered question.
    ///
    /// Returns `None` when the current question has not been answered yet.
    /// On the last question the session stays on it and reports the final
    /// score; the answered state is kept so late answers remain no-ops.
    pub fn advance(&mut self) -> Option<Advance> {
        if !self.is_answered {
            return None;
        }
        if self.is_last_question() {
            return Some(Advance::Finished { score: self.score });
        }

        self.current_index += 1;
        self.selected_answer = None;
        self.is_answered = false;
        Some(Advance::NextQuestion {
            index: self.current_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::new(
                    format!("Q{i}"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    i % 4,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn start_resets_progress() {
        let session = QuizSession::start("cat", questions(3));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_answer(), None);
        assert!(!session.is_answered());
    }

    #[test]
    fn second_answer_is_ignored() {
        let mut session = QuizSession::start("cat", questions(2));
        assert_eq!(session.answer(0), AnswerOutcome::Correct);
        assert_eq!(session.answer(0), AnswerOutcome::Ignored);
        assert_eq!(session.score(), 1);
        assert_eq!(session.selected_answer(), Some(0));
    }

    #[test]
    fn wrong_answer_reports_question() {
        let mut session = QuizSession::start("cat", questions(2));
        let outcome = session.answer(3);
        assert!(matches!(outcome, AnswerOutcome::Wrong { ref question } if question.text() == "Q0"));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn empty_session_ignores_answers() {
        let mut session = QuizSession::start("none", Vec::new());
        assert_eq!(session.answer(0), AnswerOutcome::Ignored);
        assert_eq!(session.advance(), None);
    }

    #[test]
    fn advance_requires_answer_and_finishes_on_last() {
        let mut session = QuizSession::start("cat", questions(2));
        assert_eq!(session.advance(), None);

        session.answer(0);
        assert_eq!(session.advance(), Some(Advance::NextQuestion { index: 1 }));
        assert!(!session.is_answered());
        assert_eq!(session.selected_answer(), None);

        session.answer(1);
        assert_eq!(session.advance(), Some(Advance::Finished { score: 2 }));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answer(0), AnswerOutcome::Ignored);
    }

    #[test]
    fn score_counts_only_matching_answers() {
        let qs = questions(4);
        let picks = [0, 0, 2, 1];
        let expected = qs
            .iter()
            .zip(picks)
            .filter(|(q, p)| q.is_correct(*p))
            .count();

        let mut session = QuizSession::start("cat", qs);
        for pick in picks {
            session.answer(pick);
            session.advance();
        }
        assert_eq!(session.score() as usize, expected);
    }
}
