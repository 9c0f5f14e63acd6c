//! Presentation-agnostic read models derived from a `QuizSnapshot`.
//!
//! These carry numbers and domain values only; formatting is left to the UI.

use quiz_core::model::{Question, Screen};

use super::snapshot::QuizSnapshot;

/// Position within the running quiz, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub position: usize,
    pub total: usize,
}

impl QuizProgress {
    /// `None` unless a quiz with at least one question is on screen.
    #[must_use]
    pub fn from_snapshot(snapshot: &QuizSnapshot) -> Option<Self> {
        if !snapshot.screen.is_quiz() || snapshot.questions.is_empty() {
            return None;
        }
        Some(Self {
            position: snapshot.current_index + 1,
            total: snapshot.questions.len(),
        })
    }
}

/// One line of the post-quiz review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub question: Question,
    /// True when the notebook holds this question's text.
    pub missed: bool,
}

/// Score card shown on the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub score: u32,
    pub total: usize,
    /// Whole-number percentage, rounded down.
    pub percentage: u32,
    pub review: Vec<ReviewItem>,
}

impl ResultSummary {
    /// `None` unless the result screen is showing.
    #[must_use]
    pub fn from_snapshot(snapshot: &QuizSnapshot) -> Option<Self> {
        if snapshot.screen != Screen::Result {
            return None;
        }

        let total = snapshot.questions.len();
        let review = snapshot
            .questions
            .iter()
            .map(|q| ReviewItem {
                question: q.clone(),
                missed: snapshot.wrong_answers.contains(q),
            })
            .collect();

        Some(Self {
            score: snapshot.score,
            total,
            percentage: percentage(snapshot.score, total),
            review,
        })
    }
}

fn percentage(score: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let total = u64::try_from(total).unwrap_or(u64::MAX);
    let pct = u64::from(score) * 100 / total;
    u32::try_from(pct).unwrap_or(u32::MAX)
}

/// A ledger entry with its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    pub rank: usize,
    pub score: u32,
    pub timestamp: String,
}

#[must_use]
pub fn ranking_rows(snapshot: &QuizSnapshot) -> Vec<RankingRow> {
    snapshot
        .rankings
        .iter()
        .enumerate()
        .map(|(i, entry)| RankingRow {
            rank: i + 1,
            score: entry.score(),
            timestamp: entry.timestamp().to_owned(),
        })
        .collect()
}

/// A notebook entry with its correct option resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongNoteItem {
    pub text: String,
    pub correct_option: String,
}

#[must_use]
pub fn wrong_note_items(snapshot: &QuizSnapshot) -> Vec<WrongNoteItem> {
    snapshot
        .wrong_answers
        .iter()
        .map(|q| WrongNoteItem {
            text: q.text().to_owned(),
            correct_option: q.correct_option().to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::RankingEntry;

    fn question(text: &str) -> Question {
        Question::new(
            text,
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            3,
        )
        .unwrap()
    }

    #[test]
    fn progress_is_one_based_on_quiz_screen_only() {
        let mut snapshot = QuizSnapshot {
            screen: Screen::Quiz("x".into()),
            questions: vec![question("Q1"), question("Q2")],
            current_index: 1,
            ..QuizSnapshot::default()
        };
        assert_eq!(
            QuizProgress::from_snapshot(&snapshot),
            Some(QuizProgress {
                position: 2,
                total: 2
            })
        );

        snapshot.screen = Screen::Main;
        assert_eq!(QuizProgress::from_snapshot(&snapshot), None);
    }

    #[test]
    fn result_marks_missed_questions_and_truncates_percentage() {
        let snapshot = QuizSnapshot {
            screen: Screen::Result,
            questions: vec![question("Q1"), question("Q2"), question("Q3")],
            score: 2,
            wrong_answers: vec![question("Q2")],
            ..QuizSnapshot::default()
        };
        let summary = ResultSummary::from_snapshot(&snapshot).unwrap();
        assert_eq!(summary.percentage, 66);
        assert_eq!(summary.total, 3);
        let missed: Vec<bool> = summary.review.iter().map(|r| r.missed).collect();
        assert_eq!(missed, vec![false, true, false]);
    }

    #[test]
    fn empty_result_has_zero_percentage() {
        let snapshot = QuizSnapshot {
            screen: Screen::Result,
            ..QuizSnapshot::default()
        };
        assert_eq!(ResultSummary::from_snapshot(&snapshot).unwrap().percentage, 0);
    }

    #[test]
    fn ranking_rows_are_numbered_from_one() {
        let snapshot = QuizSnapshot {
            rankings: vec![
                RankingEntry::from_persisted(5, "01/02 03:04"),
                RankingEntry::from_persisted(2, "01/01 00:00"),
            ],
            ..QuizSnapshot::default()
        };
        let rows = ranking_rows(&snapshot);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].score, 2);
    }

    #[test]
    fn wrong_notes_show_correct_option() {
        let snapshot = QuizSnapshot {
            wrong_answers: vec![question("Q1")],
            ..QuizSnapshot::default()
        };
        let items = wrong_note_items(&snapshot);
        assert_eq!(items[0].correct_option, "d");
    }
}
