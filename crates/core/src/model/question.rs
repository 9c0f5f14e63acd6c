use std::hash::{Hash, Hasher};

use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("expected {} options, got {len}", OPTION_COUNT)]
    OptionCount { len: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A fixed multiple-choice question.
///
/// Equality and hashing look at `text` only. Two questions that share a text
/// but differ in options collapse into one entry wherever questions are
/// deduplicated (notably the wrong-answer notebook). This is a known quirk
/// kept for compatibility with previously persisted notebooks.
#[derive(Debug, Clone)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text or an option is blank, the option
    /// count is not `OPTION_COUNT`, or `correct_index` is out of range.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() != OPTION_COUNT {
            return Err(QuestionError::OptionCount { len: options.len() });
        }
        if let Some(index) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            text,
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Returns true if `selected` is the correct option index.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Question {}

impl Hash for Question {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn opts(items: [&str; 4]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn rejects_blank_text() {
        let err = Question::new("  ", opts(["a", "b", "c", "d"]), 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn rejects_wrong_option_count() {
        let err = Question::new("Q", vec!["a".into(), "b".into()], 0).unwrap_err();
        assert_eq!(err, QuestionError::OptionCount { len: 2 });
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let err = Question::new("Q", opts(["a", "b", "c", "d"]), 4).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectIndexOutOfRange { index: 4, len: 4 }
        );
    }

    #[test]
    fn equality_ignores_options_and_index() {
        let a = Question::new("Same", opts(["a", "b", "c", "d"]), 0).unwrap();
        let b = Question::new("Same", opts(["w", "x", "y", "z"]), 3).unwrap();
        assert_eq!(a, b);

        let set: HashSet<Question> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn correct_option_reads_from_index() {
        let q = Question::new("Q", opts(["a", "b", "c", "d"]), 2).unwrap();
        assert_eq!(q.correct_option(), "c");
        assert!(q.is_correct(2));
        assert!(!q.is_correct(0));
    }
}
