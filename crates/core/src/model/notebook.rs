use crate::model::Question;

/// Missed questions collected across sessions until explicitly cleared.
///
/// Entries are unique by question text (see `Question` equality).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrongAnswerNotebook {
    entries: Vec<Question>,
}

impl WrongAnswerNotebook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a notebook from persisted questions, dropping duplicate texts.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = Question>) -> Self {
        let mut notebook = Self::new();
        for question in entries {
            notebook.record_if_absent(question);
        }
        notebook
    }

    /// Add `question` unless an entry with the same text exists.
    ///
    /// Returns true when the notebook changed.
    pub fn record_if_absent(&mut self, question: Question) -> bool {
        if self.contains(&question) {
            return false;
        }
        self.entries.push(question);
        true
    }

    #[must_use]
    pub fn contains(&self, question: &Question) -> bool {
        self.entries.contains(question)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[Question] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
