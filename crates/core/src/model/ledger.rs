use crate::model::RankingEntry;

/// Score-sorted history of completed attempts.
///
/// Always ordered by descending score; equal scores keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingLedger {
    entries: Vec<RankingEntry>,
}

impl RankingLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted entries, restoring the sort order.
    #[must_use]
    pub fn from_entries(entries: Vec<RankingEntry>) -> Self {
        let mut ledger = Self { entries };
        ledger.sort();
        ledger
    }

    /// Append an entry and re-sort.
    pub fn add(&mut self, entry: RankingEntry) {
        self.entries.push(entry);
        self.sort();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[RankingEntry] {
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

    fn sort(&mut self) {
        // `sort_by` is stable, so ties stay in insertion order.
        self.entries.sort_by(|a, b| b.score().cmp(&a.score()));
    }
}
