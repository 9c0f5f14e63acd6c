use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// `strftime` pattern for ranking timestamps, e.g. `03/14 09:05`.
pub const RANKING_TIMESTAMP_FORMAT: &str = "%m/%d %H:%M";

/// Result of one completed quiz attempt.
///
/// The timestamp is stored pre-formatted; entries never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    score: u32,
    timestamp: String,
}

impl RankingEntry {
    /// Create an entry stamped with `at`, rendered in `at`'s own time zone.
    #[must_use]
    pub fn recorded_at<Tz>(score: u32, at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            score,
            timestamp: at.format(RANKING_TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Rehydrate an entry from persisted storage.
    #[must_use]
    pub fn from_persisted(score: u32, timestamp: impl Into<String>) -> Self {
        Self {
            score,
            timestamp: timestamp.into(),
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn formats_month_day_hour_minute() {
        // 2023-11-14T22:13:20Z
        let entry = RankingEntry::recorded_at(4, &fixed_now());
        assert_eq!(entry.timestamp(), "11/14 22:13");
        assert_eq!(entry.score(), 4);
    }
}
