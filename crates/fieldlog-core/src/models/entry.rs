use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::answer::{Answer, Draft};
use crate::error::CoreError;

/// Fixed number of daily entries a participant may submit.
pub const TRIAL_LENGTH: usize = 14;

/// One submitted daily form. Never mutated once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    #[serde(flatten)]
    pub answers: BTreeMap<String, Answer>,
    pub entry_id: u64,
    pub submitted_at: jiff::Timestamp,
}

impl DailyEntry {
    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn text(&self, question_id: &str) -> Option<&str> {
        self.answer(question_id).and_then(Answer::as_text)
    }
}

/// Append-only, capped log of daily entries in submission order.
///
/// Persisted as a plain JSON array under `entries_{participantId}`. A stored
/// array longer than [`TRIAL_LENGTH`] does not deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DailyEntry>", into = "Vec<DailyEntry>")]
pub struct EntryLog {
    entries: Vec<DailyEntry>,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() >= TRIAL_LENGTH
    }

    pub fn remaining(&self) -> usize {
        TRIAL_LENGTH.saturating_sub(self.entries.len())
    }

    /// Day number the next entry would be logged as.
    pub fn next_day(&self) -> usize {
        self.entries.len() + 1
    }

    /// Share of the trial completed, rounded to the nearest percent.
    pub fn progress_percent(&self) -> u32 {
        let done = self.entries.len().min(TRIAL_LENGTH);
        ((done * 100 + TRIAL_LENGTH / 2) / TRIAL_LENGTH) as u32
    }

    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&DailyEntry> {
        self.entries.last()
    }

    /// Timestamp-derived id, bumped past the previous entry when the clock
    /// has not moved forward.
    pub fn next_entry_id(&self, now: jiff::Timestamp) -> u64 {
        let millis = u64::try_from(now.as_millisecond()).unwrap_or(0);
        match self.entries.last() {
            Some(last) if last.entry_id >= millis => last.entry_id + 1,
            _ => millis,
        }
    }

    /// Build the entry for `answers` and return the log with it appended.
    ///
    /// `self` is left as is so the caller can persist the full updated log
    /// before committing it in memory.
    pub fn with_submission(&self, answers: Draft, now: jiff::Timestamp) -> Result<Self, CoreError> {
        if self.is_complete() {
            return Err(CoreError::TrialFull { cap: TRIAL_LENGTH });
        }
        let entry = DailyEntry {
            answers: answers.into_answers(),
            entry_id: self.next_entry_id(now),
            submitted_at: now,
        };
        let mut entries = self.entries.clone();
        entries.push(entry);
        Ok(Self { entries })
    }
}

impl TryFrom<Vec<DailyEntry>> for EntryLog {
    type Error = CoreError;

    fn try_from(entries: Vec<DailyEntry>) -> Result<Self, Self::Error> {
        if entries.len() > TRIAL_LENGTH {
            return Err(CoreError::LogOverCap {
                count: entries.len(),
                cap: TRIAL_LENGTH,
            });
        }
        Ok(Self { entries })
    }
}

impl From<EntryLog> for Vec<DailyEntry> {
    fn from(log: EntryLog) -> Self {
        log.entries
    }
}

impl<'a> IntoIterator for &'a EntryLog {
    type Item = &'a DailyEntry;
    type IntoIter = std::slice::Iter<'a, DailyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
