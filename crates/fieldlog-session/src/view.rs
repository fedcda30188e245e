//! Read-only projections of a session for rendering.

use fieldlog_core::models::answer::Draft;
use fieldlog_core::models::entry::{DailyEntry, TRIAL_LENGTH};
use fieldlog_survey::Questionnaire;
use fieldlog_survey::question::QuestionDefinition;
use fieldlog_survey::questionnaires::daily::field;
use serde::Serialize;

use crate::session::{Notice, ParticipantSession, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BiteOutcome {
    Protected,
    Bitten,
}

/// One line of the dashboard history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    /// 1-based trial day.
    pub day: usize,
    pub entry_id: u64,
    pub date: Option<String>,
    pub time_applied: Option<String>,
    pub outcome: BiteOutcome,
    pub notes: Option<String>,
}

impl HistoryRow {
    fn new(day: usize, entry: &DailyEntry) -> Self {
        let outcome = match entry.text(field::GOT_BITTEN_TREATED) {
            Some("No") => BiteOutcome::Protected,
            _ => BiteOutcome::Bitten,
        };
        let present = |id: &str| {
            entry
                .text(id)
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        };
        Self {
            day,
            entry_id: entry.entry_id,
            date: present(field::DATE),
            time_applied: present(field::TIME_APPLIED),
            outcome,
            notes: present(field::DAILY_NOTES),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub participant_id: String,
    pub phase: Phase,
    pub entries_logged: usize,
    pub trial_length: usize,
    pub progress_percent: u32,
    /// Day the next entry would be logged as. `None` once the trial is over.
    pub next_day: Option<usize>,
    pub can_start_entry: bool,
    pub complete: bool,
    pub start_date: Option<jiff::Timestamp>,
    /// Newest first.
    pub history: Vec<HistoryRow>,
    pub notice: Option<Notice>,
}

impl Dashboard {
    /// `None` unless the session is on the dashboard.
    pub fn for_session(session: &ParticipantSession) -> Option<Self> {
        if !session.phase.is_dashboard() {
            return None;
        }
        let entries = &session.entries;
        let total = entries.len();
        let history = entries
            .iter()
            .enumerate()
            .rev()
            .map(|(idx, entry)| HistoryRow::new(idx + 1, entry))
            .collect();

        Some(Self {
            participant_id: session.participant_id.to_string(),
            phase: session.phase,
            entries_logged: total,
            trial_length: TRIAL_LENGTH,
            progress_percent: entries.progress_percent(),
            next_day: (!entries.is_complete()).then(|| entries.next_day()),
            can_start_entry: session.can_start_entry(),
            complete: entries.is_complete(),
            start_date: session.profile.as_ref().map(|p| p.start_date),
            history,
            notice: session.notice.clone(),
        })
    }
}

/// The form currently open, with only the active questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Form {
    pub questionnaire_id: String,
    pub title: String,
    pub questions: Vec<&'static QuestionDefinition>,
    pub draft: Draft,
    pub notice: Option<Notice>,
    /// A write is in flight; the submit control is disabled.
    pub submitting: bool,
}

impl Form {
    pub fn for_session(session: &ParticipantSession) -> Option<Self> {
        let questionnaire = session.questionnaire()?;
        let title = match session.phase {
            Phase::EntryInProgress => format!(
                "{} - Day {}",
                questionnaire.name(),
                session.entries.next_day()
            ),
            _ => questionnaire.name().to_string(),
        };
        Some(Self {
            questionnaire_id: questionnaire.id().to_string(),
            title,
            questions: questionnaire.active_questions(&session.draft),
            draft: session.draft.clone(),
            notice: session.notice.clone(),
            submitting: session.is_writing(),
        })
    }

    pub fn is_active(&self, question_id: &str) -> bool {
        self.questions.iter().any(|q| q.id == question_id)
    }
}
