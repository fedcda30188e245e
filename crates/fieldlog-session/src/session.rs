use fieldlog_core::models::answer::Draft;
use fieldlog_core::models::entry::EntryLog;
use fieldlog_core::models::participant::ParticipantId;
use fieldlog_core::models::profile::BaselineProfile;
use fieldlog_survey::Questionnaire;
use fieldlog_survey::questionnaires::baseline::Baseline;
use fieldlog_survey::questionnaires::daily::DailyLog;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub static BASELINE: Baseline = Baseline;
pub static DAILY: DailyLog = DailyLog;

/// User-facing notice texts.
pub mod notices {
    pub const BASELINE_SAVED: &str =
        "Welcome to the 2-week trial! Start logging your daily applications.";
    pub const BASELINE_AMENDED: &str = "Baseline profile updated.";
    pub const ENTRY_SAVED: &str = "Daily entry saved successfully!";
    pub const TRIAL_COMPLETE: &str =
        "Thank you for completing your 14-day trial. Your data will help us improve Mosquito Butter!";
    pub const BASELINE_SAVE_FAILED: &str = "Failed to save baseline data. Please try again.";
    pub const ENTRY_SAVE_FAILED: &str = "Failed to save entry. Please try again.";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    /// Created, nothing loaded yet.
    NewParticipant,
    /// No baseline on record; filling in the baseline questionnaire.
    BaselineCapture,
    /// Baseline on record, fewer than 14 entries.
    DailyDashboard,
    /// Filling in a daily entry.
    EntryInProgress,
    /// Dashboard with all 14 entries logged. History stays visible; new
    /// entries are disabled.
    TrialComplete,
}

impl Phase {
    pub fn for_log(entries: &EntryLog) -> Self {
        if entries.is_complete() {
            Self::TrialComplete
        } else {
            Self::DailyDashboard
        }
    }

    pub fn is_dashboard(self) -> bool {
        matches!(self, Self::DailyDashboard | Self::TrialComplete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoticeKind {
    Success,
    Error,
}

/// The last message surfaced to the participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Question to scroll to, for validation errors.
    pub question_id: Option<String>,
}

impl Notice {
    pub fn success(text: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.to_string(),
            question_id: None,
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.to_string(),
            question_id: None,
        }
    }

    pub fn for_question(text: &str, question_id: &str) -> Self {
        Self {
            question_id: Some(question_id.to_string()),
            ..Self::error(text)
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// A full-structure write the session is waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingWrite {
    Baseline {
        profile: BaselineProfile,
        amendment: bool,
    },
    Entries {
        log: EntryLog,
    },
}

/// Everything the controller knows about one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSession {
    pub participant_id: ParticipantId,
    pub phase: Phase,
    /// Answers being edited: the baseline during capture, otherwise the
    /// daily entry in progress.
    pub draft: Draft,
    pub profile: Option<BaselineProfile>,
    pub entries: EntryLog,
    pub notice: Option<Notice>,
    /// Set while a write is in flight. Submits are refused until it resolves.
    pub pending: Option<PendingWrite>,
}

impl ParticipantSession {
    pub fn new(participant_id: ParticipantId) -> Self {
        Self {
            participant_id,
            phase: Phase::NewParticipant,
            draft: Draft::new(),
            profile: None,
            entries: EntryLog::new(),
            notice: None,
            pending: None,
        }
    }

    pub fn is_writing(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the "new entry" action is enabled.
    pub fn can_start_entry(&self) -> bool {
        self.phase == Phase::DailyDashboard && !self.entries.is_complete() && !self.is_writing()
    }

    /// Whether the submit action of the current form is enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, Phase::BaselineCapture | Phase::EntryInProgress) && !self.is_writing()
    }

    /// The questionnaire the draft is being filled against, if a form is open.
    pub fn questionnaire(&self) -> Option<&'static dyn Questionnaire> {
        match self.phase {
            Phase::BaselineCapture => Some(&BASELINE),
            Phase::EntryInProgress => Some(&DAILY),
            Phase::NewParticipant | Phase::DailyDashboard | Phase::TrialComplete => None,
        }
    }
}
