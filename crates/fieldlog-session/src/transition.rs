use fieldlog_core::models::answer::{Answer, Draft};
use fieldlog_core::models::entry::EntryLog;
use fieldlog_core::models::profile::BaselineProfile;
use fieldlog_survey::Questionnaire;
use fieldlog_survey::validation::ValidationError;

use crate::session::{BASELINE, DAILY, Notice, ParticipantSession, PendingWrite, Phase, notices};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Stored records were read at session start.
    Loaded {
        profile: Option<BaselineProfile>,
        entries: EntryLog,
    },
    SetAnswer {
        question_id: String,
        answer: Answer,
    },
    ClearAnswer {
        question_id: String,
    },
    SubmitBaseline {
        now: jiff::Timestamp,
    },
    /// Re-submit a complete baseline from the dashboard.
    AmendBaseline {
        answers: Draft,
    },
    StartEntry,
    CancelEntry,
    SubmitEntry {
        now: jiff::Timestamp,
    },
    WriteSucceeded,
    WriteFailed {
        error: String,
    },
    DismissNotice,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loaded { .. } => "loaded",
            Self::SetAnswer { .. } => "set_answer",
            Self::ClearAnswer { .. } => "clear_answer",
            Self::SubmitBaseline { .. } => "submit_baseline",
            Self::AmendBaseline { .. } => "amend_baseline",
            Self::StartEntry => "start_entry",
            Self::CancelEntry => "cancel_entry",
            Self::SubmitEntry { .. } => "submit_entry",
            Self::WriteSucceeded => "write_succeeded",
            Self::WriteFailed { .. } => "write_failed",
            Self::DismissNotice => "dismiss_notice",
        }
    }
}

/// What an event did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    /// Not available in the current state; the session is unchanged.
    Ignored,
    /// Validation failed; the session carries the matching error notice.
    Rejected(ValidationError),
    /// The caller must write this structure to the store and report back
    /// with [`Event::WriteSucceeded`] or [`Event::WriteFailed`].
    Write(PendingWrite),
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub session: ParticipantSession,
    pub outcome: Outcome,
}

impl Transition {
    fn ignored(session: &ParticipantSession) -> Self {
        Self {
            session: session.clone(),
            outcome: Outcome::Ignored,
        }
    }

    fn applied(session: ParticipantSession) -> Self {
        Self {
            session,
            outcome: Outcome::Applied,
        }
    }
}

/// Apply `event` to `session`.
pub fn apply(session: &ParticipantSession, event: Event) -> Transition {
    match event {
        Event::Loaded { profile, entries } => loaded(session, profile, entries),
        Event::SetAnswer {
            question_id,
            answer,
        } => edit_draft(session, &question_id, Some(answer)),
        Event::ClearAnswer { question_id } => edit_draft(session, &question_id, None),
        Event::SubmitBaseline { now } => submit_baseline(session, now),
        Event::AmendBaseline { answers } => amend_baseline(session, answers),
        Event::StartEntry => start_entry(session),
        Event::CancelEntry => cancel_entry(session),
        Event::SubmitEntry { now } => submit_entry(session, now),
        Event::WriteSucceeded => write_succeeded(session),
        Event::WriteFailed { error } => write_failed(session, &error),
        Event::DismissNotice => {
            let mut next = session.clone();
            next.notice = None;
            Transition::applied(next)
        }
    }
}

fn loaded(
    session: &ParticipantSession,
    profile: Option<BaselineProfile>,
    entries: EntryLog,
) -> Transition {
    if session.phase != Phase::NewParticipant {
        return Transition::ignored(session);
    }
    let mut next = session.clone();
    next.phase = match profile {
        None => Phase::BaselineCapture,
        Some(_) => Phase::for_log(&entries),
    };
    next.profile = profile;
    next.entries = entries;
    next.draft.clear();
    Transition::applied(next)
}

fn edit_draft(session: &ParticipantSession, question_id: &str, answer: Option<Answer>) -> Transition {
    let Some(questionnaire) = session.questionnaire() else {
        return Transition::ignored(session);
    };
    if questionnaire.question(question_id).is_none() {
        return Transition::ignored(session);
    }

    let mut next = session.clone();
    match answer {
        Some(answer) => next.draft.set(question_id, answer),
        None => {
            next.draft.remove(question_id);
        }
    }
    if next.notice.as_ref().is_some_and(Notice::is_error) {
        next.notice = None;
    }
    Transition::applied(next)
}

fn reject(session: &ParticipantSession, error: ValidationError) -> Transition {
    let mut next = session.clone();
    next.notice = Some(Notice::for_question(&error.message, &error.question_id));
    Transition {
        session: next,
        outcome: Outcome::Rejected(error),
    }
}

fn begin_write(session: &ParticipantSession, write: PendingWrite) -> Transition {
    let mut next = session.clone();
    next.notice = None;
    next.pending = Some(write.clone());
    Transition {
        session: next,
        outcome: Outcome::Write(write),
    }
}

fn submit_baseline(session: &ParticipantSession, now: jiff::Timestamp) -> Transition {
    if session.phase != Phase::BaselineCapture || session.is_writing() {
        return Transition::ignored(session);
    }
    if let Err(error) = BASELINE.first_invalid(&session.draft) {
        return reject(session, error);
    }
    let answers = known_answers(&BASELINE, &session.draft);
    let profile = BaselineProfile::new(session.participant_id.clone(), answers, now);
    begin_write(
        session,
        PendingWrite::Baseline {
            profile,
            amendment: false,
        },
    )
}

fn amend_baseline(session: &ParticipantSession, answers: Draft) -> Transition {
    let Some(current) = session.profile.as_ref() else {
        return Transition::ignored(session);
    };
    if !session.phase.is_dashboard() || session.is_writing() {
        return Transition::ignored(session);
    }
    let answers = known_answers(&BASELINE, &answers);
    if let Err(error) = BASELINE.first_invalid(&answers) {
        return reject(session, error);
    }
    begin_write(
        session,
        PendingWrite::Baseline {
            profile: current.amended(answers),
            amendment: true,
        },
    )
}

/// Only answers to questions of `questionnaire` reach a record. Anything else
/// would be flattened next to the record's own fields.
fn known_answers(questionnaire: &dyn Questionnaire, draft: &Draft) -> Draft {
    draft
        .iter()
        .filter(|(id, _)| {
            let known = questionnaire.question(id).is_some();
            if !known {
                tracing::debug!(question_id = id, "dropping answer to unknown question");
            }
            known
        })
        .map(|(id, answer)| (id, answer.clone()))
        .collect()
}

fn start_entry(session: &ParticipantSession) -> Transition {
    if !session.can_start_entry() {
        return Transition::ignored(session);
    }
    let mut next = session.clone();
    next.phase = Phase::EntryInProgress;
    next.draft.clear();
    next.notice = None;
    Transition::applied(next)
}

fn cancel_entry(session: &ParticipantSession) -> Transition {
    if session.phase != Phase::EntryInProgress || session.is_writing() {
        return Transition::ignored(session);
    }
    let mut next = session.clone();
    next.phase = Phase::for_log(&session.entries);
    next.draft.clear();
    next.notice = None;
    Transition::applied(next)
}

fn submit_entry(session: &ParticipantSession, now: jiff::Timestamp) -> Transition {
    if session.phase != Phase::EntryInProgress || session.is_writing() {
        return Transition::ignored(session);
    }
    if let Err(error) = DAILY.first_invalid(&session.draft) {
        return reject(session, error);
    }
    match session
        .entries
        .with_submission(known_answers(&DAILY, &session.draft), now)
    {
        Ok(log) => begin_write(session, PendingWrite::Entries { log }),
        Err(e) => {
            tracing::warn!(error = %e, "entry submitted against a full log");
            Transition::ignored(session)
        }
    }
}

fn write_succeeded(session: &ParticipantSession) -> Transition {
    let Some(write) = session.pending.clone() else {
        return Transition::ignored(session);
    };
    let mut next = session.clone();
    next.pending = None;
    match write {
        PendingWrite::Baseline {
            profile,
            amendment: true,
        } => {
            next.profile = Some(profile);
            next.notice = Some(Notice::success(notices::BASELINE_AMENDED));
        }
        PendingWrite::Baseline {
            profile,
            amendment: false,
        } => {
            next.profile = Some(profile);
            next.draft.clear();
            next.phase = Phase::for_log(&next.entries);
            next.notice = Some(Notice::success(notices::BASELINE_SAVED));
        }
        PendingWrite::Entries { log } => {
            next.entries = log;
            next.draft.clear();
            next.phase = Phase::for_log(&next.entries);
            let text = if next.entries.is_complete() {
                notices::TRIAL_COMPLETE
            } else {
                notices::ENTRY_SAVED
            };
            next.notice = Some(Notice::success(text));
        }
    }
    Transition::applied(next)
}

fn write_failed(session: &ParticipantSession, error: &str) -> Transition {
    let Some(write) = session.pending.as_ref() else {
        return Transition::ignored(session);
    };
    tracing::debug!(error, "write failed, keeping draft for retry");
    let text = match write {
        PendingWrite::Baseline { .. } => notices::BASELINE_SAVE_FAILED,
        PendingWrite::Entries { .. } => notices::ENTRY_SAVE_FAILED,
    };
    let mut next = session.clone();
    next.pending = None;
    next.notice = Some(Notice::error(text));
    Transition::applied(next)
}
