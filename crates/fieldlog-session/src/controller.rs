use std::sync::Arc;

use fieldlog_core::models::answer::{Answer, Draft};
use fieldlog_core::models::entry::EntryLog;
use fieldlog_core::models::participant::{IdSource, ParticipantId};
use fieldlog_core::models::profile::BaselineProfile;
use fieldlog_core::store_keys;
use fieldlog_storage::records::{load_record, save_record};
use fieldlog_storage::store::KeyValueStore;

use crate::error::SessionError;
use crate::session::{ParticipantSession, PendingWrite};
use crate::transition::{Event, Outcome, apply};
use crate::view::{Dashboard, Form};

/// Drives one participant's session against a key-value store.
///
/// Every state change goes through [`apply`]; the controller only runs the
/// writes a transition asks for and reports the result back.
pub struct SurveyController {
    store: Arc<dyn KeyValueStore>,
    session: ParticipantSession,
}

impl SurveyController {
    /// Resolve the participant, read their records, and land in the right
    /// phase.
    ///
    /// With `resume` the given id is used; otherwise a new one is drawn from
    /// `ids`. Records that exist but cannot be parsed are treated as absent.
    /// A failing store read is fatal.
    pub async fn start(
        store: Arc<dyn KeyValueStore>,
        ids: &dyn IdSource,
        resume: Option<ParticipantId>,
    ) -> Result<Self, SessionError> {
        let participant_id = match resume {
            Some(id) => id,
            None => ids
                .next_id()
                .map_err(|e| SessionError::Initialization(e.to_string()))?,
        };

        let profile: Option<BaselineProfile> =
            load_record(store.as_ref(), &store_keys::baseline(&participant_id))
                .await
                .map_err(|e| SessionError::Initialization(e.to_string()))?;
        let entries: EntryLog = load_record(store.as_ref(), &store_keys::entries(&participant_id))
            .await
            .map_err(|e| SessionError::Initialization(e.to_string()))?
            .unwrap_or_default();

        let mut controller = Self {
            store,
            session: ParticipantSession::new(participant_id),
        };
        controller.dispatch(Event::Loaded { profile, entries });

        tracing::info!(
            participant = %controller.session.participant_id,
            phase = ?controller.session.phase,
            entries = controller.session.entries.len(),
            "session started"
        );
        Ok(controller)
    }

    pub fn session(&self) -> &ParticipantSession {
        &self.session
    }

    pub fn participant_id(&self) -> &ParticipantId {
        &self.session.participant_id
    }

    pub fn dashboard(&self) -> Option<Dashboard> {
        Dashboard::for_session(&self.session)
    }

    pub fn form(&self) -> Option<Form> {
        Form::for_session(&self.session)
    }

    /// Record an answer in the open form. Returns false when no form is open
    /// or the question is not part of it.
    pub fn set_answer(&mut self, question_id: &str, answer: impl Into<Answer>) -> bool {
        let event = Event::SetAnswer {
            question_id: question_id.to_string(),
            answer: answer.into(),
        };
        self.dispatch(event) == Outcome::Applied
    }

    pub fn clear_answer(&mut self, question_id: &str) -> bool {
        let event = Event::ClearAnswer {
            question_id: question_id.to_string(),
        };
        self.dispatch(event) == Outcome::Applied
    }

    /// Open a new daily entry. Returns false once the trial is complete or
    /// while the dashboard is not showing.
    pub fn start_entry(&mut self) -> bool {
        self.dispatch(Event::StartEntry) == Outcome::Applied
    }

    /// Discard the entry in progress without writing anything.
    pub fn cancel_entry(&mut self) -> bool {
        self.dispatch(Event::CancelEntry) == Outcome::Applied
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(Event::DismissNotice);
    }

    pub async fn submit_baseline(&mut self) -> Result<(), SessionError> {
        self.submit(
            "submit baseline",
            Event::SubmitBaseline {
                now: jiff::Timestamp::now(),
            },
        )
        .await
    }

    pub async fn submit_entry(&mut self) -> Result<(), SessionError> {
        self.submit(
            "submit entry",
            Event::SubmitEntry {
                now: jiff::Timestamp::now(),
            },
        )
        .await
    }

    /// Replace the baseline answers, keeping the participant id and start
    /// date.
    pub async fn amend_baseline(&mut self, answers: Draft) -> Result<(), SessionError> {
        self.submit("amend baseline", Event::AmendBaseline { answers })
            .await
    }

    fn dispatch(&mut self, event: Event) -> Outcome {
        let reports_write = matches!(event, Event::WriteSucceeded | Event::WriteFailed { .. });
        if !reports_write && self.session.is_writing() {
            self.abandon_write();
        }

        let name = event.name();
        let transition = apply(&self.session, event);
        tracing::debug!(
            event = name,
            phase = ?transition.session.phase,
            outcome = outcome_name(&transition.outcome),
            "event applied"
        );
        self.session = transition.session;
        transition.outcome
    }

    /// `execute` holds `&mut self` until the store answers, so a write still
    /// pending here belongs to a submit future that was dropped before the
    /// store resolved. It counts as failed and the draft stays for a retry.
    fn abandon_write(&mut self) {
        tracing::warn!(
            participant = %self.session.participant_id,
            "previous write never completed, treating it as failed"
        );
        let transition = apply(
            &self.session,
            Event::WriteFailed {
                error: "write did not complete".to_string(),
            },
        );
        self.session = transition.session;
    }

    async fn submit(&mut self, action: &'static str, event: Event) -> Result<(), SessionError> {
        match self.dispatch(event) {
            Outcome::Applied => Ok(()),
            Outcome::Ignored => Err(SessionError::NotAvailable {
                action,
                phase: self.session.phase,
            }),
            Outcome::Rejected(error) => Err(error.into()),
            Outcome::Write(write) => self.execute(write).await,
        }
    }

    async fn execute(&mut self, write: PendingWrite) -> Result<(), SessionError> {
        let participant = &self.session.participant_id;
        let result = match &write {
            PendingWrite::Baseline { profile, .. } => {
                save_record(
                    self.store.as_ref(),
                    &store_keys::baseline(participant),
                    profile,
                )
                .await
            }
            PendingWrite::Entries { log } => {
                save_record(self.store.as_ref(), &store_keys::entries(participant), log).await
            }
        };

        match result {
            Ok(()) => {
                self.dispatch(Event::WriteSucceeded);
                tracing::info!(
                    participant = %self.session.participant_id,
                    entries = self.session.entries.len(),
                    "record saved"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    participant = %self.session.participant_id,
                    error = %e,
                    "record save failed"
                );
                self.dispatch(Event::WriteFailed {
                    error: e.to_string(),
                });
                Err(SessionError::Persistence(e))
            }
        }
    }
}

fn outcome_name(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Applied => "applied",
        Outcome::Ignored => "ignored",
        Outcome::Rejected(_) => "rejected",
        Outcome::Write(_) => "write",
    }
}
