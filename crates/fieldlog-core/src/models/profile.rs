use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::answer::{Answer, Draft};
use super::participant::ParticipantId;

/// One-time baseline profile, persisted under `baseline_{participantId}`.
///
/// Answers are flattened to the top level of the JSON object next to
/// `userId` and `startDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineProfile {
    #[serde(flatten)]
    pub answers: BTreeMap<String, Answer>,
    pub user_id: ParticipantId,
    pub start_date: jiff::Timestamp,
}

impl BaselineProfile {
    pub fn new(user_id: ParticipantId, answers: Draft, start_date: jiff::Timestamp) -> Self {
        Self {
            answers: answers.into_answers(),
            user_id,
            start_date,
        }
    }

    /// Replace the answers, keeping the participant and the original start date.
    pub fn amended(&self, answers: Draft) -> Self {
        Self {
            answers: answers.into_answers(),
            user_id: self.user_id.clone(),
            start_date: self.start_date,
        }
    }

    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }
}
