//! Key conventions for the participant-namespaced key-value store.
//!
//! Pure string functions. Every participant owns exactly two keys.

use crate::models::participant::ParticipantId;

pub const BASELINE_PREFIX: &str = "baseline_";

pub const ENTRIES_PREFIX: &str = "entries_";

pub fn baseline(participant: &ParticipantId) -> String {
    format!("{BASELINE_PREFIX}{participant}")
}

pub fn entries(participant: &ParticipantId) -> String {
    format!("{ENTRIES_PREFIX}{participant}")
}
