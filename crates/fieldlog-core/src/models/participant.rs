use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Prefix shared by every generated participant id.
pub const ID_PREFIX: &str = "MB2W";

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque participant identifier.
///
/// Shown to the participant as a recovery token, so it is restricted to
/// characters that survive being read aloud or typed on another device:
/// ASCII letters, digits, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Parse a user-supplied token. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let well_formed = !trimmed.is_empty()
            && trimmed.len() <= 64
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !well_formed {
            return Err(CoreError::InvalidParticipantId(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build a fresh id of the form `MB2W_<unix-millis>_<9 base-36 chars>`.
    pub fn generate(now: jiff::Timestamp) -> Self {
        let mut entropy = Uuid::new_v4().as_u128();
        let mut suffix = String::with_capacity(SUFFIX_LEN);
        for _ in 0..SUFFIX_LEN {
            suffix.push(BASE36[(entropy % 36) as usize] as char);
            entropy /= 36;
        }
        Self(format!("{ID_PREFIX}_{}_{suffix}", now.as_millisecond()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ParticipantId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ParticipantId> for String {
    fn from(id: ParticipantId) -> Self {
        id.0
    }
}

/// Source of new participant ids.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> Result<ParticipantId, CoreError>;
}

/// Timestamp plus random suffix, see [`ParticipantId::generate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> Result<ParticipantId, CoreError> {
        Ok(ParticipantId::generate(jiff::Timestamp::now()))
    }
}
