//! fieldlog-core
//!
//! Pure record types for the field trial: answers, drafts, the baseline
//! profile, daily entries and the capped entry log, plus participant
//! identifiers and store key conventions. No storage or UI dependency.

pub mod error;
pub mod models;
pub mod store_keys;
