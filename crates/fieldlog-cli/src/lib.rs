//! fieldlog-cli library root.
//!
//! Re-exports the command layer so integration tests can drive it against
//! a temporary config and data directory.

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
