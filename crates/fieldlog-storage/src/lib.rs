//! fieldlog-storage
//!
//! The key-value persistence contract the survey engine writes through, two
//! implementations of it (in-memory and one-file-per-key on disk), and JSON
//! helpers for whole-record loads and saves.

pub mod error;
pub mod file;
pub mod memory;
pub mod records;
pub mod store;
