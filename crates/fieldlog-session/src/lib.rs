//! fieldlog-session
//!
//! The participant session state machine. [`transition::apply`] is a pure
//! `(session, event) -> (session, outcome)` function; the
//! [`controller::SurveyController`] owns one session, feeds it events and
//! performs the store writes the transitions ask for.

pub mod controller;
pub mod error;
pub mod session;
pub mod transition;
pub mod view;
