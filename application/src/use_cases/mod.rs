//! Use cases — the interview flows
//!
//! - [`advance_interview`] — the question/completion state machine
//! - [`generate_feedback`] — end-of-interview structured feedback

pub mod advance_interview;
pub mod generate_feedback;
mod shared;
