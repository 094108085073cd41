//! Interview feedback domain.
//!
//! - [`entities::Feedback`] — the structured end-of-interview assessment
//! - [`parsing::parse_feedback`] — extract and validate feedback from raw model text

pub mod entities;
pub mod parsing;
