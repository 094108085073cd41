//! Prompt domain
//!
//! Interviewer personas as data, and the pure templates that turn a persona,
//! a role, and interview state into prompts for the generative upstream.

mod persona;
mod template;

pub use persona::Persona;
pub use template::InterviewPrompt;
