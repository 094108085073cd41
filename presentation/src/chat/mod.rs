//! Interactive interview REPL

mod repl;

pub use repl::InterviewRepl;
