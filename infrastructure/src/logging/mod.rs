//! Transcript logging adapters

mod jsonl_logger;

pub use jsonl_logger::JsonlTranscriptLogger;
