//! Core domain concepts shared across all subdomains.
//!
//! - [`role::JobRole`] — a validated job title the candidate interviews for
//! - [`error::DomainError`] — domain-level errors and their [`error::ErrorKind`]

pub mod error;
pub mod role;
