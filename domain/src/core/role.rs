//! Job role value object

use serde::{Deserialize, Serialize};

/// Maximum accepted length for a job title, in bytes.
pub const MAX_ROLE_LEN: usize = 256;

/// The job title a candidate is interviewing for (Value Object)
///
/// Always trimmed and non-empty. Interpolated verbatim into every prompt,
/// so the length cap also bounds prompt growth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRole {
    title: String,
}

impl JobRole {
    /// Create a new job role
    ///
    /// # Panics
    /// Panics if the title is empty, only whitespace, or too long
    pub fn new(title: impl Into<String>) -> Self {
        Self::try_new(title).expect("job role must be non-empty and within length limit")
    }

    /// Try to create a new job role, returning None if invalid
    pub fn try_new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() || trimmed.len() > MAX_ROLE_LEN {
            None
        } else {
            Some(Self {
                title: trimmed.to_string(),
            })
        }
    }

    /// Get the job title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Consume and return the inner title
    pub fn into_title(self) -> String {
        self.title
    }
}

impl std::fmt::Display for JobRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_creation() {
        let role = JobRole::new("Software Engineer");
        assert_eq!(role.title(), "Software Engineer");
    }

    #[test]
    fn test_role_is_trimmed() {
        let role = JobRole::new("  Data Scientist \n");
        assert_eq!(role.title(), "Data Scientist");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(JobRole::try_new("").is_none());
        assert!(JobRole::try_new("   ").is_none());
    }

    #[test]
    fn test_try_new_too_long() {
        let long = "x".repeat(MAX_ROLE_LEN + 1);
        assert!(JobRole::try_new(long).is_none());
    }

    #[test]
    #[should_panic]
    fn test_empty_role_panics() {
        JobRole::new("");
    }

    #[test]
    fn test_serde_transparent() {
        let role = JobRole::new("Product Manager");
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"Product Manager\"");
        let back: JobRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}
