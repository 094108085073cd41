//! Interviewer personas.
//!
//! A persona is data, not code: the system framing that sets the
//! interviewer's tone plus the ordered list of question topics the interview
//! walks through. Templates consume personas uniformly, so adding a persona
//! never touches the prompt-building logic.

use serde::{Deserialize, Serialize};

/// A named interviewer persona (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Short identifier, e.g. "senior-mentor".
    pub name: String,
    /// Instructional framing prepended to every prompt.
    pub framing: String,
    /// Ordered question topics, one per interview question.
    pub topics: Vec<String>,
}

impl Persona {
    pub fn new(
        name: impl Into<String>,
        framing: impl Into<String>,
        topics: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            framing: framing.into(),
            topics,
        }
    }

    /// The topic for the question at `index` (0-based).
    ///
    /// Interviews longer than the topic list stay on the final topic.
    pub fn topic(&self, index: usize) -> &str {
        self.topics
            .get(index.min(self.topics.len().saturating_sub(1)))
            .map(String::as_str)
            .unwrap_or("their experience and interest in the role")
    }

    /// The default persona: a seasoned mentor walking through six skills.
    pub fn senior_mentor() -> Self {
        Self::new(
            "senior-mentor",
            "You are an AI interviewer providing thoughtful career advice with the tone of a \
             seasoned mentor.\n\
             Your responses should focus on:\n\
             - Career growth, leadership, and decision-making.\n\
             - Constructive and actionable feedback.\n\
             - Encouraging reflection and professional insight.",
            vec![
                "their background and overview of their experience".to_string(),
                "their problem-solving skills".to_string(),
                "technical skills related to the role".to_string(),
                "teamwork and collaboration".to_string(),
                "leadership or conflict resolution".to_string(),
                "career aspirations and fit for the role".to_string(),
            ],
        )
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::senior_mentor()
    }
}
