//! Feedback entities and field validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive rating bounds.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

/// A single strength or improvement observation.
///
/// `point` names the observation; `action` carries the concrete follow-up the
/// interviewer suggests (an action to take, or a short proverb to remember).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub point: String,
    pub action: String,
}

impl FeedbackItem {
    pub fn new(point: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            point: point.into(),
            action: action.into(),
        }
    }
}

/// Structured end-of-interview assessment (Entity)
///
/// Produced once per completed interview and immutable afterwards. The wire
/// shape is the camelCase JSON contract the feedback prompt dictates to the
/// model, so a parsed value serializes back to the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub overall_feedback: String,
    pub strengths: Vec<FeedbackItem>,
    pub improvements: Vec<FeedbackItem>,
    pub rating: u8,
    pub conclusion: String,
}

/// A required field missing, empty, or out of range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackFieldError {
    #[error("overallFeedback must not be empty")]
    EmptyOverallFeedback,

    #[error("conclusion must not be empty")]
    EmptyConclusion,

    #[error("strengths must not be empty")]
    NoStrengths,

    #[error("improvements must not be empty")]
    NoImprovements,

    #[error("{list}[{index}] has an empty {field}")]
    IncompleteItem {
        list: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("rating must be between {MIN_RATING} and {MAX_RATING}, got {0}")]
    RatingOutOfRange(u8),
}

impl Feedback {
    /// Check every field against the contract: non-empty prose, non-empty
    /// item lists with both halves present, rating within bounds.
    pub fn validate(&self) -> Result<(), FeedbackFieldError> {
        if self.overall_feedback.trim().is_empty() {
            return Err(FeedbackFieldError::EmptyOverallFeedback);
        }
        if self.conclusion.trim().is_empty() {
            return Err(FeedbackFieldError::EmptyConclusion);
        }
        if self.strengths.is_empty() {
            return Err(FeedbackFieldError::NoStrengths);
        }
        if self.improvements.is_empty() {
            return Err(FeedbackFieldError::NoImprovements);
        }
        for (list, items) in [
            ("strengths", &self.strengths),
            ("improvements", &self.improvements),
        ] {
            for (index, item) in items.iter().enumerate() {
                if item.point.trim().is_empty() {
                    return Err(FeedbackFieldError::IncompleteItem {
                        list,
                        index,
                        field: "point",
                    });
                }
                if item.action.trim().is_empty() {
                    return Err(FeedbackFieldError::IncompleteItem {
                        list,
                        index,
                        field: "action",
                    });
                }
            }
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(FeedbackFieldError::RatingOutOfRange(self.rating));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_feedback() -> Feedback {
        Feedback {
            overall_feedback: "Solid performance with clear explanations.".to_string(),
            strengths: vec![FeedbackItem::new(
                "Clear communication",
                "Keep structuring answers as situation, action, result.",
            )],
            improvements: vec![FeedbackItem::new(
                "Vague on metrics",
                "Measure twice, cut once: quantify your impact.",
            )],
            rating: 7,
            conclusion: "A promising candidate.".to_string(),
        }
    }

    #[test]
    fn test_valid_feedback_passes() {
        assert!(valid_feedback().validate().is_ok());
    }

    #[test]
    fn test_empty_overall_feedback_rejected() {
        let mut feedback = valid_feedback();
        feedback.overall_feedback = "  ".to_string();
        assert_eq!(
            feedback.validate(),
            Err(FeedbackFieldError::EmptyOverallFeedback)
        );
    }

    #[test]
    fn test_empty_strengths_rejected() {
        let mut feedback = valid_feedback();
        feedback.strengths.clear();
        assert_eq!(feedback.validate(), Err(FeedbackFieldError::NoStrengths));
    }

    #[test]
    fn test_item_missing_action_rejected() {
        let mut feedback = valid_feedback();
        feedback.improvements[0].action = String::new();
        assert_eq!(
            feedback.validate(),
            Err(FeedbackFieldError::IncompleteItem {
                list: "improvements",
                index: 0,
                field: "action",
            })
        );
    }

    #[test]
    fn test_rating_bounds() {
        let mut feedback = valid_feedback();
        feedback.rating = 0;
        assert_eq!(
            feedback.validate(),
            Err(FeedbackFieldError::RatingOutOfRange(0))
        );
        feedback.rating = 11;
        assert_eq!(
            feedback.validate(),
            Err(FeedbackFieldError::RatingOutOfRange(11))
        );
        feedback.rating = 10;
        assert!(feedback.validate().is_ok());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = serde_json::to_string(&valid_feedback()).unwrap();
        assert!(json.contains("\"overallFeedback\""));
        assert!(json.contains("\"point\""));
        assert!(json.contains("\"action\""));
        assert!(!json.contains("overall_feedback"));
    }
}
