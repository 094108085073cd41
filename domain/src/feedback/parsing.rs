//! Feedback extraction from free-form model text.
//!
//! Models rarely return bare JSON: the document is usually wrapped in a
//! markdown fence or preceded by prose. Extraction is outermost-brace based —
//! everything from the first `{` to the last `}` — then parsed and validated
//! against the [`Feedback`] contract. Pure domain logic, no I/O.

use crate::core::error::ErrorKind;
use crate::feedback::entities::{Feedback, FeedbackFieldError};
use thiserror::Error;

/// A model reply that did not yield a valid [`Feedback`].
///
/// Every variant keeps the complete raw text so the caller can log it,
/// display it, or resubmit; it is never discarded.
#[derive(Error, Debug)]
pub enum FeedbackParseError {
    #[error("No JSON object found in model reply")]
    NoJsonObject { raw: String },

    #[error("Malformed feedback JSON: {source}")]
    Json {
        source: serde_json::Error,
        raw: String,
    },

    #[error("Feedback failed validation: {source}")]
    Invalid {
        source: FeedbackFieldError,
        raw: String,
    },
}

impl FeedbackParseError {
    /// The original model reply, verbatim.
    pub fn raw_text(&self) -> &str {
        match self {
            FeedbackParseError::NoJsonObject { raw }
            | FeedbackParseError::Json { raw, .. }
            | FeedbackParseError::Invalid { raw, .. } => raw,
        }
    }

    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Parse
    }
}

/// Slice out the outermost JSON object, if any.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text[start..].rfind('}')?;
    Some(&text[start..start + end + 1])
}

/// Parse a model reply as structured [`Feedback`].
///
/// The reply must contain exactly the documented JSON shape:
/// `overallFeedback`, non-empty `strengths`/`improvements` item lists with
/// `point` and `action` on every item, an integer `rating` in [1,10], and a
/// `conclusion`. There is no repair or re-prompt on failure.
pub fn parse_feedback(raw: &str) -> Result<Feedback, FeedbackParseError> {
    let json = extract_json_object(raw).ok_or_else(|| FeedbackParseError::NoJsonObject {
        raw: raw.to_string(),
    })?;

    let feedback: Feedback =
        serde_json::from_str(json).map_err(|source| FeedbackParseError::Json {
            source,
            raw: raw.to_string(),
        })?;

    feedback
        .validate()
        .map_err(|source| FeedbackParseError::Invalid {
            source,
            raw: raw.to_string(),
        })?;

    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::entities::FeedbackItem;

    const WELL_FORMED: &str = r#"{
        "overallFeedback": "Thoughtful answers throughout.",
        "strengths": [{"point": "Structured thinking", "action": "Lead with the conclusion."}],
        "improvements": [{"point": "Few concrete numbers", "action": "What gets measured gets managed."}],
        "rating": 8,
        "conclusion": "Ready for a senior loop."
    }"#;

    #[test]
    fn test_parse_bare_json() {
        let feedback = parse_feedback(WELL_FORMED).unwrap();
        assert_eq!(feedback.rating, 8);
        assert_eq!(feedback.strengths.len(), 1);
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = format!("Here is your feedback:\n```json\n{WELL_FORMED}\n```\nGood luck!");
        let feedback = parse_feedback(&raw).unwrap();
        assert_eq!(feedback.conclusion, "Ready for a senior loop.");
    }

    #[test]
    fn test_not_json_preserves_raw() {
        let err = parse_feedback("not json").unwrap_err();
        assert!(matches!(err, FeedbackParseError::NoJsonObject { .. }));
        assert_eq!(err.raw_text(), "not json");
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_truncated_json_preserves_raw() {
        let raw = r#"{"overallFeedback": "good", "strengths": ["#;
        let err = parse_feedback(raw).unwrap_err();
        assert_eq!(err.raw_text(), raw);
    }

    #[test]
    fn test_missing_rating_rejected() {
        let raw = r#"{
            "overallFeedback": "ok",
            "strengths": [{"point": "a", "action": "b"}],
            "improvements": [{"point": "c", "action": "d"}],
            "conclusion": "done"
        }"#;
        let err = parse_feedback(raw).unwrap_err();
        assert!(matches!(err, FeedbackParseError::Json { .. }));
        assert_eq!(err.raw_text(), raw);
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let raw = WELL_FORMED.replace("\"rating\": 8", "\"rating\": 12");
        let err = parse_feedback(&raw).unwrap_err();
        assert!(matches!(
            err,
            FeedbackParseError::Invalid {
                source: FeedbackFieldError::RatingOutOfRange(12),
                ..
            }
        ));
    }

    #[test]
    fn test_empty_strengths_rejected() {
        let raw = WELL_FORMED.replace(
            r#"[{"point": "Structured thinking", "action": "Lead with the conclusion."}]"#,
            "[]",
        );
        let err = parse_feedback(&raw).unwrap_err();
        assert!(matches!(
            err,
            FeedbackParseError::Invalid {
                source: FeedbackFieldError::NoStrengths,
                ..
            }
        ));
    }

    #[test]
    fn test_round_trip() {
        let original = Feedback {
            overall_feedback: "Strong showing.".to_string(),
            strengths: vec![FeedbackItem::new("Depth", "Keep going deep.")],
            improvements: vec![FeedbackItem::new("Pace", "Slow is smooth, smooth is fast.")],
            rating: 9,
            conclusion: "Hire.".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let parsed = parse_feedback(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
