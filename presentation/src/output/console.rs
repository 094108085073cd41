//! Console output formatter for interview results

use coach_domain::{Feedback, Message, MessageRole};
use colored::Colorize;

/// Formats interviewer turns and feedback for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one interviewer turn.
    pub fn format_turn(question_count: u32, max_questions: u32, message: &str) -> String {
        format!(
            "\n{}\n{}\n",
            format!("── interviewer ({question_count}/{max_questions} answered) ──")
                .yellow()
                .bold(),
            message
        )
    }

    /// Format the full visible transcript
    pub fn format_transcript(transcript: &[Message]) -> String {
        let mut output = format!("\n{}\n", "=== Transcript ===".cyan().bold());
        for message in transcript {
            let speaker = match message.role {
                MessageRole::User => "you".green().bold(),
                MessageRole::Assistant => "interviewer".yellow().bold(),
            };
            output.push_str(&format!("\n{}: {}\n", speaker, message.content));
        }
        output
    }

    /// Format the complete feedback report
    pub fn format_feedback(feedback: &Feedback) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n\n",
            "=== Interview Feedback ===".cyan().bold()
        ));

        output.push_str(&format!("{}\n", feedback.overall_feedback));

        output.push_str(&format!("\n{}\n", "Strengths:".green().bold()));
        for item in &feedback.strengths {
            output.push_str(&format!("  * {}\n    {}\n", item.point.bold(), item.action));
        }

        output.push_str(&format!("\n{}\n", "Improvements:".yellow().bold()));
        for item in &feedback.improvements {
            output.push_str(&format!("  * {}\n    {}\n", item.point.bold(), item.action));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Rating:".cyan().bold(),
            format!("{}/10", feedback.rating).bold()
        ));

        output.push_str(&format!("\n{}\n", feedback.conclusion.italic()));

        output
    }

    /// Format only the rating and overall feedback (concise output)
    pub fn format_summary(feedback: &Feedback) -> String {
        format!(
            "{} {}\n{}\n",
            "Rating:".cyan().bold(),
            format!("{}/10", feedback.rating).bold(),
            feedback.overall_feedback
        )
    }

    /// Format feedback as JSON
    pub fn format_json(feedback: &Feedback) -> String {
        serde_json::to_string_pretty(feedback).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an inline error bubble
    pub fn format_error(message: &str, details: Option<&str>) -> String {
        let mut output = format!("\n{} {}\n", "error:".red().bold(), message);
        if let Some(details) = details {
            output.push_str(&format!("{}\n{}\n", "raw reply:".dimmed(), details.dimmed()));
        }
        output
    }
}
