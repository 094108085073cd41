//! Prompt templates for the interview flow

use crate::core::role::JobRole;
use crate::prompt::persona::Persona;

/// Templates for generating prompts at each stage of an interview.
///
/// Pure string interpolation over `(persona, role, state)` — deterministic
/// given its inputs, no side effects.
pub struct InterviewPrompt;

impl InterviewPrompt {
    /// Prompt for the opening question of a fresh interview.
    pub fn opening(persona: &Persona, role: &JobRole) -> String {
        format!(
            r#"{framing}

You are interviewing a candidate for the role of {role}.
Begin with a warm one-sentence introduction, then ask ONE clear, focused question about {topic}.
Keep the question concise and specific.
Do not ask multiple questions in one response."#,
            framing = persona.framing,
            role = role,
            topic = persona.topic(0),
        )
    }

    /// Prompt for a follow-up turn: comment on the previous answer, then ask
    /// question number `next_question` (1-based) of `max_questions`.
    pub fn follow_up(
        persona: &Persona,
        role: &JobRole,
        prior_response: &str,
        next_question: u32,
        max_questions: u32,
    ) -> String {
        format!(
            r#"{framing}

You are interviewing a candidate for the role of {role}.
This is question {next_question} of {max_questions}.
The candidate's previous answer was: "{prior_response}"

Provide a brief, encouraging comment on that answer, followed by ONE focused question about {topic}.
The question should be specific and require a detailed response.
Do not include multiple questions or bullet points."#,
            framing = persona.framing,
            role = role,
            topic = persona.topic(next_question.saturating_sub(1) as usize),
        )
    }

    /// Terminal message shown when the final answer has been recorded.
    ///
    /// Produced locally; completing an interview never costs a model call.
    pub fn closing_message(role: &JobRole) -> String {
        format!(
            "That completes the interview for the {role} role. Thank you for your answers — \
             you can now request your structured feedback."
        )
    }

    /// Prompt requesting structured feedback over the full answer transcript.
    ///
    /// Dictates the exact JSON contract [`parse_feedback`] expects: any
    /// deviation by the model is a parse failure, not a prompt ambiguity.
    ///
    /// [`parse_feedback`]: crate::feedback::parsing::parse_feedback
    pub fn feedback_request(persona: &Persona, role: &JobRole, responses: &[String]) -> String {
        let mut prompt = format!(
            r#"{framing}

You are generating final feedback for a completed {role} interview.
The candidate's answers, in order:
"#,
            framing = persona.framing,
            role = role,
        );

        for (index, response) in responses.iter().enumerate() {
            prompt.push_str(&format!("\n--- Answer {} ---\n{}\n", index + 1, response));
        }

        prompt.push_str(
            r#"
Respond with ONLY a JSON object in exactly this shape, and nothing else:
{
    "overallFeedback": "two or three sentences summarizing the interview",
    "strengths": [{"point": "an observed strength", "action": "a concrete action or short proverb"}],
    "improvements": [{"point": "an area to improve", "action": "a concrete action or short proverb"}],
    "rating": <integer between 1 and 10>,
    "conclusion": "one closing sentence"
}
Both lists must contain at least one item, and every item needs both fields."#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role() -> JobRole {
        JobRole::new("Software Engineer")
    }

    #[test]
    fn test_opening_mentions_role_and_first_topic() {
        let persona = Persona::senior_mentor();
        let prompt = InterviewPrompt::opening(&persona, &role());
        assert!(prompt.contains("Software Engineer"));
        assert!(prompt.contains(persona.topic(0)));
        assert!(prompt.contains("ONE clear, focused question"));
    }

    #[test]
    fn test_follow_up_embeds_prior_response_and_count() {
        let persona = Persona::senior_mentor();
        let prompt =
            InterviewPrompt::follow_up(&persona, &role(), "I led a migration.", 3, 6);
        assert!(prompt.contains("question 3 of 6"));
        assert!(prompt.contains("I led a migration."));
        assert!(prompt.contains(persona.topic(2)));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let persona = Persona::senior_mentor();
        let a = InterviewPrompt::follow_up(&persona, &role(), "answer", 2, 6);
        let b = InterviewPrompt::follow_up(&persona, &role(), "answer", 2, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_closing_message_mentions_role() {
        let message = InterviewPrompt::closing_message(&role());
        assert!(message.contains("Software Engineer"));
        assert!(message.contains("feedback"));
    }

    #[test]
    fn test_feedback_request_embeds_answers_and_contract() {
        let persona = Persona::senior_mentor();
        let responses = vec!["First answer.".to_string(), "Second answer.".to_string()];
        let prompt = InterviewPrompt::feedback_request(&persona, &role(), &responses);
        assert!(prompt.contains("--- Answer 1 ---"));
        assert!(prompt.contains("Second answer."));
        assert!(prompt.contains("\"overallFeedback\""));
        assert!(prompt.contains("\"rating\""));
        assert!(prompt.contains("between 1 and 10"));
    }
}
