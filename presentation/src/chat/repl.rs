//! REPL (Read-Eval-Print Loop) for the interactive interview

use crate::cli::commands::OutputFormat;
use crate::output::console::ConsoleFormatter;
use crate::output::payload::ErrorPayload;
use crate::progress::reporter::ThinkingSpinner;
use coach_application::{
    AdvanceInput, AdvanceInterviewUseCase, FeedbackInput, GenerateFeedbackUseCase,
};
use coach_domain::Message;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Interactive interview REPL
///
/// Drives one full interview: job title, the question/answer loop, and the
/// final feedback report. Errors render as inline bubbles and never end the
/// session — the candidate just answers (or asks for feedback) again.
pub struct InterviewRepl {
    advance: AdvanceInterviewUseCase,
    feedback: GenerateFeedbackUseCase,
    max_questions: u32,
    session_id: String,
    role: Option<String>,
    output: OutputFormat,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl InterviewRepl {
    pub fn new(
        advance: AdvanceInterviewUseCase,
        feedback: GenerateFeedbackUseCase,
        max_questions: u32,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            advance,
            feedback,
            max_questions,
            session_id: session_id.into(),
            role: None,
            output: OutputFormat::Full,
            show_progress: true,
            history_file: None,
        }
    }

    /// Preselect the job role instead of prompting for it.
    pub fn with_role(mut self, role: Option<String>) -> Self {
        self.role = role;
        self
    }

    /// Set the feedback output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set whether to show the thinking spinner.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the readline history file location.
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("interview-coach").join("history.txt"))
        });
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        let role = match self.pick_role(&mut rl)? {
            Some(role) => role,
            None => return Ok(()),
        };

        // The visible transcript: append-only, echoed with the final report
        // in full output mode.
        let mut transcript: Vec<Message> = Vec::new();
        let mut opened = self.opening_turn(&role, &mut transcript).await;
        let mut complete = false;

        loop {
            let readline = rl.readline("you> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self
                            .handle_command(line, &role, &mut opened, &mut transcript)
                            .await
                        {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if !opened {
                        println!("No question yet — type /retry to ask the interviewer again.");
                        continue;
                    }
                    if complete {
                        println!(
                            "The interview is over — /feedback for your results, /quit to exit."
                        );
                        continue;
                    }

                    complete = self.answer_turn(&role, line, &mut transcript).await;
                    if complete && self.feedback_turn(&transcript).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        interview-coach - Mock Interview     │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "{} questions, one at a time. Answer in your own words; feedback comes at the end.",
            self.max_questions
        );
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /feedback - Request feedback (after the last question)");
        println!("  /retry    - Re-ask for the opening question after an error");
        println!("  /quit     - Exit");
        println!();
    }

    /// Ask for the job title unless one was preselected. `None` means EOF.
    fn pick_role(&self, rl: &mut DefaultEditor) -> RlResult<Option<String>> {
        if let Some(role) = &self.role
            && !role.trim().is_empty()
        {
            return Ok(Some(role.trim().to_string()));
        }
        loop {
            match rl.readline("Job title: ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Ok(Some(line.to_string()));
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err),
            }
        }
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    async fn handle_command(
        &self,
        cmd: &str,
        role: &str,
        opened: &mut bool,
        transcript: &mut Vec<Message>,
    ) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /feedback        - Request feedback (after the last question)");
                println!("  /retry           - Re-ask for the opening question after an error");
                println!("  /quit, /exit, /q - Exit");
                println!();
                false
            }
            "/feedback" => {
                self.feedback_turn(transcript).await;
                false
            }
            "/retry" => {
                if *opened {
                    println!("The interview is already under way.");
                } else {
                    *opened = self.opening_turn(role, transcript).await;
                }
                false
            }
            _ => {
                println!("Unknown command: {} (try /help)", cmd);
                false
            }
        }
    }

    /// Ask the opening question. Returns true on success.
    async fn opening_turn(&self, role: &str, transcript: &mut Vec<Message>) -> bool {
        let spinner = ThinkingSpinner::start("The interviewer is thinking...", self.show_progress);
        let result = self
            .advance
            .execute(AdvanceInput::new(self.session_id.as_str(), role))
            .await;
        spinner.finish();

        match result {
            Ok(output) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_turn(
                        output.question_count,
                        self.max_questions,
                        &output.message
                    )
                );
                transcript.push(Message::assistant(output.message));
                true
            }
            Err(e) => {
                print!("{}", ConsoleFormatter::format_error(&e.to_string(), None));
                println!("Type /retry to try again.");
                false
            }
        }
    }

    /// Submit one answer. Returns true once the interview is complete.
    async fn answer_turn(
        &self,
        role: &str,
        response: &str,
        transcript: &mut Vec<Message>,
    ) -> bool {
        let spinner = ThinkingSpinner::start("The interviewer is thinking...", self.show_progress);
        let result = self
            .advance
            .execute(AdvanceInput::new(self.session_id.as_str(), role).with_response(response))
            .await;
        spinner.finish();

        match result {
            Ok(output) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_turn(
                        output.question_count,
                        self.max_questions,
                        &output.message
                    )
                );
                transcript.push(Message::user(response));
                transcript.push(Message::assistant(output.message));
                output.is_complete
            }
            Err(e) => {
                print!("{}", ConsoleFormatter::format_error(&e.to_string(), None));
                println!("Your answer was not recorded — please send it again.");
                false
            }
        }
    }

    /// Generate and print feedback. Returns true on success.
    async fn feedback_turn(&self, transcript: &[Message]) -> bool {
        let spinner = ThinkingSpinner::start("Preparing your feedback...", self.show_progress);
        let result = self
            .feedback
            .execute(FeedbackInput::new(self.session_id.as_str()))
            .await;
        spinner.finish();

        match result {
            Ok(feedback) => {
                let output = match self.output {
                    OutputFormat::Full => format!(
                        "{}{}",
                        ConsoleFormatter::format_transcript(transcript),
                        ConsoleFormatter::format_feedback(&feedback)
                    ),
                    OutputFormat::Summary => ConsoleFormatter::format_summary(&feedback),
                    OutputFormat::Json => ConsoleFormatter::format_json(&feedback),
                };
                println!("{}", output);
                true
            }
            Err(e) => {
                if matches!(self.output, OutputFormat::Json) {
                    let payload = ErrorPayload::new(
                        e.kind(),
                        e.to_string(),
                        e.details().map(String::from),
                    );
                    println!("{}", payload.to_json());
                } else {
                    print!(
                        "{}",
                        ConsoleFormatter::format_error(&e.to_string(), e.details())
                    );
                }
                println!("Type /feedback to try again.");
                false
            }
        }
    }
}
