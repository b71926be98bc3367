use std::fmt::Write;

use quiz_spec::{AnswerLog, RenderPayload, RenderProgress, RenderQuestion, WellnessResult};

/// Controls which bits of state the shell prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: question prompts only.
    Clean,
    /// Verbose output: statuses, scores, input hints.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Prints prompts and progress as the session yields questions.
pub struct QuizPresenter {
    verbosity: Verbosity,
    header_printed: bool,
    show_answers_json: bool,
}

impl QuizPresenter {
    pub fn new(verbosity: Verbosity, show_answers_json: bool) -> Self {
        Self {
            verbosity,
            header_printed: false,
            show_answers_json,
        }
    }

    pub fn show_header(&mut self, payload: &RenderPayload) {
        if self.header_printed {
            return;
        }
        println!("Quiz: {}", payload.quiz_title);
        if let Some(help) = &payload.help {
            println!("{}", help);
        }
        self.header_printed = true;
    }

    pub fn show_status(&self, payload: &RenderPayload) {
        if self.verbosity.is_verbose() {
            println!(
                "Status: {} ({}/{})",
                payload.status.as_str(),
                payload.progress.answered,
                payload.progress.total
            );
        }
    }

    pub fn show_prompt(&self, prompt: &PromptContext) {
        println!("{}/{} {}", prompt.index, prompt.total, prompt.prompt);
        for (number, label) in prompt.options.iter().enumerate() {
            println!("  {}) {}", number + 1, label);
        }
        if self.verbosity.is_verbose() {
            println!("Enter an option number, an answer tag, 'restart', or 'exit'.");
        }
    }

    pub fn show_parse_error(&self, error: &AnswerParseError) {
        eprintln!("Invalid answer: {}", error.user_message);
        if let Some(debug) = &error.debug_message {
            eprintln!("  Expected: {}", debug);
        }
    }

    pub fn show_result(&self, result: &WellnessResult) {
        println!("Done ✅");
        println!("{}", result.message);
        if self.verbosity.is_verbose() {
            println!(
                "Scores: eat {} / live {}",
                result.scorecard.eat, result.scorecard.live
            );
        }
    }

    pub fn show_completion(&self, log: &AnswerLog) {
        match log.to_cbor() {
            Ok(bytes) => {
                println!("Answers (CBOR hex): {}", encode_hex(&bytes));
            }
            Err(err) => {
                eprintln!("Failed to serialize answers to CBOR: {}", err);
            }
        }
        if self.show_answers_json {
            match log.to_json_pretty() {
                Ok(pretty) => println!("{}", pretty),
                Err(err) => {
                    eprintln!("Failed to serialize answers to JSON: {}", err);
                }
            }
        }
    }
}

/// Context used to format a single prompt.
pub struct PromptContext {
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

impl PromptContext {
    pub fn new(question: &RenderQuestion, progress: &RenderProgress) -> Self {
        Self {
            index: question.position + 1,
            total: progress.total,
            prompt: question.prompt.clone(),
            options: question
                .options
                .iter()
                .map(|option| option.label.clone())
                .collect(),
        }
    }
}

/// Error produced when parsing answers typed by the user.
#[derive(Debug)]
pub struct AnswerParseError {
    pub user_message: String,
    pub debug_message: Option<String>,
}

impl AnswerParseError {
    pub fn new(user_message: impl Into<String>, debug_message: Option<String>) -> Self {
        Self {
            user_message: user_message.into(),
            debug_message,
        }
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(&mut encoded, "{:02x}", byte).expect("writing to string cannot fail");
    }
    encoded
}
