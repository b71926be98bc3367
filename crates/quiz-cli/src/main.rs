mod presenter;

use clap::{Parser, Subcommand, ValueEnum};
use presenter::{AnswerParseError, PromptContext, QuizPresenter, Verbosity};
use quiz_spec::{
    AnswerLog, AnswerTag, QuestionSpec, QuizSession, QuizSpec, Submission, ValidationResult,
    answers_schema, build_render_payload, example_answers, render_card, render_json_ui,
    spec_schema, validate_log, validate_spec,
};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Text-based wellness quiz CLI",
    long_about = "Runs the wellness-type quiz in a text shell and provides classify, validate, \
                  and schema helpers backed by quiz-spec"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderMode {
    Text,
    Card,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SchemaTarget {
    Spec,
    Answers,
}

#[derive(Subcommand)]
enum Command {
    /// Run the quiz interactively in a text shell.
    Run {
        /// Path to a quiz definition JSON (defaults to the built-in wellness quiz).
        #[arg(long, value_name = "SPEC")]
        spec: Option<PathBuf>,
        /// Show verbose output (statuses, scores, input hints).
        #[arg(long, alias = "debug")]
        verbose: bool,
        /// Also emit the answer log as pretty JSON on completion.
        #[arg(long)]
        answers_json: bool,
        /// Render output mode for each step.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Classify a recorded answer sequence without prompting.
    Classify {
        /// Path to a quiz definition JSON (defaults to the built-in wellness quiz).
        #[arg(long, value_name = "SPEC")]
        spec: Option<PathBuf>,
        /// JSON file holding an array of answer tags, in question order.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
        /// Write the resulting answer log to this file.
        #[arg(long, value_name = "OUT")]
        out: Option<PathBuf>,
    },
    /// Validate a quiz definition, and optionally an answer log against it.
    Validate {
        /// Path to the quiz definition JSON.
        #[arg(long, value_name = "SPEC")]
        spec: PathBuf,
        /// Optional answer log JSON to check against the definition.
        #[arg(long, value_name = "LOG")]
        log: Option<PathBuf>,
    },
    /// Print the JSON schema for quiz definitions or answer sequences.
    Schema {
        /// Which schema to print.
        #[arg(long, value_enum, default_value_t = SchemaTarget::Spec)]
        target: SchemaTarget,
        /// Quiz definition the answers schema is derived from.
        #[arg(long, value_name = "SPEC")]
        spec: Option<PathBuf>,
    },
    /// Print an example answer sequence for a quiz definition.
    Example {
        #[arg(long, value_name = "SPEC")]
        spec: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            spec,
            verbose,
            answers_json,
            format,
        } => run_quiz(spec, verbose, answers_json, format),
        Command::Classify { spec, answers, out } => run_classify(spec, answers, out),
        Command::Validate { spec, log } => run_validate(spec, log),
        Command::Schema { target, spec } => run_schema(target, spec),
        Command::Example { spec } => run_example(spec),
    }
}

fn load_spec(path: Option<PathBuf>) -> CliResult<QuizSpec> {
    let spec = match path {
        Some(path) => {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        }
        None => QuizSpec::wellness(),
    };
    let validation = validate_spec(&spec);
    if !validation.valid {
        describe_validation(&validation);
        return Err(format!("quiz definition '{}' is invalid", spec.id).into());
    }
    Ok(spec)
}

fn run_quiz(
    spec_path: Option<PathBuf>,
    verbose: bool,
    answers_json: bool,
    format: RenderMode,
) -> CliResult<()> {
    let spec = load_spec(spec_path)?;
    let mut session = QuizSession::new(spec)?;
    let mut presenter = QuizPresenter::new(Verbosity::from_verbose(verbose), answers_json);

    loop {
        let payload = build_render_payload(&session);
        print_render_output(format, &payload)?;
        presenter.show_header(&payload);
        presenter.show_status(&payload);

        let question = session.current_question()?.clone();
        let current = payload
            .questions
            .iter()
            .find(|question| question.current)
            .ok_or("session yielded no current question")?;
        let prompt = PromptContext::new(current, &payload.progress);

        match prompt_answer(&prompt, &question, &presenter)? {
            PromptOutcome::Answer(tag) => match session.submit_answer(tag) {
                Ok(Submission::Next(_)) => continue,
                Ok(Submission::Complete(result)) => {
                    presenter.show_result(&result);
                    presenter.show_completion(&AnswerLog::from_session(&session));
                    if prompt_bool("Retake the quiz?", false)? {
                        session.reset();
                        continue;
                    }
                    break;
                }
                Err(err) => {
                    // Raw tag input can name an option the question does not offer.
                    eprintln!("{}", err);
                    continue;
                }
            },
            PromptOutcome::Restart => {
                session.reset();
                continue;
            }
        }
    }

    Ok(())
}

enum PromptOutcome {
    Answer(AnswerTag),
    Restart,
}

fn prompt_answer(
    prompt: &PromptContext,
    question: &QuestionSpec,
    presenter: &QuizPresenter,
) -> CliResult<PromptOutcome> {
    loop {
        presenter.show_prompt(prompt);
        print!("> ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err("input stream closed before the quiz finished".into());
        }

        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("exit") {
            return Err("quiz aborted by user".into());
        }
        if trimmed.eq_ignore_ascii_case("restart") {
            return Ok(PromptOutcome::Restart);
        }

        match parse_choice(question, trimmed) {
            Ok(tag) => return Ok(PromptOutcome::Answer(tag)),
            Err(err) => presenter.show_parse_error(&err),
        }
    }
}

fn parse_choice(question: &QuestionSpec, raw: &str) -> Result<AnswerTag, AnswerParseError> {
    if raw.is_empty() {
        return Err(AnswerParseError::new(
            "This question requires an answer.",
            None,
        ));
    }

    if let Ok(number) = raw.parse::<usize>() {
        return match number
            .checked_sub(1)
            .and_then(|index| question.options.get(index))
        {
            Some(option) => Ok(option.tag.clone()),
            None => Err(AnswerParseError::new(
                format!("Choose a number between 1 and {}.", question.options.len()),
                Some(format!("{} options available", question.options.len())),
            )),
        };
    }

    match raw.parse::<AnswerTag>() {
        Ok(tag) if question.offers(&tag) => Ok(tag),
        Ok(tag) => Err(AnswerParseError::new(
            "That answer is not offered by this question.",
            Some(format!("'{}' is not among: {}", tag, offered_tags(question))),
        )),
        Err(err) => Err(AnswerParseError::new(
            "Enter an option number or an answer tag.",
            Some(err.to_string()),
        )),
    }
}

fn offered_tags(question: &QuestionSpec) -> String {
    question
        .options
        .iter()
        .map(|option| option.tag.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn prompt_bool(prompt: &str, default: bool) -> CliResult<bool> {
    let default_hint = if default { "Y" } else { "N" };
    loop {
        print!("{} (y/n) [{}]: ", prompt, default_hint);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            return Ok(default);
        }
        match line.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => {
                println!("Invalid answer '{}'. Expected yes or no.", other);
            }
        }
    }
}

fn run_classify(
    spec_path: Option<PathBuf>,
    answers_path: PathBuf,
    out: Option<PathBuf>,
) -> CliResult<()> {
    let spec = load_spec(spec_path)?;
    let contents = fs::read_to_string(&answers_path)?;
    let tags: Vec<AnswerTag> = serde_json::from_str(&contents)?;
    if tags.len() != spec.len() {
        return Err(format!(
            "expected {} answers for quiz '{}', got {}",
            spec.len(),
            spec.id,
            tags.len()
        )
        .into());
    }

    let mut session = QuizSession::new(spec)?;
    let mut result = None;
    for tag in tags {
        if let Submission::Complete(completed) = session.submit_answer(tag)? {
            result = Some(completed);
        }
    }
    let result = result.ok_or("quiz did not complete")?;

    println!("Wellness type: {}", result.kind.as_str());
    println!("{}", result.message);

    if let Some(out) = out {
        let log = AnswerLog::from_session(&session);
        fs::write(&out, log.to_json_pretty()?)?;
        println!("Answer log written to {}", out.display());
    }
    Ok(())
}

fn run_validate(spec_path: PathBuf, log_path: Option<PathBuf>) -> CliResult<()> {
    let contents = fs::read_to_string(&spec_path)?;
    let spec: QuizSpec = serde_json::from_str(&contents)?;

    let result = validate_spec(&spec);
    println!(
        "Definition: {}",
        if result.valid { "valid" } else { "invalid" }
    );
    describe_validation(&result);
    let mut failed = !result.valid;

    if let Some(log_path) = log_path {
        let log_contents = fs::read_to_string(&log_path)?;
        let log: AnswerLog = serde_json::from_str(&log_contents)?;
        let log_result = validate_log(&spec, &log);
        println!(
            "Answer log: {}",
            if log_result.valid { "valid" } else { "invalid" }
        );
        describe_validation(&log_result);
        failed = failed || !log_result.valid;
    }

    if failed {
        Err("validation failed".into())
    } else {
        Ok(())
    }
}

fn describe_validation(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!(
                "  {} - {}",
                error.path.as_deref().unwrap_or("<unknown>"),
                error.message
            );
        }
    }
    if !result.unanswered.is_empty() {
        println!("Unanswered questions: {}", result.unanswered.join(", "));
    }
}

fn run_schema(target: SchemaTarget, spec_path: Option<PathBuf>) -> CliResult<()> {
    let value = match target {
        SchemaTarget::Spec => spec_schema(),
        SchemaTarget::Answers => {
            let spec = load_spec(spec_path)?;
            answers_schema(&spec)
        }
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn run_example(spec_path: Option<PathBuf>) -> CliResult<()> {
    let spec = load_spec(spec_path)?;
    let answers = example_answers(&spec)
        .iter()
        .map(|tag| tag.to_string())
        .collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&answers)?);
    Ok(())
}

fn print_render_output(mode: RenderMode, payload: &quiz_spec::RenderPayload) -> CliResult<()> {
    match mode {
        RenderMode::Text => Ok(()),
        RenderMode::Card => {
            println!(
                "Adaptive card:\n{}",
                serde_json::to_string_pretty(&render_card(payload))?
            );
            Ok(())
        }
        RenderMode::Json => {
            println!(
                "JSON UI:\n{}",
                serde_json::to_string_pretty(&render_json_ui(payload))?
            );
            Ok(())
        }
    }
}
