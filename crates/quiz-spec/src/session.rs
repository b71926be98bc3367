use thiserror::Error;

use crate::score::{Scorecard, WellnessResult};
use crate::spec::{QuestionSpec, QuizSpec};
use crate::tag::AnswerTag;
use crate::template::{MessageCatalog, TemplateError};

/// Errors raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("quiz '{0}' has no questions")]
    EmptyQuiz(String),
    #[error("the quiz is already complete; reset() starts a fresh run")]
    AlreadyComplete,
    #[error("answer tag '{tag}' is not offered by question '{question_id}'")]
    AnswerNotOffered { question_id: String, tag: String },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Discrete states of the quiz state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress { index: usize },
    Completed,
}

/// Outcome of a single answer submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// More questions remain; the index is the question now awaiting input.
    Next(usize),
    /// The final question was just answered.
    Complete(WellnessResult),
}

/// Mutable run-time state for one pass through a quiz.
///
/// The session owns its definition and advances one question per submitted
/// answer. `answers.len()` equals the current question index until the last
/// answer lands, at which point the classification is computed exactly once
/// and the session stays completed until `reset`.
pub struct QuizSession {
    spec: QuizSpec,
    catalog: MessageCatalog,
    answers: Vec<AnswerTag>,
    result: Option<WellnessResult>,
}

impl QuizSession {
    pub fn new(spec: QuizSpec) -> Result<Self, SessionError> {
        if spec.is_empty() {
            return Err(SessionError::EmptyQuiz(spec.id.clone()));
        }
        Ok(Self {
            spec,
            catalog: MessageCatalog::new()?,
            answers: Vec::new(),
            result: None,
        })
    }

    pub fn spec(&self) -> &QuizSpec {
        &self.spec
    }

    pub fn status(&self) -> SessionStatus {
        match self.current_index() {
            Some(index) => SessionStatus::InProgress { index },
            None => SessionStatus::Completed,
        }
    }

    /// Index of the question awaiting an answer; `None` once completed.
    pub fn current_index(&self) -> Option<usize> {
        if self.result.is_some() {
            None
        } else {
            Some(self.answers.len())
        }
    }

    /// The question awaiting an answer. Calling this on a completed
    /// session is a programming error, not a user-facing condition.
    pub fn current_question(&self) -> Result<&QuestionSpec, SessionError> {
        match self.current_index() {
            Some(index) => Ok(&self.spec.questions[index]),
            None => Err(SessionError::AlreadyComplete),
        }
    }

    pub fn answers(&self) -> &[AnswerTag] {
        &self.answers
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn total(&self) -> usize {
        self.spec.len()
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&WellnessResult> {
        self.result.as_ref()
    }

    /// Record the answer for the current question and advance.
    ///
    /// The tag must be one of the options the current question offers.
    /// Answering the final question computes the classification and moves
    /// the session to its completed state.
    pub fn submit_answer(&mut self, tag: AnswerTag) -> Result<Submission, SessionError> {
        let index = self.current_index().ok_or(SessionError::AlreadyComplete)?;
        let question = &self.spec.questions[index];
        if !question.offers(&tag) {
            return Err(SessionError::AnswerNotOffered {
                question_id: question.id.clone(),
                tag: tag.to_string(),
            });
        }
        self.answers.push(tag);
        if self.answers.len() < self.spec.len() {
            Ok(Submission::Next(self.answers.len()))
        } else {
            let result = self.catalog.result_for(&Scorecard::tally(&self.answers))?;
            self.result = Some(result.clone());
            Ok(Submission::Complete(result))
        }
    }

    /// Discard all recorded answers and any computed result. Valid from
    /// any state.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.result = None;
    }
}
