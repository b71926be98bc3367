use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::score::WellnessResult;
use crate::session::QuizSession;
use crate::tag::AnswerTag;

/// Errors raised while exporting an answer log.
#[derive(Debug, Error)]
pub enum AnswerLogError {
    #[error("failed to encode answers as CBOR: {0}")]
    Cbor(#[from] serde_cbor::Error),
    #[error("failed to encode answers as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Portable record of a quiz run.
///
/// A log may be a mid-flight snapshot (fewer answers than questions, no
/// result) or a finished run; `result` is present only when every question
/// was answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnswerLog {
    pub quiz_id: String,
    pub spec_version: String,
    pub answers: Vec<AnswerTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<WellnessResult>,
}

impl AnswerLog {
    /// Snapshot the current state of a session.
    pub fn from_session(session: &QuizSession) -> Self {
        AnswerLog {
            quiz_id: session.spec().id.clone(),
            spec_version: session.spec().version.clone(),
            answers: session.answers().to_vec(),
            result: session.result().cloned(),
        }
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>, AnswerLogError> {
        Ok(serde_cbor::to_vec(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, AnswerLogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Aggregate outcome of validating a definition or an answer log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    /// Question ids still awaiting an answer (log validation only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unanswered: Vec<String>,
}
