use std::collections::BTreeSet;

use regex::Regex;

use crate::answers::{AnswerLog, ValidationError, ValidationResult};
use crate::score::Scorecard;
use crate::spec::{QuestionSpec, QuizSpec};

const ID_PATTERN: &str = "^[a-z][a-z0-9_-]*$";

/// Check a quiz definition for structural problems.
pub fn validate_spec(spec: &QuizSpec) -> ValidationResult {
    let mut errors = Vec::new();

    if let Ok(id_regex) = Regex::new(ID_PATTERN) {
        if !id_regex.is_match(&spec.id) {
            errors.push(ValidationError {
                question_id: None,
                path: Some("/id".into()),
                message: "quiz id must be lowercase alphanumeric".into(),
                code: Some("id_format".into()),
            });
        }
        for question in &spec.questions {
            if !id_regex.is_match(&question.id) {
                errors.push(base_error(
                    question,
                    "question id must be lowercase alphanumeric",
                    "id_format",
                ));
            }
        }
    }

    if spec.questions.is_empty() {
        errors.push(ValidationError {
            question_id: None,
            path: Some("/questions".into()),
            message: "quiz defines no questions".into(),
            code: Some("empty_quiz".into()),
        });
    }

    let mut seen_ids = BTreeSet::new();
    for question in &spec.questions {
        if !seen_ids.insert(question.id.clone()) {
            errors.push(base_error(question, "duplicate question id", "duplicate_id"));
        }

        if question.prompt.trim().is_empty() {
            errors.push(base_error(question, "question prompt is empty", "empty_prompt"));
        }

        if question.options.len() < 2 {
            errors.push(base_error(
                question,
                "question offers fewer than two options",
                "too_few_options",
            ));
        }

        let mut seen_tags = BTreeSet::new();
        for option in &question.options {
            if option.label.trim().is_empty() {
                errors.push(base_error(question, "option label is empty", "empty_label"));
            }
            if !seen_tags.insert(option.tag.to_string()) {
                errors.push(base_error(
                    question,
                    "duplicate answer tag within question",
                    "duplicate_tag",
                ));
            }
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        unanswered: Vec::new(),
    }
}

/// Check an answer log against the definition it claims to belong to.
///
/// A partial log (fewer answers than questions) is reported as invalid
/// with the outstanding question ids in `unanswered`, matching the
/// session invariant that a result exists only for a full sequence.
pub fn validate_log(spec: &QuizSpec, log: &AnswerLog) -> ValidationResult {
    let mut errors = Vec::new();

    if log.quiz_id != spec.id {
        errors.push(ValidationError {
            question_id: None,
            path: Some("/quiz_id".into()),
            message: format!("log belongs to quiz '{}', not '{}'", log.quiz_id, spec.id),
            code: Some("quiz_mismatch".into()),
        });
    }

    if log.answers.len() > spec.len() {
        errors.push(ValidationError {
            question_id: None,
            path: Some("/answers".into()),
            message: format!(
                "log records {} answers for {} questions",
                log.answers.len(),
                spec.len()
            ),
            code: Some("too_many_answers".into()),
        });
    }

    for (index, tag) in log.answers.iter().enumerate() {
        if let Some(question) = spec.question(index)
            && !question.offers(tag)
        {
            errors.push(ValidationError {
                question_id: Some(question.id.clone()),
                path: Some(format!("/answers/{}", index)),
                message: format!("tag '{}' is not offered by question '{}'", tag, question.id),
                code: Some("tag_not_offered".into()),
            });
        }
    }

    let unanswered: Vec<String> = spec
        .questions
        .iter()
        .skip(log.answers.len())
        .map(|question| question.id.clone())
        .collect();

    if let Some(result) = &log.result {
        if !unanswered.is_empty() {
            errors.push(ValidationError {
                question_id: None,
                path: Some("/result".into()),
                message: "result recorded before all questions were answered".into(),
                code: Some("premature_result".into()),
            });
        } else if Scorecard::tally(&log.answers).classify() != result.kind {
            errors.push(ValidationError {
                question_id: None,
                path: Some("/result".into()),
                message: "recorded result does not match the submitted answers".into(),
                code: Some("result_mismatch".into()),
            });
        }
    }

    ValidationResult {
        valid: errors.is_empty() && unanswered.is_empty(),
        errors,
        unanswered,
    }
}

fn base_error(question: &QuestionSpec, message: &str, code: &str) -> ValidationError {
    ValidationError {
        question_id: Some(question.id.clone()),
        path: Some(format!("/{}", question.id)),
        message: message.into(),
        code: Some(code.into()),
    }
}
