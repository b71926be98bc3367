use serde_json::{Map, Value, json};

use crate::score::WellnessResult;
use crate::session::QuizSession;
use crate::spec::OptionSpec;

/// Status labels returned by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// An answer is required for the current question.
    NeedInput,
    /// Every question is answered and a result is available.
    Complete,
}

impl RenderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStatus::NeedInput => "need_input",
            RenderStatus::Complete => "complete",
        }
    }
}

/// Progress counters exposed to renderers.
#[derive(Debug, Clone)]
pub struct RenderProgress {
    pub answered: usize,
    pub total: usize,
}

/// Describes a single question for render outputs.
#[derive(Debug, Clone)]
pub struct RenderQuestion {
    pub id: String,
    pub prompt: String,
    pub position: usize,
    pub answered: bool,
    pub current: bool,
    pub options: Vec<OptionSpec>,
}

/// Collected payload used by all renderers.
#[derive(Debug, Clone)]
pub struct RenderPayload {
    pub quiz_id: String,
    pub quiz_title: String,
    pub quiz_version: String,
    pub status: RenderStatus,
    pub current_question_id: Option<String>,
    pub progress: RenderProgress,
    pub help: Option<String>,
    pub questions: Vec<RenderQuestion>,
    pub result: Option<WellnessResult>,
}

/// Build the renderer payload from a session snapshot.
pub fn build_render_payload(session: &QuizSession) -> RenderPayload {
    let spec = session.spec();
    let current_index = session.current_index();

    let questions = spec
        .questions
        .iter()
        .enumerate()
        .map(|(position, question)| RenderQuestion {
            id: question.id.clone(),
            prompt: question.prompt.clone(),
            position,
            answered: position < session.answered(),
            current: current_index == Some(position),
            options: question.options.clone(),
        })
        .collect::<Vec<_>>();

    let help = spec
        .presentation
        .as_ref()
        .and_then(|presentation| presentation.intro.clone())
        .or_else(|| spec.description.clone());

    let status = if session.is_complete() {
        RenderStatus::Complete
    } else {
        RenderStatus::NeedInput
    };

    RenderPayload {
        quiz_id: spec.id.clone(),
        quiz_title: spec.title.clone(),
        quiz_version: spec.version.clone(),
        status,
        current_question_id: current_index.map(|index| spec.questions[index].id.clone()),
        progress: RenderProgress {
            answered: session.answered(),
            total: session.total(),
        },
        help,
        questions,
        result: session.result().cloned(),
    }
}

/// Render the payload as a structured JSON-friendly value.
pub fn render_json_ui(payload: &RenderPayload) -> Value {
    let questions = payload
        .questions
        .iter()
        .map(|question| {
            let mut map = Map::new();
            map.insert("id".into(), Value::String(question.id.clone()));
            map.insert("prompt".into(), Value::String(question.prompt.clone()));
            map.insert("position".into(), Value::from(question.position));
            map.insert("answered".into(), Value::Bool(question.answered));
            map.insert("current".into(), Value::Bool(question.current));
            map.insert(
                "options".into(),
                Value::Array(
                    question
                        .options
                        .iter()
                        .map(|option| {
                            json!({
                                "label": option.label,
                                "tag": option.tag.to_string(),
                            })
                        })
                        .collect(),
                ),
            );
            Value::Object(map)
        })
        .collect::<Vec<_>>();

    json!({
        "quiz_id": payload.quiz_id,
        "quiz_title": payload.quiz_title,
        "quiz_version": payload.quiz_version,
        "status": payload.status.as_str(),
        "current_question_id": payload.current_question_id,
        "progress": {
            "answered": payload.progress.answered,
            "total": payload.progress.total,
        },
        "help": payload.help,
        "questions": questions,
        "result": payload.result.as_ref().map(|result| json!({
            "type": result.kind.as_str(),
            "message": result.message,
            "scorecard": {
                "eat": result.scorecard.eat,
                "live": result.scorecard.live,
                "challenge_focus": result.scorecard.challenge_focus,
            },
        })),
    })
}

/// Render the payload as human-friendly text.
pub fn render_text(payload: &RenderPayload) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Quiz: {} ({})", payload.quiz_title, payload.quiz_id));
    lines.push(format!(
        "Status: {} ({}/{})",
        payload.status.as_str(),
        payload.progress.answered,
        payload.progress.total
    ));
    if let Some(help) = &payload.help {
        lines.push(format!("Help: {}", help));
    }

    if let Some(result) = &payload.result {
        lines.push("All questions are answered.".to_string());
        lines.push(format!("Result: {}", result.message));
        return lines.join("\n");
    }

    if let Some(question) = payload.questions.iter().find(|question| question.current) {
        lines.push(format!(
            "Question {}/{}: {}",
            question.position + 1,
            payload.progress.total,
            question.prompt
        ));
        for (number, option) in question.options.iter().enumerate() {
            lines.push(format!(" {}) {}", number + 1, option.label));
        }
    }

    lines.join("\n")
}

/// Render the payload as an Adaptive Card v1.3 transport.
pub fn render_card(payload: &RenderPayload) -> Value {
    let mut body = Vec::new();

    body.push(json!({
        "type": "TextBlock",
        "text": payload.quiz_title,
        "weight": "Bolder",
        "size": "Large",
        "wrap": true,
    }));

    if let Some(help) = &payload.help {
        body.push(json!({
            "type": "TextBlock",
            "text": help,
            "wrap": true,
        }));
    }

    body.push(json!({
        "type": "FactSet",
        "facts": [
            { "title": "Answered", "value": payload.progress.answered.to_string() },
            { "title": "Total", "value": payload.progress.total.to_string() }
        ]
    }));

    let mut actions = Vec::new();

    if let Some(result) = &payload.result {
        body.push(json!({
            "type": "TextBlock",
            "text": result.message,
            "wrap": true,
        }));
    } else if let Some(question) = payload.questions.iter().find(|question| question.current) {
        let choices = question
            .options
            .iter()
            .map(|option| {
                json!({
                    "title": option.label,
                    "value": option.tag.to_string(),
                })
            })
            .collect::<Vec<_>>();

        body.push(json!({
            "type": "Container",
            "items": [
                {
                    "type": "TextBlock",
                    "text": question.prompt,
                    "weight": "Bolder",
                    "wrap": true,
                },
                {
                    "type": "Input.ChoiceSet",
                    "id": question.id,
                    "style": "expanded",
                    "isRequired": true,
                    "choices": choices,
                }
            ],
        }));

        actions.push(json!({
            "type": "Action.Submit",
            "title": "Next ➡️",
            "data": {
                "quiz": {
                    "quizId": payload.quiz_id,
                    "questionId": question.id,
                    "field": "answer"
                }
            }
        }));
    }

    json!({
        "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
        "type": "AdaptiveCard",
        "version": "1.3",
        "body": body,
        "actions": actions,
    })
}
