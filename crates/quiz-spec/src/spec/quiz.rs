use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::question::{OptionSpec, QuestionSpec};
use crate::tag::{AnswerTag, Category};

/// Presentation hints for a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuizPresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Top-level quiz definition.
///
/// Read-only after construction; only a session mutates while a quiz runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuizSpec {
    pub id: String,
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentation: Option<QuizPresentation>,
    pub questions: Vec<QuestionSpec>,
}

impl QuizSpec {
    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&QuestionSpec> {
        self.questions.get(index)
    }

    /// The built-in "Find Your Wellness Type" quiz.
    pub fn wellness() -> Self {
        QuizSpec {
            id: "wellness-type".into(),
            title: "Find Your Wellness Type".into(),
            version: "1.0.0".into(),
            description: None,
            presentation: Some(QuizPresentation {
                intro: Some(
                    "Answer a few quick questions to get a general idea of your current \
                     wellness focus!"
                        .into(),
                ),
                theme: None,
            }),
            questions: vec![
                QuestionSpec {
                    id: "cooking".into(),
                    prompt: "How do you typically feel about cooking at home?".into(),
                    options: vec![
                        OptionSpec::new(
                            "Love it, I cook most of my meals.",
                            AnswerTag::new(Category::Eat, "pro"),
                        ),
                        OptionSpec::new(
                            "It's okay, I do it sometimes.",
                            AnswerTag::new(Category::Eat, "neutral"),
                        ),
                        OptionSpec::new(
                            "I prefer eating out or ready-made meals.",
                            AnswerTag::new(Category::Eat, "con"),
                        ),
                    ],
                },
                QuestionSpec {
                    id: "activity".into(),
                    prompt: "How often do you engage in physical activity?".into(),
                    options: vec![
                        OptionSpec::new(
                            "Daily or almost daily.",
                            AnswerTag::new(Category::Live, "pro"),
                        ),
                        OptionSpec::new(
                            "A few times a week.",
                            AnswerTag::new(Category::Live, "neutral"),
                        ),
                        OptionSpec::new(
                            "Rarely or never.",
                            AnswerTag::new(Category::Live, "con"),
                        ),
                    ],
                },
                QuestionSpec {
                    id: "challenge".into(),
                    prompt: "What's your biggest challenge when trying to be healthy?".into(),
                    options: vec![
                        OptionSpec::new(
                            "Finding motivation/consistency.",
                            AnswerTag::new(Category::Challenge, "motivation"),
                        ),
                        OptionSpec::new(
                            "Time constraints.",
                            AnswerTag::new(Category::Challenge, "time"),
                        ),
                        OptionSpec::new(
                            "Cost of healthy options.",
                            AnswerTag::new(Category::Challenge, "cost"),
                        ),
                        OptionSpec::new(
                            "Knowing what to do.",
                            AnswerTag::new(Category::Challenge, "knowledge"),
                        ),
                    ],
                },
            ],
        }
    }
}
