use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tag::AnswerTag;

/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OptionSpec {
    pub label: String,
    pub tag: AnswerTag,
}

impl OptionSpec {
    pub fn new(label: impl Into<String>, tag: AnswerTag) -> Self {
        Self {
            label: label.into(),
            tag,
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionSpec {
    pub id: String,
    pub prompt: String,
    pub options: Vec<OptionSpec>,
}

impl QuestionSpec {
    /// Whether `tag` is one of the tags this question offers.
    pub fn offers(&self, tag: &AnswerTag) -> bool {
        self.options.iter().any(|option| &option.tag == tag)
    }

    pub fn option_for(&self, tag: &AnswerTag) -> Option<&OptionSpec> {
        self.options.iter().find(|option| &option.tag == tag)
    }
}
