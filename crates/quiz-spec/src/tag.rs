use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scoring bucket an answer contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Eat,
    Live,
    Challenge,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Eat => "eat",
            Category::Live => "live",
            Category::Challenge => "challenge",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "eat" => Some(Category::Eat),
            "live" => Some(Category::Live),
            "challenge" => Some(Category::Challenge),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while parsing an answer tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("answer tag cannot be empty")]
    Empty,
    #[error("unknown answer tag category '{0}'")]
    UnknownCategory(String),
}

/// Identifier carried by a quiz option.
///
/// On the wire this is a single delimited string such as `eat_pro` or
/// `challenge_time`: the segment before the first `_` names the scoring
/// category, the remainder is an opaque payload. Parsing happens once,
/// here, so scoring never re-inspects raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnswerTag {
    category: Category,
    payload: Option<String>,
}

impl AnswerTag {
    /// Build a tag from parts. An empty payload normalizes to none.
    pub fn new(category: Category, payload: impl Into<String>) -> Self {
        let payload = payload.into();
        let payload = if payload.is_empty() {
            None
        } else {
            Some(payload)
        };
        Self { category, payload }
    }

    /// A tag with a category and no payload.
    pub fn bare(category: Category) -> Self {
        Self {
            category,
            payload: None,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl fmt::Display for AnswerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => write!(f, "{}_{}", self.category, payload),
            None => write!(f, "{}", self.category),
        }
    }
}

impl FromStr for AnswerTag {
    type Err = TagError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(TagError::Empty);
        }
        let (prefix, payload) = match raw.split_once('_') {
            Some((prefix, payload)) => (prefix, payload),
            None => (raw, ""),
        };
        let category = Category::from_label(prefix)
            .ok_or_else(|| TagError::UnknownCategory(prefix.to_string()))?;
        Ok(AnswerTag::new(category, payload))
    }
}

impl TryFrom<String> for AnswerTag {
    type Error = TagError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<AnswerTag> for String {
    fn from(tag: AnswerTag) -> Self {
        tag.to_string()
    }
}

impl JsonSchema for AnswerTag {
    fn schema_name() -> Cow<'static, str> {
        "AnswerTag".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^(eat|live|challenge)(_.+)?$",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_category_and_payload() {
        let tag: AnswerTag = "eat_pro".parse().unwrap();
        assert_eq!(tag.category(), Category::Eat);
        assert_eq!(tag.payload(), Some("pro"));
    }

    #[test]
    fn payload_keeps_extra_separators_verbatim() {
        let tag: AnswerTag = "challenge_time_of_day".parse().unwrap();
        assert_eq!(tag.category(), Category::Challenge);
        assert_eq!(tag.payload(), Some("time_of_day"));
        assert_eq!(tag.to_string(), "challenge_time_of_day");
    }

    #[test]
    fn bare_category_has_no_payload() {
        let tag: AnswerTag = "live".parse().unwrap();
        assert_eq!(tag.category(), Category::Live);
        assert_eq!(tag.payload(), None);
        assert_eq!(tag.to_string(), "live");
    }

    #[test]
    fn empty_payload_normalizes_to_none() {
        let tag: AnswerTag = "challenge_".parse().unwrap();
        assert_eq!(tag.payload(), None);
        assert_eq!(tag.to_string(), "challenge");
    }

    #[test]
    fn rejects_unknown_category() {
        assert_eq!(
            "sleep_pro".parse::<AnswerTag>(),
            Err(TagError::UnknownCategory("sleep".into()))
        );
        assert_eq!("".parse::<AnswerTag>(), Err(TagError::Empty));
    }

    #[test]
    fn serde_round_trips_the_delimited_form() {
        let tag = AnswerTag::new(Category::Eat, "neutral");
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"eat_neutral\"");
        let back: AnswerTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }
}
