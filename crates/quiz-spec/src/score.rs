use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tag::{AnswerTag, Category};

const PRO_POINTS: u32 = 2;
const NEUTRAL_POINTS: u32 = 1;

/// A category counts as a strength once its score reaches this value.
const STRENGTH_THRESHOLD: u32 = 3;

/// Accumulated category totals for an answer sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Scorecard {
    pub eat: u32,
    pub live: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_focus: Option<String>,
}

impl Scorecard {
    /// Tally answers in submission order. A later challenge answer
    /// overwrites an earlier focus.
    pub fn tally(answers: &[AnswerTag]) -> Self {
        let mut card = Scorecard::default();
        for tag in answers {
            match tag.category() {
                Category::Eat => card.eat += leaning_points(tag.payload()),
                Category::Live => card.live += leaning_points(tag.payload()),
                Category::Challenge => {
                    if let Some(focus) = tag.payload() {
                        card.challenge_focus = Some(focus.to_string());
                    }
                }
            }
        }
        card
    }

    /// First matching branch wins; the order is part of the contract.
    pub fn classify(&self) -> WellnessType {
        if self.eat >= STRENGTH_THRESHOLD && self.live >= STRENGTH_THRESHOLD {
            WellnessType::Champion
        } else if self.eat >= STRENGTH_THRESHOLD {
            WellnessType::EatEnthusiast
        } else if self.live >= STRENGTH_THRESHOLD {
            WellnessType::LiveMover
        } else {
            WellnessType::Explorer
        }
    }
}

fn leaning_points(payload: Option<&str>) -> u32 {
    match payload {
        Some("pro") => PRO_POINTS,
        Some("neutral") => NEUTRAL_POINTS,
        _ => 0,
    }
}

/// The four classification buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WellnessType {
    Champion,
    EatEnthusiast,
    LiveMover,
    Explorer,
}

impl WellnessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WellnessType::Champion => "champion",
            WellnessType::EatEnthusiast => "eat_enthusiast",
            WellnessType::LiveMover => "live_mover",
            WellnessType::Explorer => "explorer",
        }
    }
}

/// Final outcome handed back once every question is answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WellnessResult {
    #[serde(rename = "type")]
    pub kind: WellnessType,
    pub message: String,
    pub scorecard: Scorecard,
}
