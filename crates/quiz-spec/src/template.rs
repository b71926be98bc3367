use handlebars::Handlebars;
use serde_json::json;
use thiserror::Error;

use crate::score::{Scorecard, WellnessResult, WellnessType};

/// Interpolated when no challenge-category answer was recorded.
pub const FALLBACK_FOCUS: &str = "your biggest challenge";

const CHAMPION: &str =
    "Wellness Champion! You're doing great. Keep exploring new ways to optimize your health.";
const EAT_ENTHUSIAST: &str = "Eat Well Enthusiast! You've got nutrition down. Let's boost your \
                              activity and living habits. Focus on overcoming {{focus}}.";
const LIVE_MOVER: &str = "Live Well Mover! You're active and mindful. Let's refine your eating \
                          habits for even better results. Focus on overcoming {{focus}}.";
const EXPLORER: &str = "Wellness Explorer! You're ready to start your journey. Let's tackle \
                        {{focus}} first, whether it's eating or living well.";

/// Errors raised while compiling or rendering result messages.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to register result template: {0}")]
    Register(#[from] handlebars::TemplateError),
    #[error("failed to render result template: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Compiled result-message templates, one per wellness type.
pub struct MessageCatalog {
    registry: Handlebars<'static>,
}

impl MessageCatalog {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        // Messages are plain text, never HTML.
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_template_string(WellnessType::Champion.as_str(), CHAMPION)?;
        registry.register_template_string(WellnessType::EatEnthusiast.as_str(), EAT_ENTHUSIAST)?;
        registry.register_template_string(WellnessType::LiveMover.as_str(), LIVE_MOVER)?;
        registry.register_template_string(WellnessType::Explorer.as_str(), EXPLORER)?;
        Ok(Self { registry })
    }

    /// Classify a tallied scorecard and render its message.
    pub fn result_for(&self, scorecard: &Scorecard) -> Result<WellnessResult, TemplateError> {
        let kind = scorecard.classify();
        let focus = scorecard
            .challenge_focus
            .as_deref()
            .unwrap_or(FALLBACK_FOCUS);
        let message = self
            .registry
            .render(kind.as_str(), &json!({ "focus": focus }))?;
        Ok(WellnessResult {
            kind,
            message,
            scorecard: scorecard.clone(),
        })
    }
}
