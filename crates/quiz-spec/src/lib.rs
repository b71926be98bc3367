#![allow(missing_docs)]

pub mod answers;
pub mod answers_schema;
pub mod examples;
pub mod render;
pub mod score;
pub mod session;
pub mod spec;
pub mod tag;
pub mod template;
pub mod validate;

pub use answers::{AnswerLog, AnswerLogError, ValidationError, ValidationResult};
pub use answers_schema::{generate as answers_schema, spec_schema};
pub use examples::generate as example_answers;
pub use render::{
    RenderPayload, RenderProgress, RenderQuestion, RenderStatus, build_render_payload, render_card,
    render_json_ui, render_text,
};
pub use score::{Scorecard, WellnessResult, WellnessType};
pub use session::{QuizSession, SessionError, SessionStatus, Submission};
pub use spec::{OptionSpec, QuestionSpec, QuizPresentation, QuizSpec};
pub use tag::{AnswerTag, Category, TagError};
pub use template::{FALLBACK_FOCUS, MessageCatalog, TemplateError};
pub use validate::{validate_log, validate_spec};
