use schemars::schema_for;
use serde_json::{Value, json};

use crate::spec::QuizSpec;

/// JSON schema for a full answer sequence: a fixed-length array whose
/// entry at each position must be one of that question's tags.
pub fn generate(spec: &QuizSpec) -> Value {
    let items = spec
        .questions
        .iter()
        .map(|question| {
            json!({
                "title": question.prompt,
                "type": "string",
                "enum": question
                    .options
                    .iter()
                    .map(|option| option.tag.to_string())
                    .collect::<Vec<_>>(),
            })
        })
        .collect::<Vec<_>>();

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": format!("{} answers", spec.title),
        "type": "array",
        "prefixItems": items,
        "minItems": spec.len(),
        "maxItems": spec.len(),
    })
}

/// JSON schema for quiz definitions themselves.
pub fn spec_schema() -> Value {
    serde_json::to_value(schema_for!(QuizSpec)).unwrap_or(Value::Null)
}
