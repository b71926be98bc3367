use crate::spec::QuizSpec;
use crate::tag::AnswerTag;

/// Build an example answer sequence by picking the first option of every
/// question.
pub fn generate(spec: &QuizSpec) -> Vec<AnswerTag> {
    spec.questions
        .iter()
        .filter_map(|question| question.options.first().map(|option| option.tag.clone()))
        .collect()
}
