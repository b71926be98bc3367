pub mod question;
pub mod quiz;

pub use question::{OptionSpec, QuestionSpec};
pub use quiz::{QuizPresentation, QuizSpec};
