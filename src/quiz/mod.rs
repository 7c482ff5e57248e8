pub mod generator;
pub mod summary;
pub mod validation;

pub use generator::{generate_quiz_questions, start_quiz};
pub use summary::{ColorTier, ScoreSummary, summarize};
pub use validation::{is_answer_correct, normalize_spanish};
