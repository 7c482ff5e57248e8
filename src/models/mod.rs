pub mod conjugation;
pub mod conjugation_table;
pub mod quiz_config;
pub mod quiz_question;
pub mod quiz_session;
pub mod settings;
pub mod verb;

pub use conjugation::{Conjugation, FormVariant, VOSOTROS_PERFORMER};
pub use conjugation_table::{ConjugationTable, MoodGroup, TenseGroup};
pub use quiz_config::{QuizConfig, VerbScope};
pub use quiz_question::{QuizQuestion, QuizResult};
pub use quiz_session::{QuizSession, SessionState};
pub use settings::{AppSettings, Favorites};
pub use verb::Verb;
