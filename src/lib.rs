pub mod catalogue;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod quiz;

pub use error::{Error, Result, SessionError};
pub use models::{
    AppSettings, Conjugation, Favorites, QuizConfig, QuizQuestion, QuizResult, QuizSession, Verb,
};
