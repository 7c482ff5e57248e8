//! Turns a quiz configuration into a shuffled list of questions.

use crate::database::{ConjugationFilter, ConjugationSource};
use crate::error::Result;
use crate::models::{AppSettings, QuizConfig, QuizQuestion, QuizSession};
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// Fetches every conjugation matching `config` (and the vosotros preference
/// in `settings`), shuffles them uniformly and keeps the first
/// `question_count`.
///
/// An empty result is not an error: the caller decides how to tell the user
/// that no questions are available.
pub fn generate_quiz_questions<S, R>(
    config: &QuizConfig,
    settings: &AppSettings,
    source: &S,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>>
where
    S: ConjugationSource + ?Sized,
    R: Rng + ?Sized,
{
    let filter = ConjugationFilter::from_config(config, settings);
    let mut questions = source.fetch_quiz_rows(&filter)?;
    debug!("{} conjugations match {:?}", questions.len(), filter);

    questions.shuffle(rng);
    if let Some(count) = config.question_count {
        questions.truncate(count);
    }

    if questions.is_empty() {
        warn!("No questions available for {config:?}");
    }
    Ok(questions)
}

/// Generates questions and wraps them in a fresh session.
///
/// Returns `None` when the configuration matches nothing.
pub fn start_quiz<S, R>(
    config: QuizConfig,
    settings: &AppSettings,
    source: &S,
    rng: &mut R,
) -> Result<Option<QuizSession>>
where
    S: ConjugationSource + ?Sized,
    R: Rng + ?Sized,
{
    let questions = generate_quiz_questions(&config, settings, source, rng)?;
    if questions.is_empty() {
        return Ok(None);
    }
    Ok(Some(QuizSession::new(config, questions)))
}
