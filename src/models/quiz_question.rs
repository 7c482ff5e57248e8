//! Quiz questions and the recorded answer to each of them.
use super::{Conjugation, Verb};
use serde::{Deserialize, Serialize};

/// A conjugation joined with its verb's translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub infinitive: String,
    pub translation: String,
    pub mood: String,
    pub tense: String,
    pub performer: String,
    pub performer_en: String,
    pub correct_answer: String,
}

impl QuizQuestion {
    pub fn from_conjugation(verb: &Verb, conjugation: &Conjugation) -> Self {
        Self {
            infinitive: conjugation.infinitive.clone(),
            translation: verb.translation.clone(),
            mood: conjugation.mood.clone(),
            tense: conjugation.tense.clone(),
            performer: conjugation.performer.clone(),
            performer_en: conjugation.performer_en.clone(),
            correct_answer: conjugation.conjugated_form.clone(),
        }
    }

    /// "hablar (to speak) - Indicativo Presente - yo (I)"
    pub fn prompt(&self) -> String {
        format!(
            "{} ({}) - {} {} - {} ({})",
            self.infinitive,
            self.translation,
            self.mood,
            self.tense,
            self.performer,
            self.performer_en
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub question: QuizQuestion,
    pub user_answer: String,
    pub is_correct: bool,
}
