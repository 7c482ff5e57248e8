//! Quiz configuration chosen on the setup screen.
use super::Favorites;
use crate::catalogue::{DEFAULT_MOOD, DEFAULT_QUESTION_COUNT, DEFAULT_TENSE};
use serde::{Deserialize, Serialize};

/// Empty `moods`/`tenses` mean "no restriction"; a missing `question_count`
/// means "every matching conjugation".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub verb: Option<String>,
    #[serde(default)]
    pub moods: Vec<String>,
    #[serde(default)]
    pub tenses: Vec<String>,
    pub question_count: Option<usize>,
    #[serde(default)]
    pub favorites_only: bool,
    #[serde(default)]
    pub favorite_infinitives: Vec<String>,
}

/// Which verbs a quiz draws from, after resolving precedence between the
/// favorites flag and a specific verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerbScope {
    All,
    Single(String),
    Favorites(Vec<String>),
}

impl QuizConfig {
    /// The setup screen's initial selection: present indicative, ten questions.
    pub fn setup_defaults() -> Self {
        Self {
            moods: vec![DEFAULT_MOOD.to_string()],
            tenses: vec![DEFAULT_TENSE.to_string()],
            question_count: Some(DEFAULT_QUESTION_COUNT),
            ..Self::default()
        }
    }

    pub fn for_verb(infinitive: &str) -> Self {
        Self {
            verb: Some(infinitive.to_string()),
            ..Self::setup_defaults()
        }
    }

    /// Restricts the quiz to the given favorites snapshot.
    pub fn with_favorites(mut self, favorites: &Favorites) -> Self {
        self.favorites_only = true;
        self.favorite_infinitives = favorites.to_vec();
        self
    }

    /// Favorites win over a specific verb. A favorites-only quiz with no
    /// favorites yields an empty scope, so no questions are produced.
    pub fn verb_scope(&self) -> VerbScope {
        if self.favorites_only {
            return VerbScope::Favorites(self.favorite_infinitives.clone());
        }
        match self.verb.as_deref().map(str::trim) {
            Some(verb) if !verb.is_empty() => VerbScope::Single(verb.to_string()),
            _ => VerbScope::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope_is_all() {
        assert_eq!(QuizConfig::default().verb_scope(), VerbScope::All);
    }

    #[test]
    fn test_single_verb_scope() {
        let config = QuizConfig::for_verb("hablar");
        assert_eq!(config.verb_scope(), VerbScope::Single("hablar".to_string()));
    }

    #[test]
    fn test_blank_verb_is_unrestricted() {
        let config = QuizConfig {
            verb: Some("  ".to_string()),
            ..QuizConfig::default()
        };
        assert_eq!(config.verb_scope(), VerbScope::All);
    }

    #[test]
    fn test_favorites_take_precedence() {
        let mut favorites = Favorites::default();
        favorites.add("comer");
        favorites.add("vivir");
        let config = QuizConfig::for_verb("hablar").with_favorites(&favorites);

        assert_eq!(
            config.verb_scope(),
            VerbScope::Favorites(vec!["comer".to_string(), "vivir".to_string()])
        );
    }

    #[test]
    fn test_empty_favorites_do_not_fall_back_to_verb() {
        let config = QuizConfig::for_verb("hablar").with_favorites(&Favorites::default());
        assert!(config.favorites_only);
        assert_eq!(config.verb_scope(), VerbScope::Favorites(Vec::new()));
    }

    #[test]
    fn test_setup_defaults() {
        let config = QuizConfig::setup_defaults();
        assert_eq!(config.moods, vec!["Indicativo"]);
        assert_eq!(config.tenses, vec!["Presente"]);
        assert_eq!(config.question_count, Some(10));
        assert!(config.verb.is_none());
    }
}
