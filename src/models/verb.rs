//! Verb is a pair <infinitive, translation>. The infinitive is the unique key.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    pub infinitive: String,
    pub translation: String,
}

impl Verb {
    pub fn new(infinitive: &str, translation: &str) -> Self {
        Self {
            infinitive: infinitive.to_string(),
            translation: translation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_creation() {
        let verb = Verb::new("hablar", "to speak");

        assert_eq!(verb.infinitive, "hablar");
        assert_eq!(verb.translation, "to speak");
    }

    #[test]
    fn test_verb_deserialize() {
        let verb: Verb =
            serde_json::from_str(r#"{"infinitive":"comer","translation":"to eat"}"#).unwrap();
        assert_eq!(verb, Verb::new("comer", "to eat"));
    }
}
