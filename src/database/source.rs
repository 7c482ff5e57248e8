//! Read-only data source seam used by the quiz generator.
//!
//! [`rusqlite::Connection`] implements it against the bundled database
//! (see `db.rs`); [`MemorySource`] serves the same queries from vectors.

use crate::error::Result;
use crate::models::{AppSettings, Conjugation, FormVariant, QuizConfig, QuizQuestion, Verb, VerbScope};
use std::collections::BTreeMap;

/// Conjugation rows to fetch. Every active predicate must hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationFilter {
    pub scope: VerbScope,
    pub moods: Vec<String>,
    pub tenses: Vec<String>,
    pub include_vosotros: bool,
}

impl ConjugationFilter {
    pub fn from_config(config: &QuizConfig, settings: &AppSettings) -> Self {
        Self {
            scope: config.verb_scope(),
            moods: config.moods.clone(),
            tenses: config.tenses.clone(),
            include_vosotros: settings.include_vosotros,
        }
    }

    /// Form variants this filter drops.
    pub fn excluded_variants(&self) -> Vec<FormVariant> {
        if self.include_vosotros {
            Vec::new()
        } else {
            vec![FormVariant::Vosotros]
        }
    }

    pub fn matches(&self, conjugation: &Conjugation) -> bool {
        let in_scope = match &self.scope {
            VerbScope::All => true,
            VerbScope::Single(verb) => conjugation.infinitive == *verb,
            VerbScope::Favorites(verbs) => verbs.contains(&conjugation.infinitive),
        };

        in_scope
            && (self.moods.is_empty() || self.moods.contains(&conjugation.mood))
            && (self.tenses.is_empty() || self.tenses.contains(&conjugation.tense))
            && !self.excluded_variants().contains(&conjugation.form_variant())
    }
}

pub trait ConjugationSource {
    /// Conjugations joined with their verb, in storage order.
    fn fetch_quiz_rows(&self, filter: &ConjugationFilter) -> Result<Vec<QuizQuestion>>;

    fn fetch_verb(&self, infinitive: &str) -> Result<Option<Verb>>;
}

/// In-process dataset, mainly for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    verbs: BTreeMap<String, Verb>,
    conjugations: Vec<Conjugation>,
}

impl MemorySource {
    pub fn new(verbs: Vec<Verb>, conjugations: Vec<Conjugation>) -> Self {
        let verbs = verbs
            .into_iter()
            .map(|verb| (verb.infinitive.clone(), verb))
            .collect();
        Self {
            verbs,
            conjugations,
        }
    }

    pub fn verbs(&self) -> impl Iterator<Item = &Verb> {
        self.verbs.values()
    }

    pub fn conjugations(&self) -> &[Conjugation] {
        &self.conjugations
    }
}

impl ConjugationSource for MemorySource {
    fn fetch_quiz_rows(&self, filter: &ConjugationFilter) -> Result<Vec<QuizQuestion>> {
        // Inner join: rows whose verb is missing are dropped.
        let rows = self
            .conjugations
            .iter()
            .filter(|conj| filter.matches(conj))
            .filter_map(|conj| {
                self.verbs
                    .get(&conj.infinitive)
                    .map(|verb| QuizQuestion::from_conjugation(verb, conj))
            })
            .collect();
        Ok(rows)
    }

    fn fetch_verb(&self, infinitive: &str) -> Result<Option<Verb>> {
        Ok(self.verbs.get(infinitive).cloned())
    }
}
