//! Small built-in dataset: four verbs in three tenses, all six performers.
//! Seeded into an empty database so the app is usable without the full
//! verb dump.

use super::source::MemorySource;
use crate::catalogue::PERFORMERS;
use crate::models::{Conjugation, Verb};

const PERFORMERS_EN: [&str; 6] = [
    "I",
    "you (informal)",
    "he/she/you (formal)",
    "we",
    "you all (informal)",
    "they/you all (formal)",
];

const VERBS: [(&str, &str); 4] = [
    ("hablar", "to speak"),
    ("comer", "to eat"),
    ("vivir", "to live"),
    ("ser", "to be"),
];

type Paradigm = (&'static str, &'static str, &'static str, [&'static str; 6]);

const PARADIGMS: [Paradigm; 12] = [
    ("hablar", "Indicativo", "Presente", ["hablo", "hablas", "habla", "hablamos", "habláis", "hablan"]),
    ("hablar", "Indicativo", "Pretérito", ["hablé", "hablaste", "habló", "hablamos", "hablasteis", "hablaron"]),
    ("hablar", "Subjuntivo", "Presente", ["hable", "hables", "hable", "hablemos", "habléis", "hablen"]),
    ("comer", "Indicativo", "Presente", ["como", "comes", "come", "comemos", "coméis", "comen"]),
    ("comer", "Indicativo", "Pretérito", ["comí", "comiste", "comió", "comimos", "comisteis", "comieron"]),
    ("comer", "Subjuntivo", "Presente", ["coma", "comas", "coma", "comamos", "comáis", "coman"]),
    ("vivir", "Indicativo", "Presente", ["vivo", "vives", "vive", "vivimos", "vivís", "viven"]),
    ("vivir", "Indicativo", "Pretérito", ["viví", "viviste", "vivió", "vivimos", "vivisteis", "vivieron"]),
    ("vivir", "Subjuntivo", "Presente", ["viva", "vivas", "viva", "vivamos", "viváis", "vivan"]),
    ("ser", "Indicativo", "Presente", ["soy", "eres", "es", "somos", "sois", "son"]),
    ("ser", "Indicativo", "Pretérito", ["fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron"]),
    ("ser", "Subjuntivo", "Presente", ["sea", "seas", "sea", "seamos", "seáis", "sean"]),
];

pub fn sample_verbs() -> Vec<Verb> {
    VERBS
        .iter()
        .map(|(infinitive, translation)| Verb::new(infinitive, translation))
        .collect()
}

/// Rows are numbered from 1 in paradigm order.
pub fn sample_conjugations() -> Vec<Conjugation> {
    PARADIGMS
        .iter()
        .flat_map(|(infinitive, mood, tense, forms)| {
            forms.iter().enumerate().map(move |(person, form)| {
                (*infinitive, *mood, *tense, person, *form)
            })
        })
        .enumerate()
        .map(|(idx, (infinitive, mood, tense, person, form))| {
            Conjugation::new(
                idx as i64 + 1,
                infinitive,
                mood,
                tense,
                PERFORMERS[person],
                PERFORMERS_EN[person],
                form,
            )
        })
        .collect()
}

pub fn sample_source() -> MemorySource {
    MemorySource::new(sample_verbs(), sample_conjugations())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_sizes() {
        assert_eq!(sample_verbs().len(), 4);
        assert_eq!(sample_conjugations().len(), 72);
    }

    #[test]
    fn test_sample_ids_unique() {
        let ids: HashSet<_> = sample_conjugations().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 72);
    }

    #[test]
    fn test_every_row_has_a_verb() {
        let verbs: HashSet<_> = sample_verbs().into_iter().map(|v| v.infinitive).collect();
        assert!(sample_conjugations().iter().all(|c| verbs.contains(&c.infinitive)));
    }

    #[test]
    fn test_one_vosotros_row_per_paradigm() {
        let vosotros = sample_conjugations()
            .iter()
            .filter(|c| c.is_vosotros())
            .count();
        assert_eq!(vosotros, 12);
    }
}
