//! All conjugations of one verb, grouped by mood and then by tense.
use super::Conjugation;
use crate::catalogue::{mood_rank, performer_rank, tense_rank};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TenseGroup {
    pub tense: String,
    pub conjugations: Vec<Conjugation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodGroup {
    pub mood: String,
    pub tenses: Vec<TenseGroup>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConjugationTable {
    pub infinitive: String,
    pub moods: Vec<MoodGroup>,
}

impl ConjugationTable {
    /// Builds the table in display order (mood, tense, performer).
    /// Rows of other verbs are ignored.
    pub fn from_rows(infinitive: &str, mut rows: Vec<Conjugation>) -> Self {
        rows.retain(|row| row.infinitive == infinitive);
        rows.sort_by_key(|row| {
            (
                mood_rank(&row.mood),
                tense_rank(&row.tense),
                performer_rank(&row.performer),
            )
        });

        let mut moods: Vec<MoodGroup> = Vec::new();
        for row in rows {
            if moods.last().is_none_or(|group| group.mood != row.mood) {
                moods.push(MoodGroup {
                    mood: row.mood.clone(),
                    tenses: Vec::new(),
                });
            }
            let Some(mood) = moods.last_mut() else {
                continue;
            };

            if mood.tenses.last().is_none_or(|group| group.tense != row.tense) {
                mood.tenses.push(TenseGroup {
                    tense: row.tense.clone(),
                    conjugations: Vec::new(),
                });
            }
            if let Some(tense) = mood.tenses.last_mut() {
                tense.conjugations.push(row);
            }
        }

        Self {
            infinitive: infinitive.to_string(),
            moods,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    pub fn tense(&self, mood: &str, tense: &str) -> Option<&TenseGroup> {
        self.moods
            .iter()
            .find(|group| group.mood == mood)
            .and_then(|group| group.tenses.iter().find(|t| t.tense == tense))
    }

    /// Drops the vosotros/vosotras rows, for users studying Latin American Spanish.
    pub fn without_vosotros(mut self) -> Self {
        for mood in &mut self.moods {
            for tense in &mut mood.tenses {
                tense.conjugations.retain(|conj| !conj.is_vosotros());
            }
        }
        self
    }

    pub fn conjugation_count(&self) -> usize {
        self.moods
            .iter()
            .flat_map(|mood| &mood.tenses)
            .map(|tense| tense.conjugations.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, mood: &str, tense: &str, performer: &str, form: &str) -> Conjugation {
        Conjugation::new(id, "hablar", mood, tense, performer, "", form)
    }

    fn sample_rows() -> Vec<Conjugation> {
        vec![
            row(1, "Subjuntivo", "Presente", "yo", "hable"),
            row(2, "Indicativo", "Pretérito", "yo", "hablé"),
            row(3, "Indicativo", "Presente", "vosotros/vosotras", "habláis"),
            row(4, "Indicativo", "Presente", "yo", "hablo"),
            row(5, "Indicativo", "Presente", "tú", "hablas"),
        ]
    }

    #[test]
    fn test_groups_in_display_order() {
        let table = ConjugationTable::from_rows("hablar", sample_rows());

        let moods: Vec<_> = table.moods.iter().map(|m| m.mood.as_str()).collect();
        assert_eq!(moods, vec!["Indicativo", "Subjuntivo"]);

        let indicative: Vec<_> = table.moods[0]
            .tenses
            .iter()
            .map(|t| t.tense.as_str())
            .collect();
        assert_eq!(indicative, vec!["Presente", "Pretérito"]);

        let present = table.tense("Indicativo", "Presente").unwrap();
        let forms: Vec<_> = present
            .conjugations
            .iter()
            .map(|c| c.conjugated_form.as_str())
            .collect();
        assert_eq!(forms, vec!["hablo", "hablas", "habláis"]);
        assert_eq!(table.conjugation_count(), 5);
    }

    #[test]
    fn test_without_vosotros() {
        let table = ConjugationTable::from_rows("hablar", sample_rows()).without_vosotros();
        assert_eq!(table.conjugation_count(), 4);
        assert!(
            table
                .tense("Indicativo", "Presente")
                .unwrap()
                .conjugations
                .iter()
                .all(|c| !c.is_vosotros())
        );
    }

    #[test]
    fn test_ignores_other_verbs() {
        let mut rows = sample_rows();
        rows.push(Conjugation::new(9, "comer", "Indicativo", "Presente", "yo", "I", "como"));
        let table = ConjugationTable::from_rows("hablar", rows);
        assert_eq!(table.conjugation_count(), 5);
    }

    #[test]
    fn test_empty_table() {
        let table = ConjugationTable::from_rows("hablar", Vec::new());
        assert!(table.is_empty());
        assert!(table.tense("Indicativo", "Presente").is_none());
    }
}
