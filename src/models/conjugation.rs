//! A single conjugated form: one row per (verb, mood, tense, performer).
use serde::{Deserialize, Serialize};

/// Performer label of the informal second-person plural.
pub const VOSOTROS_PERFORMER: &str = "vosotros/vosotras";

/// Regional variant a conjugated form belongs to.
///
/// The dataset only labels performers with free text. Labels are matched
/// exactly, the same way the SQL filter compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    /// Used in every Spanish-speaking region
    #[default]
    Common,
    /// vosotros/vosotras, European Spanish only
    Vosotros,
}

impl FormVariant {
    pub fn of_performer(performer: &str) -> Self {
        if Self::Vosotros.performers().contains(&performer) {
            Self::Vosotros
        } else {
            Self::Common
        }
    }

    /// Performer labels that belong exclusively to this variant.
    /// Common forms are everything else, so it lists nothing.
    pub fn performers(self) -> &'static [&'static str] {
        match self {
            FormVariant::Common => &[],
            FormVariant::Vosotros => &[VOSOTROS_PERFORMER],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    pub id: i64,
    pub infinitive: String,
    pub mood: String,
    pub tense: String,
    pub performer: String,
    pub performer_en: String,
    pub conjugated_form: String,
}

impl Conjugation {
    pub fn new(
        id: i64,
        infinitive: &str,
        mood: &str,
        tense: &str,
        performer: &str,
        performer_en: &str,
        conjugated_form: &str,
    ) -> Self {
        Self {
            id,
            infinitive: infinitive.to_string(),
            mood: mood.to_string(),
            tense: tense.to_string(),
            performer: performer.to_string(),
            performer_en: performer_en.to_string(),
            conjugated_form: conjugated_form.to_string(),
        }
    }

    /// Always follows the current performer label.
    pub fn form_variant(&self) -> FormVariant {
        FormVariant::of_performer(&self.performer)
    }

    pub fn is_vosotros(&self) -> bool {
        self.form_variant() == FormVariant::Vosotros
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_performer() {
        assert_eq!(
            FormVariant::of_performer("vosotros/vosotras"),
            FormVariant::Vosotros
        );
        assert_eq!(FormVariant::of_performer("yo"), FormVariant::Common);
        assert_eq!(
            FormVariant::of_performer("nosotros/nosotras"),
            FormVariant::Common
        );
        assert_eq!(
            FormVariant::of_performer("ellos/ellas/ustedes"),
            FormVariant::Common
        );
    }

    #[test]
    fn test_variant_label_match_is_exact() {
        assert_eq!(
            FormVariant::of_performer(" vosotros/vosotras"),
            FormVariant::Common
        );
    }

    #[test]
    fn test_deserialized_row_derives_variant() {
        let conj: Conjugation = serde_json::from_str(
            r#"{"id":5,"infinitive":"hablar","mood":"Indicativo","tense":"Presente",
                "performer":"vosotros/vosotras","performer_en":"you all (informal)",
                "conjugated_form":"habláis","form_variant":"common"}"#,
        )
        .unwrap();
        assert!(conj.is_vosotros());
    }

    #[test]
    fn test_variant_follows_performer_edits() {
        let mut conj = Conjugation::new(1, "hablar", "Indicativo", "Presente", "yo", "I", "hablo");
        conj.performer = VOSOTROS_PERFORMER.to_string();
        assert_eq!(conj.form_variant(), FormVariant::Vosotros);
    }

    #[test]
    fn test_conjugation_tags_variant() {
        let conj = Conjugation::new(
            5,
            "hablar",
            "Indicativo",
            "Presente",
            "vosotros/vosotras",
            "you all (informal)",
            "habláis",
        );
        assert!(conj.is_vosotros());

        let conj = Conjugation::new(1, "hablar", "Indicativo", "Presente", "yo", "I", "hablo");
        assert!(!conj.is_vosotros());
    }
}
