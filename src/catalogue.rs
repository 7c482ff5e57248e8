//! Fixed vocabulary of the conjugation dataset: moods, tenses and performers
//! in their display order, quiz setup options and the common-verbs list.

pub const AVAILABLE_MOODS: [&str; 4] = [
    "Indicativo",
    "Subjuntivo",
    "Imperativo Afirmativo",
    "Imperativo Negativo",
];

pub const AVAILABLE_TENSES: [&str; 10] = [
    "Presente",
    "Pretérito",
    "Imperfecto",
    "Futuro",
    "Condicional",
    "Pretérito perfecto",
    "Pluscuamperfecto",
    "Pretérito anterior",
    "Futuro perfecto",
    "Condicional perfecto",
];

pub const PERFORMERS: [&str; 6] = [
    "yo",
    "tú",
    "él/ella/usted",
    "nosotros/nosotras",
    "vosotros/vosotras",
    "ellos/ellas/ustedes",
];

pub const QUESTION_COUNTS: [usize; 5] = [5, 10, 15, 20, 25];

pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const DEFAULT_MOOD: &str = "Indicativo";
pub const DEFAULT_TENSE: &str = "Presente";

/// The most frequent Spanish verbs, most frequent first.
pub const COMMON_VERBS: &[&str] = &[
    "ser", "haber", "estar", "tener", "hacer", "poder", "decir", "ir", "ver", "dar",
    "saber", "querer", "llegar", "pasar", "deber", "poner", "parecer", "quedar", "creer", "hablar",
    "llevar", "dejar", "seguir", "encontrar", "llamar", "venir", "pensar", "salir", "volver", "tomar",
    "conocer", "vivir", "sentir", "tratar", "mirar", "contar", "empezar", "esperar", "buscar", "existir",
    "entrar", "trabajar", "escribir", "perder", "producir", "ocurrir", "entender", "pedir", "recibir", "recordar",
    "terminar", "permitir", "aparecer", "conseguir", "comenzar", "servir", "sacar", "necesitar", "mantener", "resultar",
    "leer", "caer", "cambiar", "presentar", "crear", "abrir", "considerar", "acabar", "cumplir", "realizar",
    "suponer", "comprender", "lograr", "explicar", "reconocer", "estudiar", "intentar", "ganar", "formar", "traer",
    "ofrecer", "descubrir", "levantar", "acercar", "nacer", "dirigir", "correr", "utilizar", "pagar", "ayudar",
    "gustar", "jugar", "escuchar", "mover", "preguntar", "tocar", "mostrar", "amar", "partir",
];

pub fn is_common_verb(infinitive: &str) -> bool {
    COMMON_VERBS.contains(&infinitive)
}

/// 1-based frequency rank of a common verb.
pub fn common_verb_rank(infinitive: &str) -> Option<usize> {
    COMMON_VERBS
        .iter()
        .position(|verb| *verb == infinitive)
        .map(|idx| idx + 1)
}

fn rank(list: &[&str], value: &str) -> usize {
    list.iter()
        .position(|item| *item == value)
        .unwrap_or(list.len())
}

/// Sort key for moods; unknown moods sort last.
pub fn mood_rank(mood: &str) -> usize {
    rank(&AVAILABLE_MOODS, mood)
}

/// Sort key for tenses; unknown tenses sort last.
pub fn tense_rank(tense: &str) -> usize {
    rank(&AVAILABLE_TENSES, tense)
}

/// Sort key for performers; unknown performers sort last.
pub fn performer_rank(performer: &str) -> usize {
    rank(&PERFORMERS, performer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ranks_follow_display_order() {
        assert!(mood_rank("Indicativo") < mood_rank("Subjuntivo"));
        assert!(tense_rank("Presente") < tense_rank("Condicional perfecto"));
        assert!(performer_rank("yo") < performer_rank("ellos/ellas/ustedes"));
    }

    #[test]
    fn test_unknown_values_sort_last() {
        assert_eq!(mood_rank("Gerundio"), AVAILABLE_MOODS.len());
        assert_eq!(tense_rank("Pasado"), AVAILABLE_TENSES.len());
        assert_eq!(performer_rank("vos"), PERFORMERS.len());
    }

    #[test]
    fn test_common_verb_rank() {
        assert_eq!(common_verb_rank("ser"), Some(1));
        assert_eq!(common_verb_rank("hablar"), Some(20));
        assert_eq!(common_verb_rank("xyz"), None);
        assert!(is_common_verb("partir"));
        assert!(!is_common_verb("bailar"));
    }

    #[test]
    fn test_common_verbs_are_unique() {
        let unique: HashSet<_> = COMMON_VERBS.iter().collect();
        assert_eq!(unique.len(), COMMON_VERBS.len());
    }
}
