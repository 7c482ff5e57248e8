//! Database operations for the conjugation dataset
//!
//! Handles SQLite schema initialization, verb lookup and search, conjugation
//! tables, the filtered quiz query and the app_state key-value table that
//! stores settings and favorites.

use super::sample::{sample_conjugations, sample_verbs};
use super::source::{ConjugationFilter, ConjugationSource};
use crate::catalogue::COMMON_VERBS;
use crate::error::Result;
use crate::models::{
    AppSettings, Conjugation, ConjugationTable, Favorites, QuizQuestion, Verb, VerbScope,
};
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

/// Maximum number of verbs returned by [`search_verbs`]
pub const SEARCH_LIMIT: usize = 50;

const SETTINGS_KEY: &str = "settings";
const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseStats {
    pub verb_count: usize,
    pub conjugation_count: usize,
}

/// Opens (or creates) the database file and makes sure the schema exists
pub fn open_database<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path.as_ref())?;
    init_schema(&conn)?;
    info!("Opened database at {}", path.as_ref().display());
    Ok(conn)
}

/// Creates tables for verbs, conjugations and app state
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS verbs (
            infinitive TEXT PRIMARY KEY,
            translation TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS conjugations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            infinitive TEXT NOT NULL,
            mood TEXT NOT NULL,
            tense TEXT NOT NULL,
            performer TEXT NOT NULL,
            performer_en TEXT NOT NULL,
            conjugated_form TEXT NOT NULL,
            FOREIGN KEY (infinitive) REFERENCES verbs(infinitive)
        );

        CREATE INDEX IF NOT EXISTS idx_infinitive ON conjugations(infinitive);
        CREATE INDEX IF NOT EXISTS idx_mood_tense ON conjugations(mood, tense);

        CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )?;
    Ok(())
}

pub fn insert_verb(verb: &Verb, conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO verbs (infinitive, translation) VALUES (?1, ?2)",
        params![verb.infinitive, verb.translation],
    )?;
    Ok(())
}

/// Inserts a conjugation row, keeping its id. Returns the row id.
pub fn insert_conjugation(conjugation: &Conjugation, conn: &Connection) -> Result<i64> {
    conn.execute(
        "INSERT OR REPLACE INTO conjugations
            (id, infinitive, mood, tense, performer, performer_en, conjugated_form)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            conjugation.id,
            conjugation.infinitive,
            conjugation.mood,
            conjugation.tense,
            conjugation.performer,
            conjugation.performer_en,
            conjugation.conjugated_form
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Loads the built-in sample dataset if the verbs table is empty.
///
/// Returns the number of conjugations inserted (0 if data was already there).
pub fn seed_sample_data(conn: &Connection) -> Result<usize> {
    if database_stats(conn)?.verb_count > 0 {
        return Ok(0);
    }

    let tx = conn.unchecked_transaction()?;
    for verb in sample_verbs() {
        insert_verb(&verb, &tx)?;
    }
    let conjugations = sample_conjugations();
    for conjugation in &conjugations {
        insert_conjugation(conjugation, &tx)?;
    }
    tx.commit()?;

    info!("Seeded sample data: {} conjugations", conjugations.len());
    Ok(conjugations.len())
}

/// Verbs whose infinitive starts with `query`, alphabetically, at most [`SEARCH_LIMIT`]
///
/// A blank query returns nothing rather than the whole dataset.
pub fn search_verbs(query: &str, conn: &Connection) -> Result<Vec<Verb>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let pattern = format!(
        "{}%",
        query
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_")
    );
    let mut stmt = conn.prepare(
        "SELECT infinitive, translation FROM verbs
         WHERE infinitive LIKE ?1 ESCAPE '\\'
         ORDER BY infinitive LIMIT ?2",
    )?;
    let verbs = stmt
        .query_map(params![pattern, SEARCH_LIMIT as i64], row_to_verb)?
        .collect::<rusqlite::Result<Vec<Verb>>>()?;
    Ok(verbs)
}

pub fn get_all_verbs(conn: &Connection) -> Result<Vec<Verb>> {
    let mut stmt =
        conn.prepare("SELECT infinitive, translation FROM verbs ORDER BY infinitive")?;
    let verbs = stmt
        .query_map([], row_to_verb)?
        .collect::<rusqlite::Result<Vec<Verb>>>()?;
    Ok(verbs)
}

pub fn get_verb(infinitive: &str, conn: &Connection) -> Result<Option<Verb>> {
    let verb = conn
        .query_row(
            "SELECT infinitive, translation FROM verbs WHERE infinitive = ?1",
            params![infinitive],
            row_to_verb,
        )
        .optional()?;
    Ok(verb)
}

/// Picks up to `count` distinct verbs in random order
pub fn get_random_verbs<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
    conn: &Connection,
) -> Result<Vec<Verb>> {
    let mut verbs = get_all_verbs(conn)?;
    verbs.shuffle(rng);
    verbs.truncate(count);
    Ok(verbs)
}

/// Common verbs present in the dataset, most frequent first
pub fn common_verbs(conn: &Connection) -> Result<Vec<Verb>> {
    let mut verbs = Vec::new();
    for infinitive in COMMON_VERBS {
        if let Some(verb) = get_verb(infinitive, conn)? {
            verbs.push(verb);
        }
    }
    Ok(verbs)
}

pub fn get_conjugations_for_verb(infinitive: &str, conn: &Connection) -> Result<Vec<Conjugation>> {
    let mut stmt = conn.prepare(
        "SELECT id, infinitive, mood, tense, performer, performer_en, conjugated_form
         FROM conjugations WHERE infinitive = ?1 ORDER BY id",
    )?;
    let rows = stmt
        .query_map(params![infinitive], |row| {
            Ok(Conjugation::new(
                row.get(0)?,
                &row.get::<_, String>(1)?,
                &row.get::<_, String>(2)?,
                &row.get::<_, String>(3)?,
                &row.get::<_, String>(4)?,
                &row.get::<_, String>(5)?,
                &row.get::<_, String>(6)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<Conjugation>>>()?;
    Ok(rows)
}

/// All conjugations of a verb, organized by mood and tense
pub fn get_verb_conjugations(infinitive: &str, conn: &Connection) -> Result<ConjugationTable> {
    let rows = get_conjugations_for_verb(infinitive, conn)?;
    Ok(ConjugationTable::from_rows(infinitive, rows))
}

pub fn database_stats(conn: &Connection) -> Result<DatabaseStats> {
    let verb_count: i64 = conn.query_row("SELECT COUNT(*) FROM verbs", [], |row| row.get(0))?;
    let conjugation_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM conjugations", [], |row| row.get(0))?;
    Ok(DatabaseStats {
        verb_count: verb_count as usize,
        conjugation_count: conjugation_count as usize,
    })
}

/// Builds the WHERE clause for a filter together with its positional parameters
fn where_clause(filter: &ConjugationFilter) -> (String, Vec<String>) {
    let mut conditions = Vec::new();
    let mut params = Vec::new();

    match &filter.scope {
        VerbScope::All => {}
        VerbScope::Single(verb) => {
            conditions.push("c.infinitive = ?".to_string());
            params.push(verb.clone());
        }
        VerbScope::Favorites(verbs) if verbs.is_empty() => {
            conditions.push("0 = 1".to_string());
        }
        VerbScope::Favorites(verbs) => {
            conditions.push(format!("c.infinitive IN ({})", placeholders(verbs.len())));
            params.extend(verbs.iter().cloned());
        }
    }

    if !filter.moods.is_empty() {
        conditions.push(format!("c.mood IN ({})", placeholders(filter.moods.len())));
        params.extend(filter.moods.iter().cloned());
    }

    if !filter.tenses.is_empty() {
        conditions.push(format!("c.tense IN ({})", placeholders(filter.tenses.len())));
        params.extend(filter.tenses.iter().cloned());
    }

    for variant in filter.excluded_variants() {
        let labels = variant.performers();
        if !labels.is_empty() {
            conditions.push(format!("c.performer NOT IN ({})", placeholders(labels.len())));
            params.extend(labels.iter().map(|label| label.to_string()));
        }
    }

    if conditions.is_empty() {
        (String::new(), params)
    } else {
        (format!("WHERE {}", conditions.join(" AND ")), params)
    }
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// Conjugations matching the filter joined with their verb, in id order
pub fn fetch_quiz_rows(filter: &ConjugationFilter, conn: &Connection) -> Result<Vec<QuizQuestion>> {
    let (where_sql, params) = where_clause(filter);
    let query = format!(
        "SELECT c.infinitive, v.translation, c.mood, c.tense, c.performer, c.performer_en,
                c.conjugated_form
         FROM conjugations c
         INNER JOIN verbs v ON c.infinitive = v.infinitive
         {where_sql}
         ORDER BY c.id"
    );
    debug!("Quiz query {where_sql} with {params:?}");

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt
        .query_map(params_from_iter(params.iter()), |row| {
            Ok(QuizQuestion {
                infinitive: row.get(0)?,
                translation: row.get(1)?,
                mood: row.get(2)?,
                tense: row.get(3)?,
                performer: row.get(4)?,
                performer_en: row.get(5)?,
                correct_answer: row.get(6)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<QuizQuestion>>>()?;
    Ok(rows)
}

impl ConjugationSource for Connection {
    fn fetch_quiz_rows(&self, filter: &ConjugationFilter) -> Result<Vec<QuizQuestion>> {
        fetch_quiz_rows(filter, self)
    }

    fn fetch_verb(&self, infinitive: &str) -> Result<Option<Verb>> {
        get_verb(infinitive, self)
    }
}

fn row_to_verb(row: &rusqlite::Row<'_>) -> rusqlite::Result<Verb> {
    Ok(Verb {
        infinitive: row.get(0)?,
        translation: row.get(1)?,
    })
}

fn load_state<T: DeserializeOwned>(key: &str, conn: &Connection) -> Result<Option<T>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    match value {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

fn save_state<T: Serialize>(key: &str, value: &T, conn: &Connection) -> Result<()> {
    let json = serde_json::to_string(value)?;
    conn.execute(
        "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2)",
        params![key, json],
    )?;
    Ok(())
}

/// Stored settings, or the defaults if none were saved yet
pub fn load_settings(conn: &Connection) -> Result<AppSettings> {
    Ok(load_state(SETTINGS_KEY, conn)?.unwrap_or_default())
}

pub fn save_settings(settings: &AppSettings, conn: &Connection) -> Result<()> {
    save_state(SETTINGS_KEY, settings, conn)?;
    debug!("Saved settings {settings:?}");
    Ok(())
}

pub fn load_favorites(conn: &Connection) -> Result<Favorites> {
    Ok(load_state(FAVORITES_KEY, conn)?.unwrap_or_default())
}

pub fn save_favorites(favorites: &Favorites, conn: &Connection) -> Result<()> {
    save_state(FAVORITES_KEY, favorites, conn)?;
    debug!("Saved {} favorites", favorites.len());
    Ok(())
}
