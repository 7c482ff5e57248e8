//! User preferences and favorite verbs.
//!
//! Both are plain values owned by the application shell. The quiz core only
//! ever sees a snapshot passed in as a parameter.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// true = European Spanish (with vosotros), false = Latin American
    pub include_vosotros: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            include_vosotros: true,
        }
    }
}

/// Set of favorite infinitives, kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    infinitives: BTreeSet<String>,
}

impl Favorites {
    /// Returns false if the verb was already a favorite.
    pub fn add(&mut self, infinitive: &str) -> bool {
        self.infinitives.insert(infinitive.to_string())
    }

    /// Returns false if the verb was not a favorite.
    pub fn remove(&mut self, infinitive: &str) -> bool {
        self.infinitives.remove(infinitive)
    }

    /// Returns the new favorite status.
    pub fn toggle(&mut self, infinitive: &str) -> bool {
        if self.remove(infinitive) {
            false
        } else {
            self.add(infinitive)
        }
    }

    pub fn contains(&self, infinitive: &str) -> bool {
        self.infinitives.contains(infinitive)
    }

    pub fn len(&self) -> usize {
        self.infinitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infinitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.infinitives.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.infinitives.iter().cloned().collect()
    }
}
