//! The beater table: which objects defeat which.
//!
//! Loaded once from an embedded JSON document and never mutated afterwards.
//! Invariants: every key is lowercase, and every entry has at least one
//! beater. Entries whose beaters have no table entry of their own are
//! chain-enders (see [`crate::game_logic`]).

use serde::Deserialize;
use std::collections::HashMap;

/// Embedded table data, parsed at startup.
const BEATERS_JSON: &str = include_str!("../data/beaters.json");

/// A single object's entry: what beats it, and how to display it.
#[derive(Debug, Clone, Deserialize)]
pub struct BeaterEntry {
    /// Object names that are valid winning answers against this object.
    pub beaters: Vec<String>,
    /// Presentation-only metadata; the game logic never inspects this.
    pub emoji: String,
}

impl BeaterEntry {
    /// Whether `answer` (already normalized) defeats this object.
    pub fn is_beaten_by(&self, answer: &str) -> bool {
        self.beaters.iter().any(|b| b == answer)
    }
}

/// Fixed mapping from object name to its [`BeaterEntry`].
#[derive(Debug, Clone)]
pub struct BeaterTable {
    entries: HashMap<String, BeaterEntry>,
}

impl BeaterTable {
    /// Load the standard five-object table embedded in the binary.
    ///
    /// Panics if the embedded JSON is malformed; the data is part of the
    /// binary, so that is a build defect rather than a runtime condition.
    pub fn standard() -> Self {
        let entries: HashMap<String, BeaterEntry> =
            serde_json::from_str(BEATERS_JSON).expect("embedded beater table is valid JSON");
        Self { entries }
    }

    /// Look up an object's entry. Returns `None` for unknown objects,
    /// which is how chain-enders are detected.
    pub fn get(&self, object: &str) -> Option<&BeaterEntry> {
        self.entries.get(object)
    }

    /// Whether `object` has its own entry (the chain can continue from it).
    pub fn contains(&self, object: &str) -> bool {
        self.entries.contains_key(object)
    }

    /// Whether `answer` defeats `object`. Unknown objects are beaten by
    /// nothing.
    pub fn beats(&self, object: &str, answer: &str) -> bool {
        self.get(object)
            .map_or(false, |entry| entry.is_beaten_by(answer))
    }

    /// Iterate over all object names in the table.
    pub fn objects(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STARTING_OBJECT;

    #[test]
    fn test_standard_table_loads() {
        let table = BeaterTable::standard();
        assert_eq!(table.len(), 5);
        assert!(table.contains(STARTING_OBJECT));
    }

    #[test]
    fn test_all_keys_lowercase() {
        let table = BeaterTable::standard();
        for object in table.objects() {
            assert_eq!(
                object,
                object.to_lowercase(),
                "table key {:?} is not lowercase",
                object
            );
        }
    }

    #[test]
    fn test_all_entries_have_beaters() {
        let table = BeaterTable::standard();
        for object in table.objects() {
            let entry = table.get(object).unwrap();
            assert!(
                !entry.beaters.is_empty(),
                "object {:?} has no beaters",
                object
            );
        }
    }

    #[test]
    fn test_beats_lookup() {
        let table = BeaterTable::standard();
        assert!(table.beats("rock", "paper"));
        assert!(table.beats("paper", "scissors"));
        assert!(table.beats("scissors", "metal"));
        assert!(!table.beats("rock", "banana"));
        // Unknown objects are beaten by nothing
        assert!(!table.beats("banana", "rock"));
    }

    #[test]
    fn test_chain_ender_has_no_entry() {
        // "metal" beats scissors but has no entry of its own
        let table = BeaterTable::standard();
        assert!(table.beats("scissors", "metal"));
        assert!(!table.contains("metal"));
    }

    #[test]
    fn test_every_entry_has_display_emoji() {
        let table = BeaterTable::standard();
        for object in table.objects() {
            assert!(!table.get(object).unwrap().emoji.is_empty());
        }
    }
}
