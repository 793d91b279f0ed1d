//! Colloquial-name synonym dictionary.
//!
//! Loaded once at startup and treated as read-only; the assembler takes it
//! by shared reference. Keys are matched case-insensitively.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Name → colloquial alternates, keyed case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    map: BTreeMap<String, Vec<String>>,
}

impl SynonymDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from (name, synonyms) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for (name, synonyms) in pairs {
            dict.insert(name.as_ref(), synonyms);
        }
        dict
    }

    /// Load a dictionary from its JSON form: an object mapping each name to
    /// an array of synonyms.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw = BTreeMap::<String, Vec<String>>::deserialize(
            &mut serde_json::Deserializer::from_str(json),
        )?;
        Ok(Self::from_pairs(raw))
    }

    fn insert(&mut self, name: &str, synonyms: Vec<String>) {
        self.map.insert(name.trim().to_uppercase(), synonyms);
    }

    /// Synonyms for a name; empty when the name is unknown.
    pub fn lookup(&self, name: &str) -> &[String] {
        self.map
            .get(&name.trim().to_uppercase())
            .map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}
