//! Display specifications produced by the subtype-code resolvers.

use serde::{Deserialize, Serialize};

/// A resolved secondary house number: block, structure or letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub abbrev: String,
    pub full: String,
    pub value: String,
}

/// How one level of the address renders: type abbreviation, full type label
/// and the value they qualify, plus any secondary house numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub abbrev: String,
    pub full: String,
    pub value: String,
    pub blocks: Vec<BlockSpec>,
}

impl LevelSpec {
    pub fn new(abbrev: &str, full: &str, value: impl Into<String>) -> Self {
        Self {
            abbrev: abbrev.to_string(),
            full: full.to_string(),
            value: value.into(),
            blocks: Vec::new(),
        }
    }
}
