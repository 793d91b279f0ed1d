//! The assembled address value and its string renderings.
//!
//! An [`Address`] is built once from a single payload and never mutated.
//! Per-level fields are all-or-nothing: a canonical level absent from the
//! path has no entry at all, never a partially populated one. Top-level
//! fields mirror the tail object only; in particular the coded attributes
//! are the tail's own and are never inherited from an ancestor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::level::{CanonicalLevel, RawLevel};
use crate::payload::GeoPoint;
use crate::record::AttributeKind;

/// A rendered secondary house number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPart {
    pub abbrev: String,
    pub full: String,
    pub value: String,
}

/// Everything resolved for one canonical level of the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub object_id: i64,
    /// Registry classification identifier for this level, when the object
    /// carries one.
    pub registry_code: Option<String>,
    pub abbrev: Option<String>,
    pub full_type: Option<String>,
    pub name: String,
    /// Secondary house numbering, empty below and above the house level.
    #[serde(default)]
    pub blocks: Vec<BlockPart>,
}

/// A coded attribute resolved to its currently valid value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAttribute {
    pub kind: AttributeKind,
    pub value: String,
}

/// The immutable assembled address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// One entry per canonical level actually present on the path.
    pub levels: BTreeMap<CanonicalLevel, LevelEntry>,
    /// Tail object id.
    pub object_id: i64,
    /// Tail raw level code.
    pub raw_level: RawLevel,
    /// Tail canonical level.
    pub canonical_level: CanonicalLevel,
    /// Currently valid coded attributes of the tail object only.
    pub attributes: Vec<ResolvedAttribute>,
    /// Distinct historical names of the tail object, chronological,
    /// excluding the current name.
    pub renamed: Vec<String>,
    /// Colloquial alternates of the region name from the synonym dictionary.
    pub synonyms: Vec<String>,
    pub coordinates: Option<GeoPoint>,
    /// Maximum of the payload's three version counters.
    pub change_version: i64,
}

impl Address {
    pub fn entry(&self, level: CanonicalLevel) -> Option<&LevelEntry> {
        self.levels.get(&level)
    }

    pub fn name(&self, level: CanonicalLevel) -> Option<&str> {
        self.entry(level).map(|e| e.name.as_str())
    }

    pub fn registry_code(&self, level: CanonicalLevel) -> Option<&str> {
        self.entry(level).and_then(|e| e.registry_code.as_deref())
    }

    pub fn abbrev(&self, level: CanonicalLevel) -> Option<&str> {
        self.entry(level).and_then(|e| e.abbrev.as_deref())
    }

    pub fn full_type(&self, level: CanonicalLevel) -> Option<&str> {
        self.entry(level).and_then(|e| e.full_type.as_deref())
    }

    /// Name prefixed with the type abbreviation, e.g. "st. Garden".
    pub fn name_with_abbrev(&self, level: CanonicalLevel) -> Option<String> {
        self.entry(level).map(|e| match &e.abbrev {
            Some(abbrev) => format!("{abbrev} {}", e.name),
            None => e.name.clone(),
        })
    }

    /// Name prefixed with the full type label, e.g. "street Garden".
    pub fn name_with_full_type(&self, level: CanonicalLevel) -> Option<String> {
        self.entry(level).map(|e| match &e.full_type {
            Some(full) => format!("{full} {}", e.name),
            None => e.name.clone(),
        })
    }

    pub fn attribute(&self, kind: AttributeKind) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.value.as_str())
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.attribute(AttributeKind::PostalCode)
    }

    /// Short rendering: abbreviated types, levels comma-separated in
    /// hierarchy order, houses followed by their block segments. With
    /// `with_renamed` set a non-empty renaming list is appended as
    /// `" (formerly: …)"`.
    pub fn short(&self, with_renamed: bool) -> String {
        self.render(|e| e.abbrev.as_deref(), |b| b.abbrev.as_str(), with_renamed)
    }

    /// Full rendering: identical to [`Address::short`] but with full type
    /// labels instead of abbreviations.
    pub fn full(&self, with_renamed: bool) -> String {
        self.render(
            |e| e.full_type.as_deref(),
            |b| b.full.as_str(),
            with_renamed,
        )
    }

    /// Name-only match key: bare names from the region through the street,
    /// joined by `separator`. With `use_renamed` set, the tail level (when
    /// inside that span) renders its most recent historical name instead of
    /// the current one.
    pub fn stamp(&self, separator: &str, use_renamed: bool) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for (level, entry) in &self.levels {
            if !level.in_stamp_span() {
                continue;
            }
            if use_renamed && *level == self.canonical_level {
                if let Some(former) = self.renamed.last() {
                    parts.push(former.as_str());
                    continue;
                }
            }
            parts.push(entry.name.as_str());
        }
        parts.join(separator)
    }

    fn render<'a>(
        &'a self,
        entry_type: impl Fn(&'a LevelEntry) -> Option<&'a str>,
        block_type: impl Fn(&'a BlockPart) -> &'a str,
        with_renamed: bool,
    ) -> String {
        let mut segments: Vec<String> = Vec::new();
        for entry in self.levels.values() {
            match entry_type(entry) {
                Some(label) => segments.push(format!("{label} {}", entry.name)),
                None => segments.push(entry.name.clone()),
            }
            for block in &entry.blocks {
                segments.push(format!("{} {}", block_type(block), block.value));
            }
        }
        let mut out = segments.join(", ");
        if with_renamed && !self.renamed.is_empty() {
            out.push_str(&format!(" (formerly: {})", self.renamed.join(", ")));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(object_id: i64, abbrev: &str, full: &str, name: &str) -> LevelEntry {
        LevelEntry {
            object_id,
            registry_code: None,
            abbrev: Some(abbrev.to_string()),
            full_type: Some(full.to_string()),
            name: name.to_string(),
            blocks: Vec::new(),
        }
    }

    fn sample() -> Address {
        let mut levels = BTreeMap::new();
        levels.insert(
            CanonicalLevel::Region,
            entry(10, "reg.", "region", "Northland"),
        );
        levels.insert(CanonicalLevel::City, entry(20, "c.", "city", "Riverton"));
        levels.insert(
            CanonicalLevel::Street,
            entry(30, "st.", "street", "Garden"),
        );
        Address {
            levels,
            object_id: 30,
            raw_level: RawLevel::ROAD_NETWORK,
            canonical_level: CanonicalLevel::Street,
            attributes: vec![ResolvedAttribute {
                kind: AttributeKind::PostalCode,
                value: "330001".to_string(),
            }],
            renamed: vec!["Orchard".to_string()],
            synonyms: Vec::new(),
            coordinates: None,
            change_version: 12,
        }
    }

    #[test]
    fn short_renders_in_level_order() {
        let address = sample();
        assert_eq!(
            address.short(false),
            "reg. Northland, c. Riverton, st. Garden"
        );
    }

    #[test]
    fn short_appends_former_names_on_request() {
        let address = sample();
        assert_eq!(
            address.short(true),
            "reg. Northland, c. Riverton, st. Garden (formerly: Orchard)"
        );
    }

    #[test]
    fn full_substitutes_full_labels() {
        let address = sample();
        assert_eq!(
            address.full(false),
            "region Northland, city Riverton, street Garden"
        );
    }

    #[test]
    fn stamp_joins_bare_names() {
        let address = sample();
        assert_eq!(address.stamp("|", false), "Northland|Riverton|Garden");
        assert_eq!(address.stamp("|", true), "Northland|Riverton|Orchard");
    }

    #[test]
    fn house_blocks_render_as_segments() {
        let mut address = sample();
        address.levels.insert(
            CanonicalLevel::House,
            LevelEntry {
                object_id: 40,
                registry_code: None,
                abbrev: Some("h.".to_string()),
                full_type: Some("house".to_string()),
                name: "12".to_string(),
                blocks: vec![BlockPart {
                    abbrev: "blk.".to_string(),
                    full: "block".to_string(),
                    value: "3".to_string(),
                }],
            },
        );
        assert_eq!(
            address.short(false),
            "reg. Northland, c. Riverton, st. Garden, h. 12, blk. 3"
        );
        // The stamp never descends below the street.
        assert_eq!(address.stamp(", ", false), "Northland, Riverton, Garden");
    }

    #[test]
    fn accessors_return_none_for_absent_levels() {
        let address = sample();
        assert!(address.entry(CanonicalLevel::Settlement).is_none());
        assert!(address.name(CanonicalLevel::Flat).is_none());
        assert_eq!(
            address.name_with_abbrev(CanonicalLevel::Street).as_deref(),
            Some("st. Garden")
        );
        assert_eq!(
            address
                .name_with_full_type(CanonicalLevel::City)
                .as_deref(),
            Some("city Riverton")
        );
    }
}
