//! House and secondary-number subtype tables.
//!
//! Codes are transcribed from the registry's published reference lists.
//! Codes outside the tables take the generic default: a house with no kind
//! code (or a code added after this transcription) still renders, it just
//! renders as a plain building.

use nar_model::record::BlockNumber;

use crate::spec::{BlockSpec, LevelSpec};

/// (code, abbreviation, full label) for primary house kinds.
const HOUSE_KINDS: &[(u16, &str, &str)] = &[
    (1, "est.", "estate"),
    (2, "h.", "house"),
    (3, "hh.", "household"),
    (4, "gar.", "garage"),
    (5, "bld.", "building"),
    (6, "mine", "mine"),
    (7, "str.", "structure"),
    (8, "constr.", "construction"),
    (9, "lit.", "letter"),
    (10, "blk.", "block"),
];

const HOUSE_DEFAULT: (&str, &str) = ("bld.", "building");

/// (code, abbreviation, full label) for secondary numbering kinds.
const BLOCK_KINDS: &[(u16, &str, &str)] = &[
    (1, "blk.", "block"),
    (2, "str.", "structure"),
    (3, "constr.", "construction"),
    (4, "lit.", "letter"),
];

const BLOCK_DEFAULT: (&str, &str) = ("blk.", "block");

fn lookup<'t>(table: &'t [(u16, &'t str, &'t str)], code: u16) -> Option<(&'t str, &'t str)> {
    table
        .iter()
        .find(|(candidate, _, _)| *candidate == code)
        .map(|(_, abbrev, full)| (*abbrev, *full))
}

/// Resolve a house number with its kind code and secondary numbers.
///
/// An absent or zero kind code takes the generic building default rather
/// than failing; the same holds per secondary number.
pub fn resolve(subtype: Option<u16>, number: &str, blocks: &[BlockNumber]) -> LevelSpec {
    let (abbrev, full) = subtype
        .filter(|code| *code != 0)
        .and_then(|code| lookup(HOUSE_KINDS, code))
        .unwrap_or(HOUSE_DEFAULT);
    let mut spec = LevelSpec::new(abbrev, full, number);
    spec.blocks = blocks.iter().map(resolve_block).collect();
    spec
}

/// Resolve one secondary house number.
pub fn resolve_block(block: &BlockNumber) -> BlockSpec {
    let (abbrev, full) = block
        .kind
        .filter(|code| *code != 0)
        .and_then(|code| lookup(BLOCK_KINDS, code))
        .unwrap_or(BLOCK_DEFAULT);
    BlockSpec {
        abbrev: abbrev.to_string(),
        full: full.to_string(),
        value: block.value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_house_kind_resolves() {
        let spec = resolve(Some(4), "17", &[]);
        assert_eq!(spec.abbrev, "gar.");
        assert_eq!(spec.full, "garage");
        assert_eq!(spec.value, "17");
        assert!(spec.blocks.is_empty());
    }

    #[test]
    fn absent_zero_and_unknown_codes_default_to_building() {
        for subtype in [None, Some(0), Some(250)] {
            let spec = resolve(subtype, "5", &[]);
            assert_eq!(spec.abbrev, "bld.");
            assert_eq!(spec.full, "building");
        }
    }

    #[test]
    fn two_independent_secondary_numbers() {
        let blocks = [
            BlockNumber {
                kind: Some(1),
                value: "2".to_string(),
            },
            BlockNumber {
                kind: Some(4),
                value: "B".to_string(),
            },
        ];
        let spec = resolve(Some(2), "12", &blocks);
        assert_eq!(spec.blocks.len(), 2);
        assert_eq!(spec.blocks[0].abbrev, "blk.");
        assert_eq!(spec.blocks[1].abbrev, "lit.");
        assert_eq!(spec.blocks[1].full, "letter");
        assert_eq!(spec.blocks[1].value, "B");
    }

    #[test]
    fn unknown_block_kind_defaults() {
        let block = BlockNumber {
            kind: Some(9),
            value: "7".to_string(),
        };
        assert_eq!(resolve_block(&block).full, "block");
    }
}
