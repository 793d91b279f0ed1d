//! Apartment and room subtype tables.

use crate::spec::LevelSpec;

const APARTMENT_KINDS: &[(u16, &str, &str)] = &[
    (1, "prem.", "premise"),
    (2, "apt.", "apartment"),
    (3, "off.", "office"),
    (4, "rm.", "room"),
    (5, "wa.", "work area"),
    (6, "wh.", "warehouse"),
    (7, "hall", "trading hall"),
    (8, "wksp.", "workshop"),
    (9, "pav.", "pavilion"),
    (10, "bsmt.", "basement"),
    (11, "blr.", "boiler room"),
    (12, "cel.", "cellar"),
    (13, "gar.", "garage"),
];

const APARTMENT_DEFAULT: (&str, &str) = ("apt.", "apartment");

const ROOM_KINDS: &[(u16, &str, &str)] = &[(1, "rm.", "room"), (2, "prem.", "premise")];

const ROOM_DEFAULT: (&str, &str) = ("rm.", "room");

fn resolve_with(
    table: &[(u16, &str, &str)],
    default: (&str, &str),
    subtype: Option<u16>,
    number: &str,
) -> LevelSpec {
    let (abbrev, full) = subtype
        .filter(|code| *code != 0)
        .and_then(|code| {
            table
                .iter()
                .find(|(candidate, _, _)| *candidate == code)
                .map(|(_, abbrev, full)| (*abbrev, *full))
        })
        .unwrap_or(default);
    LevelSpec::new(abbrev, full, number)
}

/// Resolve an apartment number with its kind code. Absent, zero and unknown
/// codes default to the generic apartment spec.
pub fn resolve_apartment(subtype: Option<u16>, number: &str) -> LevelSpec {
    resolve_with(APARTMENT_KINDS, APARTMENT_DEFAULT, subtype, number)
}

/// Resolve a room number with its kind code. Absent, zero and unknown codes
/// default to the generic room spec.
pub fn resolve_room(subtype: Option<u16>, number: &str) -> LevelSpec {
    resolve_with(ROOM_KINDS, ROOM_DEFAULT, subtype, number)
}
