//! Raw-level-code classification tables.
//!
//! The mapping from raw codes to canonical levels is many-to-one and has
//! never been stable: the obsolete codes 13..=16 were retired in favor of
//! 2, 6, 7 and 8, yet historical records filed under them are still present
//! in every full export. Classification is therefore a static table, never
//! arithmetic on the code, and each canonical level keeps an ordered list of
//! every raw code that has represented it, most canonical first.

use nar_model::error::{AssemblyError, Result};
use nar_model::level::{CanonicalLevel, RawLevel};
use nar_model::record::NodeKind;

/// Classify a raw level code into its canonical level.
///
/// Unknown codes fail: an unclassifiable code on any path node aborts the
/// whole build.
pub fn canonical_for_raw(raw: RawLevel) -> Result<CanonicalLevel> {
    let level = match raw {
        RawLevel::REGION => CanonicalLevel::Region,
        RawLevel::ADMIN_AREA | RawLevel::MUNICIPAL_AREA | RawLevel::AUTONOMY => {
            CanonicalLevel::Area
        }
        RawLevel::CITY => CanonicalLevel::City,
        RawLevel::LOCALITY
        | RawLevel::MUNICIPAL_SETTLEMENT
        | RawLevel::INTRACITY_TERRITORY => CanonicalLevel::Settlement,
        RawLevel::PLANNING_STRUCTURE | RawLevel::ADDITIONAL_TERRITORY => {
            CanonicalLevel::Territory
        }
        RawLevel::ROAD_NETWORK | RawLevel::ADDITIONAL_TERRITORY_OBJECT => {
            CanonicalLevel::Street
        }
        RawLevel::BUILDING => CanonicalLevel::House,
        RawLevel::PREMISE => CanonicalLevel::Flat,
        RawLevel::SUB_PREMISE => CanonicalLevel::Room,
        RawLevel::CAR_PLACE => CanonicalLevel::CarPlace,
        RawLevel::LAND_PLOT => CanonicalLevel::Plot,
        other => return Err(AssemblyError::UnsupportedLevel(other.code())),
    };
    Ok(level)
}

/// The canonical level a node kind fixes on its own.
///
/// Returns `None` for area objects, whose level must be classified from
/// their records' raw codes.
pub fn level_for_kind(kind: NodeKind) -> Option<CanonicalLevel> {
    match kind {
        NodeKind::AreaObject => None,
        NodeKind::House => Some(CanonicalLevel::House),
        NodeKind::Apartment => Some(CanonicalLevel::Flat),
        NodeKind::Room => Some(CanonicalLevel::Room),
        NodeKind::CarPlace => Some(CanonicalLevel::CarPlace),
        NodeKind::Plot => Some(CanonicalLevel::Plot),
    }
}

/// The raw level code a node kind implies.
pub fn raw_for_kind(kind: NodeKind) -> Option<RawLevel> {
    match kind {
        NodeKind::AreaObject => None,
        NodeKind::House => Some(RawLevel::BUILDING),
        NodeKind::Apartment => Some(RawLevel::PREMISE),
        NodeKind::Room => Some(RawLevel::SUB_PREMISE),
        NodeKind::CarPlace => Some(RawLevel::CAR_PLACE),
        NodeKind::Plot => Some(RawLevel::LAND_PLOT),
    }
}

/// Every raw code that has historically represented a canonical level,
/// most canonical first.
pub fn acceptable_raw_codes(level: CanonicalLevel) -> &'static [RawLevel] {
    match level {
        CanonicalLevel::Region => &[RawLevel::REGION],
        CanonicalLevel::Area => &[
            RawLevel::ADMIN_AREA,
            RawLevel::MUNICIPAL_AREA,
            RawLevel::AUTONOMY,
        ],
        CanonicalLevel::City => &[RawLevel::CITY],
        CanonicalLevel::Settlement => &[
            RawLevel::LOCALITY,
            RawLevel::MUNICIPAL_SETTLEMENT,
            RawLevel::INTRACITY_TERRITORY,
        ],
        CanonicalLevel::Territory => {
            &[RawLevel::PLANNING_STRUCTURE, RawLevel::ADDITIONAL_TERRITORY]
        }
        CanonicalLevel::Street => {
            &[RawLevel::ROAD_NETWORK, RawLevel::ADDITIONAL_TERRITORY_OBJECT]
        }
        CanonicalLevel::House => &[RawLevel::BUILDING],
        CanonicalLevel::Flat => &[RawLevel::PREMISE],
        CanonicalLevel::Room => &[RawLevel::SUB_PREMISE],
        CanonicalLevel::CarPlace => &[RawLevel::CAR_PLACE],
        CanonicalLevel::Plot => &[RawLevel::LAND_PLOT],
    }
}
