//! Canonical and raw address-hierarchy levels.
//!
//! The registry describes an object's position in the hierarchy with a raw
//! numeric level code that has been reclassified over the years (several raw
//! codes have represented the same rank, and some codes are obsolete). The
//! canonical level is the stable rank used throughout the assembled result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The normalized, stable address-hierarchy rank.
///
/// Ordering follows the hierarchy from the root down: `Region < Area < City
/// < Settlement < Territory < Street < House < Flat < Room`. `CarPlace` and
/// `Plot` are recognized registry levels but are not supported as assembly
/// targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CanonicalLevel {
    /// Federal subject at the root of every path.
    Region,
    /// Administrative or municipal district.
    Area,
    City,
    /// Locality below city rank (village, hamlet, urban settlement).
    Settlement,
    /// Planning-structure element (allotments, industrial zones).
    Territory,
    /// Road-network element.
    Street,
    House,
    Flat,
    Room,
    /// Car place. Recognized but not an assembly target.
    CarPlace,
    /// Land plot. Recognized but not an assembly target.
    Plot,
}

impl CanonicalLevel {
    /// All levels in hierarchy order.
    pub const ALL: [CanonicalLevel; 11] = [
        CanonicalLevel::Region,
        CanonicalLevel::Area,
        CanonicalLevel::City,
        CanonicalLevel::Settlement,
        CanonicalLevel::Territory,
        CanonicalLevel::Street,
        CanonicalLevel::House,
        CanonicalLevel::Flat,
        CanonicalLevel::Room,
        CanonicalLevel::CarPlace,
        CanonicalLevel::Plot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalLevel::Region => "region",
            CanonicalLevel::Area => "area",
            CanonicalLevel::City => "city",
            CanonicalLevel::Settlement => "settlement",
            CanonicalLevel::Territory => "territory",
            CanonicalLevel::Street => "street",
            CanonicalLevel::House => "house",
            CanonicalLevel::Flat => "flat",
            CanonicalLevel::Room => "room",
            CanonicalLevel::CarPlace => "car place",
            CanonicalLevel::Plot => "plot",
        }
    }

    /// Returns true if an address can be assembled down to this level.
    pub fn assemblable(&self) -> bool {
        !matches!(self, CanonicalLevel::CarPlace | CanonicalLevel::Plot)
    }

    /// Returns true if this level contributes to the stamp rendering
    /// (the name-only dedupe key covers the root through the street).
    pub fn in_stamp_span(&self) -> bool {
        *self <= CanonicalLevel::Street
    }
}

impl fmt::Display for CanonicalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CanonicalLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" => Ok(CanonicalLevel::Region),
            "area" => Ok(CanonicalLevel::Area),
            "city" => Ok(CanonicalLevel::City),
            "settlement" => Ok(CanonicalLevel::Settlement),
            "territory" => Ok(CanonicalLevel::Territory),
            "street" => Ok(CanonicalLevel::Street),
            "house" => Ok(CanonicalLevel::House),
            "flat" => Ok(CanonicalLevel::Flat),
            "room" => Ok(CanonicalLevel::Room),
            "car place" | "car_place" => Ok(CanonicalLevel::CarPlace),
            "plot" => Ok(CanonicalLevel::Plot),
            _ => Err(format!("Unknown canonical level: {s}")),
        }
    }
}

/// The registry's own numeric level code for an object.
///
/// Raw codes are not stable across history: obsolete codes 13..=16 were
/// retired in favor of 2, 6, 7 and 8, and exports still carry records filed
/// under them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RawLevel(pub u8);

impl RawLevel {
    pub const REGION: RawLevel = RawLevel(1);
    pub const ADMIN_AREA: RawLevel = RawLevel(2);
    pub const MUNICIPAL_AREA: RawLevel = RawLevel(3);
    pub const MUNICIPAL_SETTLEMENT: RawLevel = RawLevel(4);
    pub const CITY: RawLevel = RawLevel(5);
    pub const LOCALITY: RawLevel = RawLevel(6);
    pub const PLANNING_STRUCTURE: RawLevel = RawLevel(7);
    pub const ROAD_NETWORK: RawLevel = RawLevel(8);
    pub const LAND_PLOT: RawLevel = RawLevel(9);
    pub const BUILDING: RawLevel = RawLevel(10);
    pub const PREMISE: RawLevel = RawLevel(11);
    pub const SUB_PREMISE: RawLevel = RawLevel(12);
    pub const AUTONOMY: RawLevel = RawLevel(13);
    pub const INTRACITY_TERRITORY: RawLevel = RawLevel(14);
    pub const ADDITIONAL_TERRITORY: RawLevel = RawLevel(15);
    pub const ADDITIONAL_TERRITORY_OBJECT: RawLevel = RawLevel(16);
    pub const CAR_PLACE: RawLevel = RawLevel(17);

    pub fn code(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RawLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for RawLevel {
    fn from(code: u8) -> Self {
        RawLevel(code)
    }
}
