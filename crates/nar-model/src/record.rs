//! Versioned registry records and coded attributes.
//!
//! Every object in the export carries its full description history: each
//! [`VersionedRecord`] is one time-bounded description, chained to its
//! predecessor and successor. Coded attributes (postal codes, classification
//! identifiers) are versioned the same way but independently of the
//! descriptions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::level::RawLevel;

/// What kind of registry object a path node is.
///
/// Kind alone fixes the canonical level for everything except `AreaObject`,
/// whose level must be classified from its records' raw level codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Region, district, city, settlement, territory or street.
    AreaObject,
    House,
    CarPlace,
    Plot,
    Apartment,
    Room,
}

/// A secondary house number (block, structure, letter) with its kind code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNumber {
    pub kind: Option<u16>,
    pub value: String,
}

/// One historical description of a registry object.
///
/// For area objects `name` is the toponym and `type_token` the free-form
/// type abbreviation from the export; for houses, apartments and rooms
/// `name` holds the number and `subtype` the numeric kind code. Houses may
/// additionally carry up to two [`BlockNumber`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedRecord {
    pub record_id: i64,
    /// Raw hierarchy level code. Present on area objects only.
    pub raw_level: Option<RawLevel>,
    pub name: String,
    pub type_token: Option<String>,
    pub subtype: Option<u16>,
    /// Secondary house numbering. At most two entries.
    #[serde(default)]
    pub blocks: Vec<BlockNumber>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// The object itself still exists.
    pub is_active: bool,
    /// This record is the authoritative current description.
    pub is_actual: bool,
    pub prev_id: Option<i64>,
    pub next_id: Option<i64>,
}

/// Semantic codes of the attributes the assembler extracts.
///
/// The numeric values are the registry's parameter type codes; everything
/// else arrives as `Other` and is carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    PostalCode,
    /// Territorial classification identifier.
    TerritorialCode,
    /// Municipal classification identifier.
    MunicipalCode,
    /// Per-level registry classification identifier.
    RegistryCode,
    Other(u16),
}

impl AttributeKind {
    pub fn code(&self) -> u16 {
        match self {
            AttributeKind::PostalCode => 5,
            AttributeKind::TerritorialCode => 6,
            AttributeKind::MunicipalCode => 7,
            AttributeKind::RegistryCode => 10,
            AttributeKind::Other(code) => *code,
        }
    }

    pub fn from_code(code: u16) -> Self {
        match code {
            5 => AttributeKind::PostalCode,
            6 => AttributeKind::TerritorialCode,
            7 => AttributeKind::MunicipalCode,
            10 => AttributeKind::RegistryCode,
            other => AttributeKind::Other(other),
        }
    }
}

/// One historical value of a coded attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedAttribute {
    pub kind: AttributeKind,
    pub value: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_actual: bool,
}
