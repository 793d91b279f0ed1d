//! The decoded export payload the assembler consumes.
//!
//! Wire decoding lives outside this workspace; decoders target these shapes
//! directly. The payload carries everything a single build needs: the path,
//! every node's full description history, every node's attribute history and
//! the export's version counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::{NodeKind, VersionedAttribute, VersionedRecord};

/// Geographic coordinates of the target object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A path entry: one registry object with its full description history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    pub object_id: i64,
    pub kind: NodeKind,
    pub records: Vec<VersionedRecord>,
}

/// One export snapshot for a single target object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressPayload {
    /// The target object the address is built for.
    pub object_id: i64,
    /// Ancestor object ids, root first, target last (inclusive).
    pub path: Vec<i64>,
    /// Every object on the path with its description history.
    pub nodes: BTreeMap<i64, PathNode>,
    /// Coded-attribute history per object on the path.
    #[serde(default)]
    pub attributes: BTreeMap<i64, Vec<VersionedAttribute>>,
    /// Version counter of the description-record extract.
    pub records_version: i64,
    /// Version counter of the attribute extract.
    pub attributes_version: i64,
    /// Version counter of the export as a whole.
    pub overall_version: i64,
    pub coordinates: Option<GeoPoint>,
}

impl AddressPayload {
    /// The change version the built address reports: the largest of the
    /// three extract counters.
    pub fn change_version(&self) -> i64 {
        self.records_version
            .max(self.attributes_version)
            .max(self.overall_version)
    }
}
