//! Address assembly: one pass over the payload path.
//!
//! Each path node is classified, its currently valid record resolved, its
//! level-specific display spec looked up and its classification attribute
//! attached. The tail node additionally contributes the top-level mirrors,
//! the coded attributes, the renaming list and the region synonyms.

use std::collections::{BTreeMap, BTreeSet};

use nar_model::address::{Address, BlockPart, LevelEntry, ResolvedAttribute};
use nar_model::error::{AssemblyError, Result};
use nar_model::level::{CanonicalLevel, RawLevel};
use nar_model::payload::{AddressPayload, PathNode};
use nar_model::record::{AttributeKind, NodeKind, VersionedRecord};
use nar_standards::levels;
use nar_standards::synonyms::SynonymDictionary;
use nar_standards::{house, premises, toponym};

use crate::normalize::NameNormalizer;
use crate::{relation, temporal};

/// Builds immutable [`Address`] values from export payloads.
///
/// Holds only shared read-only collaborators, so one assembler can serve
/// concurrent builds.
pub struct AddressAssembler<'a> {
    synonyms: &'a SynonymDictionary,
    normalizer: &'a dyn NameNormalizer,
}

impl<'a> AddressAssembler<'a> {
    pub fn new(synonyms: &'a SynonymDictionary, normalizer: &'a dyn NameNormalizer) -> Self {
        Self {
            synonyms,
            normalizer,
        }
    }

    /// Assemble the address for `payload`'s target object.
    ///
    /// Fails with [`AssemblyError::UnsupportedLevel`] when the tail resolves
    /// to a car place or land plot, or when any path node's raw level code
    /// cannot be classified. Absent ancestor levels and absent attributes
    /// are not errors.
    pub fn build(&self, payload: &AddressPayload) -> Result<Address> {
        let mut entries: BTreeMap<CanonicalLevel, LevelEntry> = BTreeMap::new();
        let mut tail: Option<(CanonicalLevel, RawLevel, &PathNode)> = None;

        for object_id in &payload.path {
            let node = payload
                .nodes
                .get(object_id)
                .ok_or(AssemblyError::MissingPathNode(*object_id))?;
            let (level, raw, entry) = self.resolve_node(node, payload)?;
            entries.insert(level, entry);
            tail = Some((level, raw, node));
        }

        let (tail_level, tail_raw, tail_node) = tail.ok_or(AssemblyError::MissingPathNode(
            payload.object_id,
        ))?;
        if !tail_level.assemblable() {
            return Err(AssemblyError::UnsupportedLevel(tail_raw.code()));
        }

        let current_name = entries
            .get(&tail_level)
            .map(|entry| entry.name.clone())
            .unwrap_or_default();
        let renamed = self.collect_renamed(tail_node, &current_name);
        let synonyms = entries
            .get(&CanonicalLevel::Region)
            .map(|region| self.synonyms.lookup(&region.name).to_vec())
            .unwrap_or_default();

        tracing::debug!(
            object_id = tail_node.object_id,
            level = %tail_level,
            levels = entries.len(),
            "assembled address"
        );

        Ok(Address {
            levels: entries,
            object_id: tail_node.object_id,
            raw_level: tail_raw,
            canonical_level: tail_level,
            attributes: self.resolve_attributes(payload, tail_node.object_id),
            renamed,
            synonyms,
            coordinates: payload.coordinates,
            change_version: payload.change_version(),
        })
    }

    fn resolve_node(
        &self,
        node: &PathNode,
        payload: &AddressPayload,
    ) -> Result<(CanonicalLevel, RawLevel, LevelEntry)> {
        // A node with no records at all is as malformed as a missing node.
        let current = temporal::select(node.records.iter())
            .ok_or(AssemblyError::MissingPathNode(node.object_id))?;

        match node.kind {
            NodeKind::AreaObject => {
                let raw = current
                    .raw_level
                    .ok_or(AssemblyError::UnsupportedLevel(0))?;
                let level = levels::canonical_for_raw(raw)?;
                if !level.assemblable() {
                    return Err(AssemblyError::UnsupportedLevel(raw.code()));
                }
                let record = relation::resolve_for_level(level, &node.records)?;
                let resolved_raw = record.raw_level.unwrap_or(raw);
                Ok((level, resolved_raw, self.area_entry(node, record, payload)))
            }
            NodeKind::House => {
                let spec =
                    house::resolve(current.subtype, &self.name_of(current), &current.blocks);
                Ok((
                    CanonicalLevel::House,
                    RawLevel::BUILDING,
                    self.spec_entry(node, spec, payload),
                ))
            }
            NodeKind::Apartment => {
                let spec = premises::resolve_apartment(current.subtype, &self.name_of(current));
                Ok((
                    CanonicalLevel::Flat,
                    RawLevel::PREMISE,
                    self.spec_entry(node, spec, payload),
                ))
            }
            NodeKind::Room => {
                let spec = premises::resolve_room(current.subtype, &self.name_of(current));
                Ok((
                    CanonicalLevel::Room,
                    RawLevel::SUB_PREMISE,
                    self.spec_entry(node, spec, payload),
                ))
            }
            NodeKind::CarPlace => {
                Err(AssemblyError::UnsupportedLevel(RawLevel::CAR_PLACE.code()))
            }
            NodeKind::Plot => Err(AssemblyError::UnsupportedLevel(RawLevel::LAND_PLOT.code())),
        }
    }

    fn area_entry(
        &self,
        node: &PathNode,
        record: &VersionedRecord,
        payload: &AddressPayload,
    ) -> LevelEntry {
        let toponym_type = record.type_token.as_deref().map(toponym::resolve);
        LevelEntry {
            object_id: node.object_id,
            registry_code: self.current_attribute(
                payload,
                node.object_id,
                AttributeKind::RegistryCode,
            ),
            abbrev: toponym_type.as_ref().map(|t| t.abbrev.clone()),
            full_type: toponym_type.map(|t| t.full),
            name: self.name_of(record),
            blocks: Vec::new(),
        }
    }

    fn spec_entry(
        &self,
        node: &PathNode,
        spec: nar_standards::LevelSpec,
        payload: &AddressPayload,
    ) -> LevelEntry {
        LevelEntry {
            object_id: node.object_id,
            registry_code: self.current_attribute(
                payload,
                node.object_id,
                AttributeKind::RegistryCode,
            ),
            abbrev: Some(spec.abbrev),
            full_type: Some(spec.full),
            name: spec.value,
            blocks: spec
                .blocks
                .into_iter()
                .map(|block| BlockPart {
                    abbrev: block.abbrev,
                    full: block.full,
                    value: block.value,
                })
                .collect(),
        }
    }

    fn name_of(&self, record: &VersionedRecord) -> String {
        self.normalizer
            .normalize(Some(&record.name))
            .unwrap_or_default()
    }

    /// The currently valid value of one attribute kind for one object.
    fn current_attribute(
        &self,
        payload: &AddressPayload,
        object_id: i64,
        kind: AttributeKind,
    ) -> Option<String> {
        let history = payload.attributes.get(&object_id)?;
        let matching = history.iter().filter(|attribute| attribute.kind == kind);
        temporal::select(matching).map(|attribute| attribute.value.clone())
    }

    /// All currently valid coded attributes of one object, one per kind
    /// present in its history, in first-seen kind order.
    fn resolve_attributes(
        &self,
        payload: &AddressPayload,
        object_id: i64,
    ) -> Vec<ResolvedAttribute> {
        let Some(history) = payload.attributes.get(&object_id) else {
            return Vec::new();
        };
        let mut kinds: Vec<AttributeKind> = Vec::new();
        for attribute in history {
            if !kinds.contains(&attribute.kind) {
                kinds.push(attribute.kind);
            }
        }
        kinds
            .into_iter()
            .filter_map(|kind| {
                self.current_attribute(payload, object_id, kind)
                    .map(|value| ResolvedAttribute { kind, value })
            })
            .collect()
    }

    /// Distinct normalized historical names other than the current one, in
    /// chronological order.
    fn collect_renamed(&self, node: &PathNode, current_name: &str) -> Vec<String> {
        let mut renamed: Vec<String> = Vec::new();
        for record in chain_order(&node.records) {
            let Some(name) = self.normalizer.normalize(Some(&record.name)) else {
                continue;
            };
            if name != current_name && !renamed.contains(&name) {
                renamed.push(name);
            }
        }
        renamed
    }
}

/// Order records along their prev/next chain when the links form a single
/// walkable chain covering every record, otherwise by validity start.
/// Exports do ship broken chains; they must not abort the build.
fn chain_order(records: &[VersionedRecord]) -> Vec<&VersionedRecord> {
    let by_id: BTreeMap<i64, &VersionedRecord> =
        records.iter().map(|record| (record.record_id, record)).collect();
    let mut heads = records.iter().filter(|record| {
        record
            .prev_id
            .is_none_or(|id| !by_id.contains_key(&id))
    });
    let head = heads.next();
    if let Some(mut cursor) = head.filter(|_| heads.next().is_none()) {
        let mut ordered = vec![cursor];
        let mut seen = BTreeSet::from([cursor.record_id]);
        while let Some(next_id) = cursor.next_id {
            let Some(&next) = by_id.get(&next_id) else {
                break;
            };
            if !seen.insert(next.record_id) {
                break;
            }
            ordered.push(next);
            cursor = next;
        }
        if ordered.len() == records.len() {
            return ordered;
        }
        tracing::warn!(records = records.len(), "broken record chain, using date order");
    }
    let mut ordered: Vec<&VersionedRecord> = records.iter().collect();
    ordered.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then_with(|| a.record_id.cmp(&b.record_id))
    });
    ordered
}
