//! End-to-end assembly scenarios.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use nar_assemble::{AddressAssembler, SpacingNormalizer};
use nar_model::{
    AddressPayload, AssemblyError, AttributeKind, BlockNumber, CanonicalLevel, GeoPoint,
    NodeKind, PathNode, RawLevel, VersionedAttribute, VersionedRecord,
};
use nar_standards::SynonymDictionary;

fn date(y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, 1, 1).expect("valid date")
}

fn area_record(
    id: i64,
    raw: RawLevel,
    name: &str,
    token: &str,
    year: i32,
    actual: bool,
) -> VersionedRecord {
    VersionedRecord {
        record_id: id,
        raw_level: Some(raw),
        name: name.to_string(),
        type_token: Some(token.to_string()),
        subtype: None,
        blocks: Vec::new(),
        start_date: date(year),
        end_date: date(2079),
        is_active: true,
        is_actual: actual,
        prev_id: None,
        next_id: None,
    }
}

fn unit_record(id: i64, name: &str, subtype: Option<u16>, blocks: Vec<BlockNumber>) -> VersionedRecord {
    VersionedRecord {
        record_id: id,
        raw_level: None,
        name: name.to_string(),
        type_token: None,
        subtype,
        blocks,
        start_date: date(2010),
        end_date: date(2079),
        is_active: true,
        is_actual: true,
        prev_id: None,
        next_id: None,
    }
}

fn node(object_id: i64, kind: NodeKind, records: Vec<VersionedRecord>) -> PathNode {
    PathNode {
        object_id,
        kind,
        records,
    }
}

fn attribute(kind: AttributeKind, value: &str, year: i32, actual: bool) -> VersionedAttribute {
    VersionedAttribute {
        kind,
        value: value.to_string(),
        start_date: date(year),
        end_date: date(2079),
        is_actual: actual,
    }
}

fn payload(nodes: Vec<PathNode>) -> AddressPayload {
    let path: Vec<i64> = nodes.iter().map(|n| n.object_id).collect();
    let object_id = *path.last().expect("non-empty path");
    AddressPayload {
        object_id,
        path,
        nodes: nodes.into_iter().map(|n| (n.object_id, n)).collect(),
        attributes: BTreeMap::new(),
        records_version: 1,
        attributes_version: 2,
        overall_version: 3,
        coordinates: Some(GeoPoint {
            lat: 58.52,
            lon: 31.27,
        }),
    }
}

fn build(payload: &AddressPayload, dict: &SynonymDictionary) -> nar_model::Result<nar_model::Address> {
    AddressAssembler::new(dict, &SpacingNormalizer).build(payload)
}

#[test]
fn region_only_path_with_synonym() {
    let region = node(
        10,
        NodeKind::AreaObject,
        vec![
            area_record(101, RawLevel::REGION, "N.L. reg.", "reg", 1995, false),
            area_record(102, RawLevel::REGION, "Northland", "reg", 2005, true),
        ],
    );
    let dict = SynonymDictionary::from_pairs([("Northland", vec!["The North".to_string()])]);
    let address = build(&payload(vec![region]), &dict).expect("build");

    assert_eq!(address.canonical_level, CanonicalLevel::Region);
    assert_eq!(address.name(CanonicalLevel::Region), Some("Northland"));
    assert_eq!(address.abbrev(CanonicalLevel::Region), Some("reg."));
    for level in CanonicalLevel::ALL {
        if level != CanonicalLevel::Region {
            assert!(address.entry(level).is_none(), "{level} must be absent");
        }
    }
    assert_eq!(address.synonyms, ["The North"]);
    assert_eq!(address.renamed, ["N.L. reg."]);
}

#[test]
fn settlement_renaming_renders_on_request_only() {
    let region = node(
        10,
        NodeKind::AreaObject,
        vec![area_record(101, RawLevel::REGION, "Northland", "reg", 1995, true)],
    );
    let city = node(
        20,
        NodeKind::AreaObject,
        vec![area_record(201, RawLevel::CITY, "Riverton", "c", 1998, true)],
    );
    let settlement = node(
        30,
        NodeKind::AreaObject,
        vec![
            area_record(301, RawLevel::LOCALITY, "  Old   Ferry ", "vlg", 2001, false),
            area_record(302, RawLevel::LOCALITY, "Ferry Landing", "vlg", 2012, true),
        ],
    );
    let dict = SynonymDictionary::new();
    let address = build(&payload(vec![region, city, settlement]), &dict).expect("build");

    assert_eq!(address.renamed, ["Old Ferry"]);
    assert_eq!(
        address.short(true),
        "reg. Northland, c. Riverton, vlg. Ferry Landing (formerly: Old Ferry)"
    );
    assert_eq!(
        address.short(false),
        "reg. Northland, c. Riverton, vlg. Ferry Landing"
    );
    assert_eq!(
        address.full(false),
        "region Northland, city Riverton, village Ferry Landing"
    );
}

#[test]
fn house_with_specific_kind_and_block() {
    let region = node(
        10,
        NodeKind::AreaObject,
        vec![area_record(101, RawLevel::REGION, "Northland", "reg", 1995, true)],
    );
    let street = node(
        20,
        NodeKind::AreaObject,
        vec![area_record(201, RawLevel::ROAD_NETWORK, "Garden", "st", 2003, true)],
    );
    let house = node(
        30,
        NodeKind::House,
        vec![unit_record(
            301,
            "12",
            Some(4),
            vec![BlockNumber {
                kind: Some(2),
                value: "1".to_string(),
            }],
        )],
    );
    let dict = SynonymDictionary::new();
    let address = build(&payload(vec![region, street, house]), &dict).expect("build");

    assert_eq!(address.canonical_level, CanonicalLevel::House);
    assert_eq!(address.raw_level, RawLevel::BUILDING);
    assert_eq!(address.abbrev(CanonicalLevel::House), Some("gar."));
    assert_eq!(
        address.short(false),
        "reg. Northland, st. Garden, gar. 12, str. 1"
    );
    assert_eq!(
        address.full(false),
        "region Northland, street Garden, garage 12, structure 1"
    );
}

#[test]
fn reclassified_street_resolves_to_priority_code() {
    // The newest record sits under the obsolete raw code; the authoritative
    // road-network record must still win.
    let region = node(
        10,
        NodeKind::AreaObject,
        vec![area_record(101, RawLevel::REGION, "Northland", "reg", 1995, true)],
    );
    let street = node(
        20,
        NodeKind::AreaObject,
        vec![
            area_record(
                201,
                RawLevel::ADDITIONAL_TERRITORY_OBJECT,
                "Garden (old filing)",
                "st",
                2018,
                true,
            ),
            area_record(202, RawLevel::ROAD_NETWORK, "Garden", "st", 2009, true),
        ],
    );
    let house = node(30, NodeKind::House, vec![unit_record(301, "7", None, vec![])]);
    let dict = SynonymDictionary::new();
    let address = build(&payload(vec![region, street, house]), &dict).expect("build");

    assert_eq!(address.name(CanonicalLevel::Street), Some("Garden"));
    assert!(address.entry(CanonicalLevel::Territory).is_none());
}

#[test]
fn car_place_and_plot_tails_are_unsupported() {
    for (kind, code) in [(NodeKind::CarPlace, 17u8), (NodeKind::Plot, 9u8)] {
        let region = node(
            10,
            NodeKind::AreaObject,
            vec![area_record(101, RawLevel::REGION, "Northland", "reg", 1995, true)],
        );
        let tail = node(20, kind, vec![unit_record(201, "4", None, vec![])]);
        let dict = SynonymDictionary::new();
        let err = build(&payload(vec![region, tail]), &dict).unwrap_err();
        assert_eq!(err, AssemblyError::UnsupportedLevel(code));
    }
}

#[test]
fn unclassifiable_ancestor_aborts_the_build() {
    let region = node(
        10,
        NodeKind::AreaObject,
        vec![area_record(101, RawLevel(42), "Nowhere", "reg", 1995, true)],
    );
    let dict = SynonymDictionary::new();
    let err = build(&payload(vec![region]), &dict).unwrap_err();
    assert_eq!(err, AssemblyError::UnsupportedLevel(42));
}

#[test]
fn missing_path_node_is_reported() {
    let region = node(
        10,
        NodeKind::AreaObject,
        vec![area_record(101, RawLevel::REGION, "Northland", "reg", 1995, true)],
    );
    let mut bad = payload(vec![region]);
    bad.path.push(99);
    let dict = SynonymDictionary::new();
    let err = build(&bad, &dict).unwrap_err();
    assert_eq!(err, AssemblyError::MissingPathNode(99));
}

#[test]
fn attributes_belong_to_the_tail_only() {
    let region = node(
        10,
        NodeKind::AreaObject,
        vec![area_record(101, RawLevel::REGION, "Northland", "reg", 1995, true)],
    );
    let street = node(
        20,
        NodeKind::AreaObject,
        vec![area_record(201, RawLevel::ROAD_NETWORK, "Garden", "st", 2003, true)],
    );
    let house = node(30, NodeKind::House, vec![unit_record(301, "12", Some(2), vec![])]);
    let mut built = payload(vec![region, street, house]);
    built.attributes.insert(
        10,
        vec![attribute(AttributeKind::RegistryCode, "NL000", 1995, true)],
    );
    built.attributes.insert(
        20,
        vec![
            attribute(AttributeKind::PostalCode, "330000", 2003, false),
            attribute(AttributeKind::RegistryCode, "NL017-ST", 2003, true),
        ],
    );
    built.attributes.insert(
        30,
        vec![
            attribute(AttributeKind::PostalCode, "330001", 2005, false),
            attribute(AttributeKind::PostalCode, "330099", 2015, true),
        ],
    );
    let dict = SynonymDictionary::new();
    let address = build(&built, &dict).expect("build");

    // Per-level classification identifiers come from each node.
    assert_eq!(address.registry_code(CanonicalLevel::Region), Some("NL000"));
    assert_eq!(
        address.registry_code(CanonicalLevel::Street),
        Some("NL017-ST")
    );
    // Houses legitimately carry none.
    assert_eq!(address.registry_code(CanonicalLevel::House), None);
    // Top-level attributes mirror the tail node only, resolved to the
    // currently valid version.
    assert_eq!(address.postal_code(), Some("330099"));
    assert_eq!(address.attributes.len(), 1);
}

#[test]
fn tail_level_entry_agrees_with_top_level_fields() {
    let region = node(
        10,
        NodeKind::AreaObject,
        vec![area_record(101, RawLevel::REGION, "Northland", "reg", 1995, true)],
    );
    let street = node(
        20,
        NodeKind::AreaObject,
        vec![area_record(201, RawLevel::ROAD_NETWORK, "Garden", "st", 2003, true)],
    );
    let dict = SynonymDictionary::new();
    let address = build(&payload(vec![region, street]), &dict).expect("build");

    let tail = address.entry(address.canonical_level).expect("tail entry");
    assert_eq!(tail.object_id, address.object_id);
    assert_eq!(address.raw_level, RawLevel::ROAD_NETWORK);
    assert_eq!(address.change_version, 3);
    assert_eq!(
        address.coordinates,
        Some(GeoPoint {
            lat: 58.52,
            lon: 31.27
        })
    );
}

#[test]
fn renamed_list_has_no_duplicates_and_no_current_name() {
    let street = node(
        20,
        NodeKind::AreaObject,
        vec![
            area_record(201, RawLevel::ROAD_NETWORK, "Orchard", "st", 1990, false),
            area_record(202, RawLevel::ROAD_NETWORK, "Garden", "st", 1999, false),
            area_record(203, RawLevel::ROAD_NETWORK, "Orchard", "st", 2005, false),
            area_record(204, RawLevel::ROAD_NETWORK, "Garden", "st", 2012, true),
        ],
    );
    let dict = SynonymDictionary::new();
    let address = build(&payload(vec![street]), &dict).expect("build");

    assert_eq!(address.renamed, ["Orchard"]);
}

#[test]
fn flat_and_room_resolve_their_kind_tables() {
    let region = node(
        10,
        NodeKind::AreaObject,
        vec![area_record(101, RawLevel::REGION, "Northland", "reg", 1995, true)],
    );
    let house = node(20, NodeKind::House, vec![unit_record(201, "12", Some(2), vec![])]);
    let flat = node(30, NodeKind::Apartment, vec![unit_record(301, "45", Some(3), vec![])]);
    let room = node(40, NodeKind::Room, vec![unit_record(401, "2", Some(2), vec![])]);
    let dict = SynonymDictionary::new();
    let address = build(&payload(vec![region, house, flat, room]), &dict).expect("build");

    assert_eq!(address.canonical_level, CanonicalLevel::Room);
    assert_eq!(address.abbrev(CanonicalLevel::Flat), Some("off."));
    assert_eq!(address.full_type(CanonicalLevel::Room), Some("premise"));
    assert_eq!(
        address.short(false),
        "reg. Northland, h. 12, off. 45, prem. 2"
    );
}
