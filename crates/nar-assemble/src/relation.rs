//! Reclassification-aware record resolution for area objects.
//!
//! The registry reclassifies raw level codes across an object's history: a
//! street filed under the obsolete additional-territory-object code in old
//! records carries the road-network code in new ones. Resolution narrows a
//! node's history to the raw codes acceptable for the desired canonical
//! level and works through them in priority order, so the most canonical
//! code with an authoritative record wins rather than whichever code the
//! newest record happens to carry.

use nar_model::error::{AssemblyError, Result};
use nar_model::level::CanonicalLevel;
use nar_model::record::VersionedRecord;
use nar_standards::levels::acceptable_raw_codes;

use crate::temporal;

/// Resolve the currently valid record describing `records`' object at the
/// desired canonical level.
///
/// Fails with `UnsupportedLevel` when no record carries an acceptable raw
/// code for the level.
pub fn resolve_for_level(
    level: CanonicalLevel,
    records: &[VersionedRecord],
) -> Result<&VersionedRecord> {
    let acceptable = acceptable_raw_codes(level);
    let admissible: Vec<&VersionedRecord> = records
        .iter()
        .filter(|record| {
            record
                .raw_level
                .is_some_and(|raw| acceptable.contains(&raw))
        })
        .collect();
    if admissible.is_empty() {
        return Err(AssemblyError::UnsupportedLevel(newest_raw_code(records)));
    }

    for raw in acceptable {
        let candidates: Vec<&VersionedRecord> = admissible
            .iter()
            .copied()
            .filter(|record| record.raw_level == Some(*raw))
            .collect();
        if candidates.iter().any(|record| record.is_actual) {
            if let Some(record) = temporal::select(candidates.into_iter()) {
                return Ok(record);
            }
        }
    }

    // No raw code has an authoritative record; select over everything
    // admissible.
    tracing::debug!(level = %level, "no actual record under any acceptable raw code");
    temporal::select(admissible.into_iter())
        .ok_or_else(|| AssemblyError::UnsupportedLevel(newest_raw_code(records)))
}

fn newest_raw_code(records: &[VersionedRecord]) -> u8 {
    temporal::select(records.iter())
        .and_then(|record| record.raw_level)
        .map_or(0, |raw| raw.code())
}
