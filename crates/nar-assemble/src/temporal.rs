//! Shared "pick the currently valid record" selection.
//!
//! Exports occasionally mark two records authoritative while a transition is
//! being published, and filtered inputs can lose the authoritative record
//! entirely. Selection therefore never assumes exactly one actual record:
//! among actual records the latest validity start wins, and with no actual
//! record at all the latest validity start overall wins.
//!
//! Both description records and coded attributes go through this one
//! ordering; the two must never diverge in tie-breaking.

use std::cmp::Ordering;

use chrono::NaiveDate;
use nar_model::record::{VersionedAttribute, VersionedRecord};

/// Anything with a validity window and an authoritative-now flag.
pub trait Temporal {
    fn start_date(&self) -> NaiveDate;
    fn is_actual(&self) -> bool;
}

impl Temporal for VersionedRecord {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    fn is_actual(&self) -> bool {
        self.is_actual
    }
}

impl Temporal for VersionedAttribute {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    fn is_actual(&self) -> bool {
        self.is_actual
    }
}

/// Currency ordering: actual beats non-actual, later validity start beats
/// earlier. Usable directly for sorting record lists oldest-to-current.
pub fn compare<T: Temporal>(a: &T, b: &T) -> Ordering {
    a.is_actual()
        .cmp(&b.is_actual())
        .then_with(|| a.start_date().cmp(&b.start_date()))
}

/// Pick the currently valid record, or `None` for an empty input.
pub fn select<'a, T, I>(records: I) -> Option<&'a T>
where
    T: Temporal + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().max_by(|a, b| compare(*a, *b))
}
