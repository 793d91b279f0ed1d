//! Name-spacing normalization boundary.
//!
//! The real normalizer lives outside this workspace; the assembler only
//! relies on the contract captured here: nullable-safe, idempotent, pure.

/// A pure text transform applied to every name the assembler extracts.
pub trait NameNormalizer {
    /// Normalize a possibly absent name. Must be idempotent.
    fn normalize(&self, name: Option<&str>) -> Option<String>;
}

/// Default implementation: trims and collapses interior whitespace runs to
/// a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacingNormalizer;

impl NameNormalizer for SpacingNormalizer {
    fn normalize(&self, name: Option<&str>) -> Option<String> {
        name.map(|value| value.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}
