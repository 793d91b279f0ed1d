pub mod address;
pub mod error;
pub mod level;
pub mod payload;
pub mod record;

pub use address::{Address, BlockPart, LevelEntry, ResolvedAttribute};
pub use error::{AssemblyError, Result};
pub use level::{CanonicalLevel, RawLevel};
pub use payload::{AddressPayload, GeoPoint, PathNode};
pub use record::{AttributeKind, BlockNumber, NodeKind, VersionedAttribute, VersionedRecord};
