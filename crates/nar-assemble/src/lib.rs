pub mod assembler;
pub mod normalize;
pub mod relation;
pub mod temporal;

pub use assembler::AddressAssembler;
pub use normalize::{NameNormalizer, SpacingNormalizer};
