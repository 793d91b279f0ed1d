pub mod house;
pub mod levels;
pub mod premises;
pub mod spec;
pub mod synonyms;
pub mod toponym;

pub use spec::{BlockSpec, LevelSpec};
pub use synonyms::SynonymDictionary;
pub use toponym::ToponymType;
