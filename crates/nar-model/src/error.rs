use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssemblyError {
    /// The registry level code has no assembly support (car places and land
    /// plots), or an area object's raw code is unknown to the classifier.
    #[error("unsupported hierarchy level: {0}")]
    UnsupportedLevel(u8),
    /// The payload path references an object id with no node attached.
    /// Decoders are expected to reject such payloads upstream.
    #[error("path references object {0} with no node in the payload")]
    MissingPathNode(i64),
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
