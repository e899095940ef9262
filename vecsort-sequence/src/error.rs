use thiserror::Error;

/// Errors raised by index-taking sequence operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// The index is outside the logical range of the sequence.
    ///
    /// The valid range is determined by the number of elements, never by
    /// the allocated capacity.
    #[error("index {index} is out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
