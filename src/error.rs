//! Error types for index and bitmap producers.

use thiserror::Error;

/// Error variants for producer construction and bit addressing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A source index was negative.
    #[error("invalid index: {0} is negative")]
    InvalidIndex(i64),

    /// A bit position addressed a word past the end of the supplied storage.
    #[error("index out of range: bit {0}")]
    IndexOutOfRange(usize),

    /// Backing storage did not have the shape the producer requires.
    #[error("malformed source: {0}")]
    MalformedSource(String),
}

/// A specialized Result type for producer operations.
pub type Result<T> = std::result::Result<T, Error>;
