//! Error types shared by every search strategy.

use thiserror::Error;

/// Errors raised by the codec, the cost model, the bounded queue and the
/// search runners.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A gene of an encoded choice lies outside its position-legal range.
    ///
    /// Gene `position` of a choice over `people` persons must satisfy
    /// `value < people - position`.
    #[error("gene {position} has value {value}, expected a value below {bound}")]
    InvalidEncoding {
        position: usize,
        value: usize,
        bound: usize,
    },

    /// A seat vector is not a permutation of `0..people`.
    #[error("invalid assignment: {0}")]
    InvalidAssignment(String),

    /// Search parameters were rejected before any work started.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A bounded queue was drained while holding no elements.
    #[error("bounded queue is empty")]
    EmptyQueue,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
