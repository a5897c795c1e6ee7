//! Error types returned by every fallible [`SequenceStore`](crate::SequenceStore) operation.

use thiserror::Error;

/// Result type for sequence store operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures reported by the store.
///
/// Every operation validates its arguments before touching the buffer,
/// so an `Err` always means the store is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A required store was absent.
    #[error("the store handle is null")]
    NullReference,

    /// A zero size, a range that does not fit, or a destination that is too small.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument
        reason: &'static str,
    },

    /// A single index exceeded the bound of the operation.
    #[error("index {index} out of range (bound {bound})")]
    OutOfRange {
        /// The rejected index
        index: usize,
        /// The exclusive bound it was checked against
        bound: usize,
    },

    /// Growing or resizing the allocated buffer failed.
    #[error("failed to allocate {requested} slots")]
    OutOfMemory {
        /// Number of slots that were requested
        requested: usize,
    },

    /// `pop` on a store without live elements.
    #[error("the store is empty")]
    Empty,
}

impl Error {
    #[inline]
    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }

    #[inline]
    pub(crate) const fn out_of_range(index: usize, bound: usize) -> Self {
        Self::OutOfRange { index, bound }
    }
}
