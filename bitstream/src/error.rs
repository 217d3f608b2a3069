//! Error types for byte sink operations.

use std::fmt;

/// Result type for bitstream operations.
pub type BitResult<T> = Result<T, BitError>;

/// Errors that can occur while writing encoded fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BitError {
    /// Attempted to write more bytes than the buffer can hold.
    ///
    /// Only the bounded [`ByteWriter`](crate::ByteWriter) returns this error.
    /// The growable `ByteVecWriter` never fails.
    BufferOverflow {
        /// Total number of bytes the write would have required.
        attempted: usize,
        /// Capacity of the buffer in bytes.
        capacity: usize,
    },
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferOverflow {
                attempted,
                capacity,
            } => {
                write!(
                    f,
                    "attempted to write {attempted} bytes but buffer capacity is {capacity} bytes"
                )
            }
        }
    }
}

impl std::error::Error for BitError {}
