//! Error types for codec operations.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding a location reference.
///
/// Only [`CodecError::InsufficientPoints`] and the output buffer errors are
/// returned under the default mask-and-wrap policy; the range errors require
/// [`Validation::Reject`](crate::Validation::Reject).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CodecError {
    /// Bitstream error.
    Bitstream(bitstream::BitError),

    /// Output buffer is too small.
    OutputTooSmall { needed: usize, available: usize },

    /// A line needs a first and a last point.
    InsufficientPoints { count: usize },

    /// A point attribute does not fit its wire field.
    FieldOutOfRange {
        /// Index of the offending point.
        point: usize,
        field: PointField,
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// An offset ratio lies outside [0, 1).
    OffsetOutOfRange { offset: OffsetKind, value: f64 },

    /// A coordinate is not finite or does not fit the signed 24-bit grid.
    CoordinateOutOfRange { point: usize, axis: Axis, value: f64 },

    /// A relative coordinate delta does not fit a signed 16-bit field.
    RelativeCoordinateOutOfRange {
        /// Index of the point encoded relative to its predecessor.
        point: usize,
        axis: Axis,
        /// Delta in deca-micro-degrees.
        delta: i64,
    },
}

/// Point attribute named by [`CodecError::FieldOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointField {
    Frc,
    Fow,
    Bear,
    Lfrcnp,
    Dnp,
}

/// Offset named by [`CodecError::OffsetOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetKind {
    Positive,
    Negative,
}

/// Coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Lon,
    Lat,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bitstream(e) => write!(f, "bitstream error: {e}"),
            Self::OutputTooSmall { needed, available } => {
                write!(f, "output too small: need {needed}, have {available}")
            }
            Self::InsufficientPoints { count } => {
                write!(f, "line needs at least 2 points, got {count}")
            }
            Self::FieldOutOfRange {
                point,
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "point {point}: {field} value {value} outside [{min}, {max}]"
                )
            }
            Self::OffsetOutOfRange { offset, value } => {
                write!(f, "{offset} offset {value} outside [0, 1)")
            }
            Self::CoordinateOutOfRange { point, axis, value } => {
                write!(f, "point {point}: {axis} {value} cannot be encoded")
            }
            Self::RelativeCoordinateOutOfRange { point, axis, delta } => {
                write!(
                    f,
                    "point {point}: relative {axis} delta {delta} does not fit 16 bits"
                )
            }
        }
    }
}

impl fmt::Display for PointField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Frc => "frc",
            Self::Fow => "fow",
            Self::Bear => "bearing",
            Self::Lfrcnp => "lfrcnp",
            Self::Dnp => "distance to next point",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for OffsetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lon => write!(f, "longitude"),
            Self::Lat => write!(f, "latitude"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bitstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}
