//! Distance-to-next-point and offset quantization.

use bitstream::encode_int;

/// Meters covered by one distance interval.
pub const DISTANCE_PER_INTERVAL: f64 = 58.6;

/// Distance field size in bytes.
pub const DISTANCE_SIZE: usize = 1;

/// Offset field size in bytes.
pub const OFFSET_SIZE: usize = 1;

/// Number of offset buckets covering the [0, 1) ratio range.
pub const OFFSET_BUCKETS: f64 = 256.0;

/// Unmasked distance interval, `round(meters / 58.6 - 0.5)`.
///
/// Zero meters yields -1, which [`encode_distance`] wraps to `0xFF`.
#[must_use]
pub fn distance_interval(meters: u32) -> i64 {
    (f64::from(meters) / DISTANCE_PER_INTERVAL - 0.5).round() as i64
}

/// Encodes a distance to next point as one byte. Intervals above 255 wrap.
#[must_use]
pub fn encode_distance(meters: u32) -> u8 {
    encode_int::<DISTANCE_SIZE>(distance_interval(meters))[0]
}

/// Unmasked offset bucket.
///
/// Exactly zero maps to bucket 0; any other ratio maps to
/// `round(ratio * 256 - 0.5)`.
#[must_use]
pub fn offset_bucket(ratio: f64) -> i64 {
    if ratio == 0.0 {
        return 0;
    }
    (ratio * OFFSET_BUCKETS - 0.5).round() as i64
}

/// Encodes an offset ratio as one byte. Ratios of 1 or more wrap.
#[must_use]
pub fn encode_offset(ratio: f64) -> u8 {
    encode_int::<OFFSET_SIZE>(offset_bucket(ratio))[0]
}

/// Offset presence flags carried in the last point's attribute bytes.
///
/// The flags replace the last point's lowest-FRC-to-next-point field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OffsetFlags(u8);

impl OffsetFlags {
    /// A positive offset byte follows the last point.
    pub const POSITIVE: u8 = 0b10;

    /// A negative offset byte follows the positive offset (if any).
    pub const NEGATIVE: u8 = 0b01;

    /// Builds flags from offset presence.
    #[must_use]
    pub const fn new(positive: bool, negative: bool) -> Self {
        let mut raw = 0;
        if positive {
            raw |= Self::POSITIVE;
        }
        if negative {
            raw |= Self::NEGATIVE;
        }
        Self(raw)
    }

    /// Flags for a pair of offset ratios: each flag is set when its ratio is
    /// strictly positive.
    #[must_use]
    pub fn from_offsets(poffs: f64, noffs: f64) -> Self {
        Self::new(poffs > 0.0, noffs > 0.0)
    }

    /// Creates flags from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw flag bits.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns `true` if a positive offset is present.
    #[must_use]
    pub const fn has_positive(self) -> bool {
        self.0 & Self::POSITIVE != 0
    }

    /// Returns `true` if a negative offset is present.
    #[must_use]
    pub const fn has_negative(self) -> bool {
        self.0 & Self::NEGATIVE != 0
    }

    /// Number of offset bytes trailing the last point.
    #[must_use]
    pub const fn offset_bytes(self) -> usize {
        self.has_positive() as usize + self.has_negative() as usize
    }
}
