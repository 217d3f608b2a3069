//! Status byte types and constants.

use bitstream::{mask, BitPacker};

/// OpenLR physical format version written by this encoder.
pub const VERSION: u8 = 3;

/// Status size in bytes.
pub const STATUS_SIZE: usize = 1;

/// Location reference type carried in the status byte.
///
/// Only line locations are encoded; other OpenLR location types have no
/// encoder here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LocationType {
    /// An ordered path through the road network.
    Line = 1,
}

impl LocationType {
    /// Returns the raw 4-bit type code.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// The leading status byte of a location reference.
///
/// Bits 0-2 hold the format version, bits 3-6 the location type. Bit 7 is
/// unused and always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Status(u8);

impl Status {
    /// Width of the version field in bits.
    pub const VERSION_BITS: u8 = 3;

    /// Width of the location type field in bits.
    pub const LOCATION_TYPE_BITS: u8 = 4;

    /// Packs a status byte, masking each field to its width.
    #[must_use]
    pub const fn new(version: u8, location_type: u8) -> Self {
        Self(
            BitPacker::new()
                .push(version as u32, Self::VERSION_BITS)
                .push(location_type as u32, Self::LOCATION_TYPE_BITS)
                .finish(),
        )
    }

    /// Status for a current-version line location.
    #[must_use]
    pub const fn line() -> Self {
        Self::new(VERSION, LocationType::Line.raw())
    }

    /// Creates a status from a raw byte.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw status byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns the version field.
    #[must_use]
    pub const fn version(self) -> u8 {
        mask(self.0 as u32, Self::VERSION_BITS) as u8
    }

    /// Returns the location type field.
    #[must_use]
    pub const fn location_type(self) -> u8 {
        mask((self.0 >> Self::VERSION_BITS) as u32, Self::LOCATION_TYPE_BITS) as u8
    }
}

/// Encodes the status byte: `version | location_type << 3`, both masked.
#[must_use]
pub const fn encode_status(version: u8, location_type: u8) -> u8 {
    Status::new(version, location_type).raw()
}
