//! Road attribute bytes: form of way, road class, bearing sector.

use bitstream::{mask, BitPacker};

/// Attribute field size in bytes.
pub const ATTRIBUTES_SIZE: usize = 2;

/// Width of the form-of-way field in bits.
pub const FOW_BITS: u8 = 3;
/// Width of the functional road class field in bits.
pub const FRC_BITS: u8 = 3;
/// Width of the reserved field in bits.
pub const RESERVED_BITS: u8 = 2;
/// Width of the bearing sector field in bits.
pub const BEARING_BITS: u8 = 5;
/// Width of the lowest-FRC-to-next-point field in bits.
pub const LFRCNP_BITS: u8 = 3;

/// Degrees covered by one bearing sector (360 / 32).
pub const BEAR_SECTOR: f64 = 11.25;

/// Unmasked bearing sector index, `round((bear - 5.625) / 11.25)`.
///
/// Returns -1 for bearings just below the first sector midpoint and 32 for
/// 360 degrees; [`bearing_sector`] folds both back onto the 5-bit circle.
#[must_use]
pub fn bearing_sector_raw(bear: u16) -> i64 {
    ((f64::from(bear) - BEAR_SECTOR / 2.0) / BEAR_SECTOR).round() as i64
}

/// Bearing sector index masked to 5 bits.
#[must_use]
pub fn bearing_sector(bear: u16) -> u8 {
    mask(bearing_sector_raw(bear) as u32, BEARING_BITS) as u8
}

/// Encodes the two attribute bytes of a location reference point.
///
/// Byte 1 is `fow | frc << 3 | reserved << 6`, byte 2 is
/// `bearing_sector | lfrcnp << 5`. Every field is masked to its width. The last
/// point of a line passes its offset flags in the `lfrcnp` slot.
#[must_use]
pub fn encode_attributes(
    fow: u8,
    frc: u8,
    bear: u16,
    lfrcnp: u8,
    reserved: u8,
) -> [u8; ATTRIBUTES_SIZE] {
    let first = BitPacker::new()
        .push(u32::from(fow), FOW_BITS)
        .push(u32::from(frc), FRC_BITS)
        .push(u32::from(reserved), RESERVED_BITS)
        .finish();
    let second = BitPacker::new()
        .push(u32::from(bearing_sector(bear)), BEARING_BITS)
        .push(u32::from(lfrcnp), LFRCNP_BITS)
        .finish();
    [first, second]
}
