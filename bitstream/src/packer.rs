//! LSB-first bitfield packing into single bytes.

/// Returns `value` truncated to its low `bits` bits.
#[must_use]
pub const fn mask(value: u32, bits: u8) -> u32 {
    if bits >= 32 {
        value
    } else {
        value & ((1u32 << bits) - 1)
    }
}

/// Returns `true` if `value` is representable in `bits` bits.
#[must_use]
pub const fn fits(value: u32, bits: u8) -> bool {
    mask(value, bits) == value
}

/// Composes one byte from fields, least significant field first.
///
/// Each pushed value is masked to its width before it is shifted into
/// place. Bits that would land past bit 7 are dropped.
///
/// ```
/// use bitstream::BitPacker;
///
/// // 0b10_011_010: low 3 bits = 2, next 3 bits = 3, top 2 bits = 2
/// let byte = BitPacker::new().push(2, 3).push(3, 3).push(2, 2).finish();
/// assert_eq!(byte, 0b1001_1010);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitPacker {
    value: u32,
    bits_used: u8,
}

impl BitPacker {
    /// Creates an empty packer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: 0,
            bits_used: 0,
        }
    }

    /// Places `value`, masked to `bits`, above the fields pushed so far.
    #[must_use]
    pub const fn push(self, value: u32, bits: u8) -> Self {
        let shifted = if self.bits_used >= 8 {
            0
        } else {
            mask(value, bits) << self.bits_used
        };
        Self {
            value: self.value | shifted,
            bits_used: self.bits_used.saturating_add(bits),
        }
    }

    /// Returns the number of bits claimed by pushed fields.
    #[must_use]
    pub const fn bits_used(self) -> u8 {
        self.bits_used
    }

    /// Returns the packed byte.
    #[must_use]
    pub const fn finish(self) -> u8 {
        (self.value & 0xFF) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_truncates() {
        assert_eq!(mask(0b1111, 3), 0b111);
        assert_eq!(mask(9, 3), 1);
        assert_eq!(mask(0xFFFF_FFFF, 32), 0xFFFF_FFFF);
        assert_eq!(mask(5, 0), 0);
    }

    #[test]
    fn fits_checks_width() {
        assert!(fits(7, 3));
        assert!(!fits(8, 3));
        assert!(fits(31, 5));
        assert!(!fits(32, 5));
        assert!(fits(0, 0));
    }

    #[test]
    fn empty_packer() {
        let packer = BitPacker::new();
        assert_eq!(packer.bits_used(), 0);
        assert_eq!(packer.finish(), 0);
    }

    #[test]
    fn pack_three_fields() {
        let byte = BitPacker::new().push(0b101, 3).push(0b011, 3).push(0b10, 2).finish();
        assert_eq!(byte, 0b10_011_101);
    }

    #[test]
    fn pack_masks_oversized_values() {
        // 9 & 0b111 == 1
        let byte = BitPacker::new().push(9, 3).push(0, 5).finish();
        assert_eq!(byte, 0b0000_0001);
    }

    #[test]
    fn pack_drops_bits_past_byte() {
        let packer = BitPacker::new().push(0xFF, 8).push(1, 1);
        assert_eq!(packer.bits_used(), 9);
        assert_eq!(packer.finish(), 0xFF);
    }

    #[test]
    fn pack_is_idempotent_on_masked_input() {
        let raw = BitPacker::new().push(13, 3).push(12, 5).finish();
        let premasked = BitPacker::new().push(mask(13, 3), 3).push(mask(12, 5), 5).finish();
        assert_eq!(raw, premasked);
    }

    #[test]
    fn packer_const_constructible() {
        const BYTE: u8 = BitPacker::new().push(3, 3).push(1, 4).finish();
        assert_eq!(BYTE, 0b0000_1011);
    }
}
