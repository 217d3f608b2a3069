//! Coordinate quantization: absolute 24-bit degrees and relative deltas.

use bitstream::encode_int;

/// Bits of fixed-point resolution for absolute coordinates.
pub const RESOLUTION: u32 = 24;

/// Scale from degrees to deca-micro-degrees for relative coordinates.
pub const DECA_MICRO_DEG_FACTOR: f64 = 100_000.0;

/// Absolute coordinate pair size in bytes (3 + 3).
pub const ABSOLUTE_COORDS_SIZE: usize = 6;

/// Relative coordinate pair size in bytes (2 + 2).
pub const RELATIVE_COORDS_SIZE: usize = 4;

const STEPS_PER_TURN: f64 = (1u32 << RESOLUTION) as f64;

/// Degrees covered by one quantization step (`360 / 2^24`).
pub const DEGREE_STEP: f64 = 360.0 / STEPS_PER_TURN;

/// Maps degrees onto the 24-bit fixed-point grid.
///
/// Computes `round(sign(deg) * 0.5 + deg * 2^24 / 360)`. The half-step bias
/// away from zero, together with round-half-away-from-zero, keeps positive and
/// negative coordinates symmetric.
#[must_use]
pub fn quantize_degree(deg: f64) -> i64 {
    (0.5_f64.copysign(deg) + deg * STEPS_PER_TURN / 360.0).round() as i64
}

/// Returns the degree value at the center of a quantization cell.
///
/// Inverse of [`quantize_degree`] to within one [`DEGREE_STEP`].
#[must_use]
pub fn dequantize_degree(quantized: i64) -> f64 {
    (quantized as f64 - 0.5 * quantized.signum() as f64) * 360.0 / STEPS_PER_TURN
}

/// Difference `value - reference` in rounded deca-micro-degrees.
#[must_use]
pub fn relative_delta(value: f64, reference: f64) -> i64 {
    (DECA_MICRO_DEG_FACTOR * (value - reference)).round() as i64
}

/// Encodes an absolute position as two signed 3-byte fields, lon first.
#[must_use]
pub fn encode_absolute_coords(lon: f64, lat: f64) -> [u8; ABSOLUTE_COORDS_SIZE] {
    let mut out = [0u8; ABSOLUTE_COORDS_SIZE];
    out[..3].copy_from_slice(&encode_int::<3>(quantize_degree(lon)));
    out[3..].copy_from_slice(&encode_int::<3>(quantize_degree(lat)));
    out
}

/// Encodes a position relative to a reference as two signed 2-byte fields.
///
/// Deltas outside the 16-bit range wrap.
#[must_use]
pub fn encode_relative_coords(
    lon: f64,
    lat: f64,
    ref_lon: f64,
    ref_lat: f64,
) -> [u8; RELATIVE_COORDS_SIZE] {
    let mut out = [0u8; RELATIVE_COORDS_SIZE];
    out[..2].copy_from_slice(&encode_int::<2>(relative_delta(lon, ref_lon)));
    out[2..].copy_from_slice(&encode_int::<2>(relative_delta(lat, ref_lat)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_step_value() {
        assert!((DEGREE_STEP - 2.145_767_211_914_062_5e-5).abs() < 1e-15);
    }

    #[test]
    fn quantize_known_values() {
        assert_eq!(quantize_degree(6.126_819_8), 0x04_5B5B);
        assert_eq!(quantize_degree(49.608_517_8), 0x23_46F5);
        // 2^23 + 0.5 rounds away from zero
        assert_eq!(quantize_degree(180.0), (1 << 23) + 1);
    }

    #[test]
    fn quantize_zero_is_biased_up() {
        assert_eq!(quantize_degree(0.0), 1);
        assert_eq!(quantize_degree(-0.0), -1);
    }

    #[test]
    fn quantize_symmetric_around_zero() {
        for deg in [0.001, 1.5, 47.365_161_1, 179.999] {
            assert_eq!(quantize_degree(-deg), -quantize_degree(deg));
        }
    }

    #[test]
    fn dequantize_within_one_step() {
        for deg in [-179.9, -90.0, -0.3, 0.0, 0.675_219_2, 48.063_286_5, 179.9] {
            let back = dequantize_degree(quantize_degree(deg));
            assert!(
                (back - deg).abs() <= DEGREE_STEP,
                "{deg} came back as {back}"
            );
        }
    }

    #[test]
    fn relative_delta_rounds() {
        assert_eq!(relative_delta(6.128_369_8, 6.126_819_8), 155);
        assert_eq!(relative_delta(49.603_987_8, 49.608_517_8), -453);
        assert_eq!(relative_delta(1.0, 1.0), 0);
    }

    #[test]
    fn absolute_coords_layout() {
        let bytes = encode_absolute_coords(6.126_819_8, 49.608_517_8);
        assert_eq!(bytes, [0x04, 0x5B, 0x5B, 0x23, 0x46, 0xF5]);
    }

    #[test]
    fn absolute_coords_negative() {
        let bytes = encode_absolute_coords(-0.0, -0.0);
        assert_eq!(bytes, [0xFF; 6]);
    }

    #[test]
    fn relative_coords_layout() {
        let bytes = encode_relative_coords(6.128_369_8, 49.603_987_8, 6.126_819_8, 49.608_517_8);
        // +155 = 0x009B, -453 = 0xFE3B
        assert_eq!(bytes, [0x00, 0x9B, 0xFE, 0x3B]);
    }

    #[test]
    fn relative_coords_wrap() {
        // 0.4 degrees = 40_000 deca-micro-degrees, past i16::MAX
        let bytes = encode_relative_coords(0.4, 0.0, 0.0, 0.0);
        assert_eq!(bytes, [0x9C, 0x40, 0x00, 0x00]);
    }
}
