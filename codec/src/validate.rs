//! Range checks applied under `Validation::Reject`.

use wire::{
    distance_interval, quantize_degree, relative_delta, FOW_BITS, FRC_BITS, LFRCNP_BITS,
};

use crate::error::{Axis, CodecError, CodecResult, OffsetKind, PointField};
use crate::types::{LineLocationReference, LocationReferencePoint};

/// Largest bearing in degrees; 360 folds onto sector 0.
const MAX_BEARING: i64 = 360;

/// Distance range whose interval index lies in 0..=255.
const MIN_DISTANCE: i64 = 1;
const MAX_DISTANCE: i64 = 15_001;

/// Signed 24-bit range of absolute coordinates.
const MIN_QUANTIZED: i64 = -(1 << 23);
const MAX_QUANTIZED: i64 = (1 << 23) - 1;

/// Rejects any value the line encoding would truncate or wrap.
///
/// The caller guarantees at least two points.
pub(crate) fn validate_line(line: &LineLocationReference) -> CodecResult<()> {
    let last = line.points.len() - 1;
    let mut previous: Option<&LocationReferencePoint> = None;

    for (index, point) in line.points.iter().enumerate() {
        check_coordinate(index, Axis::Lon, point.lon)?;
        check_coordinate(index, Axis::Lat, point.lat)?;
        check_bits(index, PointField::Frc, point.frc, FRC_BITS)?;
        check_bits(index, PointField::Fow, point.fow, FOW_BITS)?;
        check_range(index, PointField::Bear, i64::from(point.bear), 0, MAX_BEARING)?;

        // The last point carries offset flags instead of lfrcnp and has no dnp.
        if index != last {
            check_bits(index, PointField::Lfrcnp, point.lfrcnp, LFRCNP_BITS)?;
            check_distance(index, point.dnp)?;
        }

        if let Some(prev) = previous {
            check_delta(index, Axis::Lon, relative_delta(point.lon, prev.lon))?;
            check_delta(index, Axis::Lat, relative_delta(point.lat, prev.lat))?;
        }
        previous = Some(point);
    }

    check_offset(OffsetKind::Positive, line.poffs)?;
    check_offset(OffsetKind::Negative, line.noffs)?;
    Ok(())
}

fn check_coordinate(point: usize, axis: Axis, value: f64) -> CodecResult<()> {
    let quantized = quantize_degree(value);
    if !value.is_finite() || !(MIN_QUANTIZED..=MAX_QUANTIZED).contains(&quantized) {
        return Err(CodecError::CoordinateOutOfRange { point, axis, value });
    }
    Ok(())
}

fn check_bits(point: usize, field: PointField, value: u8, bits: u8) -> CodecResult<()> {
    check_range(point, field, i64::from(value), 0, (1 << bits) - 1)
}

fn check_range(point: usize, field: PointField, value: i64, min: i64, max: i64) -> CodecResult<()> {
    if value < min || value > max {
        return Err(CodecError::FieldOutOfRange {
            point,
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_distance(point: usize, dnp: u32) -> CodecResult<()> {
    if u8::try_from(distance_interval(dnp)).is_err() {
        return Err(CodecError::FieldOutOfRange {
            point,
            field: PointField::Dnp,
            value: i64::from(dnp),
            min: MIN_DISTANCE,
            max: MAX_DISTANCE,
        });
    }
    Ok(())
}

fn check_delta(point: usize, axis: Axis, delta: i64) -> CodecResult<()> {
    if i16::try_from(delta).is_err() {
        return Err(CodecError::RelativeCoordinateOutOfRange { point, axis, delta });
    }
    Ok(())
}

fn check_offset(offset: OffsetKind, value: f64) -> CodecResult<()> {
    if !(0.0..1.0).contains(&value) {
        return Err(CodecError::OffsetOutOfRange { offset, value });
    }
    Ok(())
}
