//! Line location reference encoding.
//!
//! A line is written as the status byte, the first point with absolute
//! coordinates, every intermediate point relative to its predecessor, the last
//! point relative to its predecessor, and finally the positive and negative
//! offset bytes that the last point's flags announce.

use bitstream::{ByteSink, ByteVecWriter, ByteWriter};
use tracing::{debug, trace};
use wire::{
    encode_absolute_coords, encode_attributes, encode_distance, encode_offset,
    encode_relative_coords, OffsetFlags, Status,
};

use crate::error::{CodecError, CodecResult};
use crate::options::EncodeOptions;
use crate::types::{LineLocationReference, LocationReferencePoint};
use crate::validate::validate_line;

/// The reserved attribute bits are always zero.
const RESERVED: u8 = 0;

/// Encodes a line location reference into a new byte vector.
///
/// Under the default options every field is masked or wrapped to its width,
/// so only a line with fewer than two points is rejected. With
/// [`EncodeOptions::strict`] any value the wire format cannot hold fails the
/// call instead.
///
/// # Errors
///
/// Returns [`CodecError::InsufficientPoints`] for fewer than two points and a
/// range error when strict validation rejects a value.
pub fn encode_line(line: &LineLocationReference, options: &EncodeOptions) -> CodecResult<Vec<u8>> {
    check_line(line, options)?;
    let mut writer = ByteVecWriter::with_capacity(line.encoded_len());
    write_line(line, &mut writer)?;
    Ok(writer.finish())
}

/// Encodes a line location reference into `out`, returning the bytes written.
///
/// # Errors
///
/// Returns [`CodecError::OutputTooSmall`] if `out` cannot hold
/// [`LineLocationReference::encoded_len`] bytes, plus every error
/// [`encode_line`] returns.
pub fn encode_line_into(
    line: &LineLocationReference,
    options: &EncodeOptions,
    out: &mut [u8],
) -> CodecResult<usize> {
    check_line(line, options)?;
    let needed = line.encoded_len();
    if out.len() < needed {
        return Err(CodecError::OutputTooSmall {
            needed,
            available: out.len(),
        });
    }
    let mut writer = ByteWriter::new(out);
    write_line(line, &mut writer)?;
    Ok(writer.finish())
}

impl LineLocationReference {
    /// Encodes this line with the default mask-and-wrap options.
    ///
    /// # Errors
    ///
    /// See [`encode_line`].
    pub fn encode(&self) -> CodecResult<Vec<u8>> {
        encode_line(self, &EncodeOptions::default())
    }

    /// Encodes this line with the given options.
    ///
    /// # Errors
    ///
    /// See [`encode_line`].
    pub fn encode_with(&self, options: &EncodeOptions) -> CodecResult<Vec<u8>> {
        encode_line(self, options)
    }
}

fn check_line(line: &LineLocationReference, options: &EncodeOptions) -> CodecResult<()> {
    let count = line.points.len();
    if count < 2 {
        return Err(CodecError::InsufficientPoints { count });
    }
    if options.is_strict() {
        validate_line(line)?;
    }
    Ok(())
}

/// Writes an already checked line into `sink`.
fn write_line<S: ByteSink>(line: &LineLocationReference, sink: &mut S) -> CodecResult<()> {
    let flags = line.offset_flags();
    debug!(
        points = line.points.len(),
        poffs = line.poffs,
        noffs = line.noffs,
        len = line.encoded_len(),
        "encoding line location reference"
    );

    let Some((first, rest)) = line.points.split_first() else {
        return Err(CodecError::InsufficientPoints { count: 0 });
    };
    let Some((last, intermediates)) = rest.split_last() else {
        return Err(CodecError::InsufficientPoints { count: 1 });
    };

    sink.put(&[Status::line().raw()])?;

    trace!(index = 0, lon = first.lon, lat = first.lat, "first point");
    sink.put(&encode_absolute_coords(first.lon, first.lat))?;
    write_path_attributes(first, sink)?;

    let mut previous = first;
    for (offset, point) in intermediates.iter().enumerate() {
        trace!(index = offset + 1, lon = point.lon, lat = point.lat, "intermediate point");
        sink.put(&encode_relative_coords(
            point.lon,
            point.lat,
            previous.lon,
            previous.lat,
        ))?;
        write_path_attributes(point, sink)?;
        previous = point;
    }

    trace!(
        index = line.points.len() - 1,
        lon = last.lon,
        lat = last.lat,
        flags = flags.raw(),
        "last point"
    );
    sink.put(&encode_relative_coords(
        last.lon,
        last.lat,
        previous.lon,
        previous.lat,
    ))?;
    sink.put(&encode_attributes(
        last.fow,
        last.frc,
        last.bear,
        flags.raw(),
        RESERVED,
    ))?;

    write_offsets(line, flags, sink)
}

/// Attribute bytes followed by the distance to the next point.
fn write_path_attributes<S: ByteSink>(
    point: &LocationReferencePoint,
    sink: &mut S,
) -> CodecResult<()> {
    sink.put(&encode_attributes(
        point.fow,
        point.frc,
        point.bear,
        point.lfrcnp,
        RESERVED,
    ))?;
    sink.put(&[encode_distance(point.dnp)])?;
    Ok(())
}

fn write_offsets<S: ByteSink>(
    line: &LineLocationReference,
    flags: OffsetFlags,
    sink: &mut S,
) -> CodecResult<()> {
    if flags.has_positive() {
        sink.put(&[encode_offset(line.poffs)])?;
    }
    if flags.has_negative() {
        sink.put(&[encode_offset(line.noffs)])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point_line() -> LineLocationReference {
        LineLocationReference::new(vec![
            LocationReferencePoint::new(6.126_819_8, 49.608_517_8)
                .frc(3)
                .fow(2)
                .bear(141)
                .lfrcnp(3)
                .dnp(557),
            LocationReferencePoint::new(6.128_369_9, 49.603_987_9)
                .frc(3)
                .fow(2)
                .bear(320),
        ])
    }

    #[test]
    fn rejects_empty_line() {
        let line = LineLocationReference::default();
        assert_eq!(
            line.encode(),
            Err(CodecError::InsufficientPoints { count: 0 })
        );
    }

    #[test]
    fn rejects_single_point_under_both_policies() {
        let line = LineLocationReference::new(vec![LocationReferencePoint::default()]);
        let expected = Err(CodecError::InsufficientPoints { count: 1 });
        assert_eq!(line.encode_with(&EncodeOptions::lenient()), expected);
        assert_eq!(line.encode_with(&EncodeOptions::strict()), expected);
    }

    #[test]
    fn output_starts_with_status_byte() {
        let bytes = two_point_line().encode().unwrap();
        assert_eq!(bytes[0], 0x0B);
    }

    #[test]
    fn two_point_line_has_minimum_size() {
        let bytes = two_point_line().encode().unwrap();
        assert_eq!(bytes.len(), wire::MIN_LINE_SIZE);
    }

    #[test]
    fn first_point_distance_byte() {
        let bytes = two_point_line().encode().unwrap();
        // round(557 / 58.6 - 0.5) = 9
        assert_eq!(bytes[9], 9);
    }

    #[test]
    fn last_point_carries_offset_flags() {
        let line = two_point_line().with_poffs(0.25);
        let bytes = line.encode().unwrap();
        let attr2 = bytes[15];
        assert_eq!(attr2 >> 5, OffsetFlags::POSITIVE);
        assert_eq!(bytes.len(), wire::MIN_LINE_SIZE + 1);
        assert_eq!(bytes[16], 64);
    }

    #[test]
    fn positive_offset_precedes_negative() {
        let line = two_point_line().with_poffs(0.25).with_noffs(0.5);
        let bytes = line.encode().unwrap();
        assert_eq!(&bytes[16..], &[64, 128]);
    }

    #[test]
    fn last_point_lfrcnp_is_ignored() {
        let mut line = two_point_line();
        let baseline = line.encode().unwrap();
        line.points[1].lfrcnp = 5;
        line.points[1].dnp = 9_999;
        assert_eq!(line.encode().unwrap(), baseline);
    }

    #[test]
    fn intermediate_point_is_seven_bytes() {
        let mut line = two_point_line();
        let middle = LocationReferencePoint::new(6.127, 49.606).bear(200).dnp(300);
        line.points.insert(1, middle);
        let bytes = line.encode().unwrap();
        assert_eq!(bytes.len(), wire::MIN_LINE_SIZE + wire::INTERMEDIATE_POINT_SIZE);
        assert_eq!(bytes.len(), line.encoded_len());
    }

    #[test]
    fn encode_into_matches_encode() {
        let line = two_point_line().with_noffs(0.3);
        let expected = line.encode().unwrap();
        let mut buf = [0u8; 64];
        let written = encode_line_into(&line, &EncodeOptions::default(), &mut buf).unwrap();
        assert_eq!(&buf[..written], expected.as_slice());
    }

    #[test]
    fn encode_into_exact_buffer() {
        let line = two_point_line();
        let mut buf = vec![0u8; line.encoded_len()];
        let written = encode_line_into(&line, &EncodeOptions::default(), &mut buf).unwrap();
        assert_eq!(written, buf.len());
    }

    #[test]
    fn encode_into_rejects_small_buffer() {
        let line = two_point_line();
        let mut buf = [0u8; 4];
        assert_eq!(
            encode_line_into(&line, &EncodeOptions::default(), &mut buf),
            Err(CodecError::OutputTooSmall {
                needed: 16,
                available: 4,
            })
        );
        assert_eq!(buf, [0u8; 4], "buffer should be untouched");
    }

    #[test]
    fn lenient_masks_oversized_frc() {
        let mut line = two_point_line();
        let baseline = line.encode().unwrap();
        line.points[0].frc = 3 + 8;
        assert_eq!(line.encode().unwrap(), baseline);
    }

    #[test]
    fn strict_rejects_what_lenient_wraps() {
        let mut line = two_point_line();
        line.points[0].dnp = 20_000;
        assert!(line.encode().is_ok());
        assert!(matches!(
            line.encode_with(&EncodeOptions::strict()),
            Err(CodecError::FieldOutOfRange { .. })
        ));
    }

    #[test]
    fn strict_accepts_valid_line() {
        let line = two_point_line().with_poffs(0.1);
        assert_eq!(
            line.encode_with(&EncodeOptions::strict()),
            line.encode()
        );
    }
}
