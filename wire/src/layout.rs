//! Byte sizes of the line location layout.

use crate::attributes::ATTRIBUTES_SIZE;
use crate::coords::{ABSOLUTE_COORDS_SIZE, RELATIVE_COORDS_SIZE};
use crate::distance::{OffsetFlags, DISTANCE_SIZE};
use crate::header::STATUS_SIZE;

/// First point: absolute coordinates, attributes, distance to next point (9 bytes).
pub const FIRST_POINT_SIZE: usize = ABSOLUTE_COORDS_SIZE + ATTRIBUTES_SIZE + DISTANCE_SIZE;

/// Intermediate point: relative coordinates, attributes, distance to next point (7 bytes).
pub const INTERMEDIATE_POINT_SIZE: usize =
    RELATIVE_COORDS_SIZE + ATTRIBUTES_SIZE + DISTANCE_SIZE;

/// Last point: relative coordinates and attributes, no distance (6 bytes).
pub const LAST_POINT_SIZE: usize = RELATIVE_COORDS_SIZE + ATTRIBUTES_SIZE;

/// Smallest line encoding: status, first point, last point (16 bytes).
pub const MIN_LINE_SIZE: usize = STATUS_SIZE + FIRST_POINT_SIZE + LAST_POINT_SIZE;

/// Encoded size of a line with `point_count` points and the given offset flags.
///
/// Point counts below two are sized as two points, the smallest encodable line.
#[must_use]
pub const fn line_encoded_len(point_count: usize, flags: OffsetFlags) -> usize {
    let intermediate = point_count.saturating_sub(2);
    MIN_LINE_SIZE + intermediate * INTERMEDIATE_POINT_SIZE + flags.offset_bytes()
}
