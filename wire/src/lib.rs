//! Physical OpenLR field layout for line location references.
//!
//! This crate holds every primitive of the binary line format: the status
//! byte, fixed-point and relative coordinates, attribute bitfields, distance
//! and offset quantizers, and the byte sizes they occupy. It does not know how
//! points are sequenced into a line; that protocol lives in the codec crate.
//!
//! # Design Principles
//!
//! - **Pure functions** - Every encoder maps values to a fixed-width byte array.
//! - **Mask and wrap** - Encoders never fail; oversized fields are truncated.
//! - **Raw quantizers exposed** - Callers can range-check before masking.
//!
//! # Constants
//!
//! | Constant | Value |
//! |---|---|
//! | [`RESOLUTION`] | 24 bits |
//! | [`DISTANCE_PER_INTERVAL`] | 58.6 m |
//! | [`BEAR_SECTOR`] | 11.25 deg |
//! | [`DECA_MICRO_DEG_FACTOR`] | 100000 |

mod attributes;
mod coords;
mod distance;
mod header;
mod layout;

pub use attributes::{
    bearing_sector, bearing_sector_raw, encode_attributes, ATTRIBUTES_SIZE, BEARING_BITS,
    BEAR_SECTOR, FOW_BITS, FRC_BITS, LFRCNP_BITS, RESERVED_BITS,
};
pub use bitstream::encode_int;
pub use coords::{
    dequantize_degree, encode_absolute_coords, encode_relative_coords, quantize_degree,
    relative_delta, ABSOLUTE_COORDS_SIZE, DECA_MICRO_DEG_FACTOR, DEGREE_STEP,
    RELATIVE_COORDS_SIZE, RESOLUTION,
};
pub use distance::{
    distance_interval, encode_distance, encode_offset, offset_bucket, OffsetFlags,
    DISTANCE_PER_INTERVAL, DISTANCE_SIZE, OFFSET_BUCKETS, OFFSET_SIZE,
};
pub use header::{encode_status, LocationType, Status, STATUS_SIZE, VERSION};
pub use layout::{
    line_encoded_len, FIRST_POINT_SIZE, INTERMEDIATE_POINT_SIZE, LAST_POINT_SIZE, MIN_LINE_SIZE,
};
