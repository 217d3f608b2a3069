//! Binary encoding of OpenLR line location references.
//!
//! This is the main codec crate. It ties the field primitives of the wire
//! crate into the line protocol: which point gets absolute coordinates, which
//! points carry a distance, where the offset flags go and which offset bytes
//! follow.
//!
//! # Example
//!
//! ```
//! use codec::{LineLocationReference, LocationReferencePoint};
//!
//! let line = LineLocationReference::new(vec![
//!     LocationReferencePoint::new(6.126_819_8, 49.608_517_8)
//!         .frc(3)
//!         .fow(2)
//!         .bear(141)
//!         .lfrcnp(3)
//!         .dnp(557),
//!     LocationReferencePoint::new(6.128_369_9, 49.603_987_9)
//!         .frc(3)
//!         .fow(2)
//!         .bear(320),
//! ]);
//!
//! let bytes = line.encode().unwrap();
//! assert_eq!(bytes.len(), line.encoded_len());
//! assert_eq!(bytes[0], 0x0B);
//! ```
//!
//! # Design Principles
//!
//! - **Wrap by default** - Oversized attributes are masked and every other
//!   field wraps modulo its size.
//! - **Strict mode on request** - [`EncodeOptions::strict`] rejects anything
//!   the format would silently alter.
//! - **Caller-provided buffers** - [`encode_line_into`] never allocates.

mod error;
mod line;
mod options;
mod types;
mod validate;

pub use error::{Axis, CodecError, CodecResult, OffsetKind, PointField};
pub use line::{encode_line, encode_line_into};
pub use options::{EncodeOptions, Validation};
pub use types::{LineLocationReference, LocationReferencePoint};
pub use wire::OffsetFlags;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = EncodeOptions::default();
        let _ = Validation::Reject;
        let _ = OffsetFlags::default();
        let _ = LocationReferencePoint::default();
        let _ = LineLocationReference::default();

        // Error types
        let _: CodecResult<()> = Ok(());
        let _ = PointField::Frc;
        let _ = OffsetKind::Positive;
        let _ = Axis::Lon;
    }

    #[test]
    fn encode_and_encode_line_agree() {
        let line = LineLocationReference::new(vec![
            LocationReferencePoint::new(1.0, 2.0).dnp(100),
            LocationReferencePoint::new(1.001, 2.001),
        ]);
        assert_eq!(
            line.encode().unwrap(),
            encode_line(&line, &EncodeOptions::default()).unwrap()
        );
    }
}
