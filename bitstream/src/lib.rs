//! Big-endian field serialization and bit packing primitives for OpenLR encoding.
//!
//! This crate provides the lowest layer of the encoder:
//!
//! - [`encode_int`] serializes integers into fixed-width big-endian fields with
//!   two's-complement wraparound.
//! - [`BitPacker`] composes a single byte from LSB-first bitfields.
//! - [`ByteVecWriter`] and [`ByteWriter`] collect encoded bytes, growable or
//!   bounded by a caller-provided buffer.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Wraparound is defined behavior** - Out-of-range values wrap, they never panic.
//! - **No domain knowledge** - This crate knows nothing about coordinates or roads.
//! - **Explicit errors** - Bounded writes return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitPacker, ByteVecWriter};
//!
//! let mut writer = ByteVecWriter::new();
//! writer.write_int::<2>(-2);
//! writer.write_u8(BitPacker::new().push(3, 3).push(1, 4).finish());
//!
//! assert_eq!(writer.finish(), vec![0xFF, 0xFE, 0x0B]);
//! ```

mod error;
mod packer;
mod writer;

pub use error::{BitError, BitResult};
pub use packer::{fits, mask, BitPacker};
pub use writer::{encode_int, ByteSink, ByteVecWriter, ByteWriter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writers_agree() {
        let vec_bytes = ByteVecWriter::new().finish();
        let mut buf = [0u8; 0];
        let used = ByteWriter::new(&mut buf).finish();
        assert!(vec_bytes.is_empty());
        assert_eq!(used, 0);
    }

    #[test]
    fn writers_produce_identical_bytes() {
        fn fill<S: ByteSink>(sink: &mut S) -> BitResult<()> {
            sink.put(&[BitPacker::new().push(3, 3).push(1, 4).finish()])?;
            sink.put_int::<3>(-1)?;
            sink.put_int::<2>(0x1234)?;
            Ok(())
        }

        let mut vec_writer = ByteVecWriter::new();
        fill(&mut vec_writer).unwrap();
        let expected = vec_writer.finish();

        let mut buf = [0u8; 6];
        let mut writer = ByteWriter::new(&mut buf);
        fill(&mut writer).unwrap();
        let used = writer.finish();

        assert_eq!(&buf[..used], expected.as_slice());
        assert_eq!(expected, vec![0x0B, 0xFF, 0xFF, 0xFF, 0x12, 0x34]);
    }

    #[test]
    fn doctest_example() {
        let mut writer = ByteVecWriter::new();
        writer.write_int::<2>(-2);
        writer.write_u8(BitPacker::new().push(3, 3).push(1, 4).finish());
        assert_eq!(writer.finish(), vec![0xFF, 0xFE, 0x0B]);
    }
}
