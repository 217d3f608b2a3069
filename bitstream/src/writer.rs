//! Byte sinks for encoding fixed-width big-endian fields.

use crate::error::{BitError, BitResult};

/// Serializes `value` into `N` big-endian bytes.
///
/// Negative values are represented as `value + 256^N` (two's complement), and
/// values outside the range of `N` bytes wrap modulo `256^N`. Signed and
/// unsigned fields share this representation, so no signedness flag is needed.
///
/// ```
/// use bitstream::encode_int;
///
/// assert_eq!(encode_int::<2>(0x0102), [0x01, 0x02]);
/// assert_eq!(encode_int::<3>(-1), [0xFF, 0xFF, 0xFF]);
/// assert_eq!(encode_int::<1>(256), [0x00]);
/// ```
#[must_use]
pub fn encode_int<const N: usize>(value: i64) -> [u8; N] {
    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        let shift = 8 * (N - 1 - i);
        *byte = if shift < 64 {
            (value >> shift) as u8
        } else if value < 0 {
            0xFF
        } else {
            0
        };
    }
    out
}

/// Destination for encoded bytes.
///
/// Implemented by the growable [`ByteVecWriter`] and the bounded
/// [`ByteWriter`], so encoders can target either without allocating twice.
pub trait ByteSink {
    /// Appends raw bytes.
    fn put(&mut self, bytes: &[u8]) -> BitResult<()>;

    /// Returns the number of bytes written so far.
    fn bytes_written(&self) -> usize;

    /// Appends `value` as `N` big-endian bytes (see [`encode_int`]).
    fn put_int<const N: usize>(&mut self, value: i64) -> BitResult<()> {
        self.put(&encode_int::<N>(value))
    }
}

/// A growable byte writer.
///
/// Writes never fail. Call [`finish`](Self::finish) to take the buffer.
#[derive(Debug, Default)]
pub struct ByteVecWriter {
    bytes: Vec<u8>,
}

impl ByteVecWriter {
    /// Creates a new empty `ByteVecWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteVecWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Appends raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Appends a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Appends `value` as `N` big-endian bytes.
    pub fn write_int<const N: usize>(&mut self, value: i64) {
        self.write_bytes(&encode_int::<N>(value));
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}

impl ByteSink for ByteVecWriter {
    fn put(&mut self, bytes: &[u8]) -> BitResult<()> {
        self.write_bytes(bytes);
        Ok(())
    }

    fn bytes_written(&self) -> usize {
        self.bytes.len()
    }
}

/// A byte writer over a caller-provided buffer.
///
/// Every write is bounds-checked; a write that does not fit leaves the
/// buffer untouched and returns [`BitError::BufferOverflow`].
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    /// Creates a writer that fills `buf` from the start.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the capacity of the underlying buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of bytes still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Appends raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> BitResult<()> {
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            return Err(BitError::BufferOverflow {
                attempted: end,
                capacity: self.buf.len(),
            });
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Appends a single byte.
    pub fn write_u8(&mut self, value: u8) -> BitResult<()> {
        self.write_bytes(&[value])
    }

    /// Appends `value` as `N` big-endian bytes.
    pub fn write_int<const N: usize>(&mut self, value: i64) -> BitResult<()> {
        self.write_bytes(&encode_int::<N>(value))
    }

    /// Finishes writing and returns the number of bytes used.
    #[must_use]
    pub fn finish(self) -> usize {
        self.pos
    }
}

impl ByteSink for ByteWriter<'_> {
    fn put(&mut self, bytes: &[u8]) -> BitResult<()> {
        self.write_bytes(bytes)
    }

    fn bytes_written(&self) -> usize {
        self.pos
    }
}
