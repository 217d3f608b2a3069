//! Byte-level layout of an encoded line.

use std::fmt;

use codec::{CodecResult, EncodeOptions, LineLocationReference};
use serde::Serialize;
use wire::{
    ABSOLUTE_COORDS_SIZE, ATTRIBUTES_SIZE, DISTANCE_SIZE, OFFSET_SIZE, RELATIVE_COORDS_SIZE,
    STATUS_SIZE,
};

/// What a span of encoded bytes holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "point", rename_all = "snake_case")]
pub enum Section {
    Status,
    AbsoluteCoords(usize),
    RelativeCoords(usize),
    Attributes(usize),
    Distance(usize),
    PositiveOffset,
    NegativeOffset,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::AbsoluteCoords(point) => write!(f, "lrp {point} absolute coords"),
            Self::RelativeCoords(point) => write!(f, "lrp {point} relative coords"),
            Self::Attributes(point) => write!(f, "lrp {point} attributes"),
            Self::Distance(point) => write!(f, "lrp {point} distance"),
            Self::PositiveOffset => write!(f, "positive offset"),
            Self::NegativeOffset => write!(f, "negative offset"),
        }
    }
}

/// One section of the encoding with its byte range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEntry {
    pub section: Section,
    pub start: usize,
    pub end: usize,
    pub bytes: Vec<u8>,
}

/// Encodes `line` and splits the output into its sections.
pub fn explain_line(
    line: &LineLocationReference,
    options: &EncodeOptions,
) -> CodecResult<Vec<LayoutEntry>> {
    let bytes = line.encode_with(options)?;
    Ok(split_sections(line, &bytes))
}

/// Splits `bytes`, the encoding of `line`, into sections.
///
/// Sections past the end of `bytes` are reported with no bytes.
#[must_use]
pub fn split_sections(line: &LineLocationReference, bytes: &[u8]) -> Vec<LayoutEntry> {
    let mut layout = Layout {
        bytes,
        pos: 0,
        entries: Vec::new(),
    };
    let count = line.points.len();
    let flags = line.offset_flags();

    layout.push(Section::Status, STATUS_SIZE);
    for point in 0..count {
        let coords = if point == 0 {
            (Section::AbsoluteCoords(point), ABSOLUTE_COORDS_SIZE)
        } else {
            (Section::RelativeCoords(point), RELATIVE_COORDS_SIZE)
        };
        layout.push(coords.0, coords.1);
        layout.push(Section::Attributes(point), ATTRIBUTES_SIZE);
        if point + 1 < count {
            layout.push(Section::Distance(point), DISTANCE_SIZE);
        }
    }
    if flags.has_positive() {
        layout.push(Section::PositiveOffset, OFFSET_SIZE);
    }
    if flags.has_negative() {
        layout.push(Section::NegativeOffset, OFFSET_SIZE);
    }
    layout.entries
}

struct Layout<'a> {
    bytes: &'a [u8],
    pos: usize,
    entries: Vec<LayoutEntry>,
}

impl Layout<'_> {
    fn push(&mut self, section: Section, size: usize) {
        let start = self.pos;
        let end = start + size;
        let bytes = self
            .bytes
            .get(start..end)
            .map(<[u8]>::to_vec)
            .unwrap_or_default();
        self.entries.push(LayoutEntry {
            section,
            start,
            end,
            bytes,
        });
        self.pos = end;
    }
}
