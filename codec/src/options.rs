//! Encoding options.

/// How out-of-range field values are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Validation {
    /// Truncate attribute values to their bit width and let coordinate
    /// deltas, distances and offsets wrap modulo their field size.
    #[default]
    MaskAndWrap,
    /// Fail the encode call instead of truncating or wrapping any field.
    Reject,
}

/// Options applied to a single encode call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeOptions {
    /// Policy for values that do not fit their wire field.
    pub validation: Validation,
}

impl EncodeOptions {
    /// Options that mask attributes and wrap every other field modulo its
    /// size. Matches the reference encoder for every field value that lies
    /// within one wrap of its range.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            validation: Validation::MaskAndWrap,
        }
    }

    /// Options that reject any value the wire format cannot hold.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            validation: Validation::Reject,
        }
    }

    /// Returns `true` if out-of-range values fail the encode call.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.validation, Validation::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_lenient() {
        let options = EncodeOptions::default();
        assert_eq!(options, EncodeOptions::lenient());
        assert!(!options.is_strict());
    }

    #[test]
    fn strict_options() {
        let options = EncodeOptions::strict();
        assert_eq!(options.validation, Validation::Reject);
        assert!(options.is_strict());
    }

    #[test]
    fn options_const_constructible() {
        const OPTIONS: EncodeOptions = EncodeOptions::strict();
        assert!(OPTIONS.is_strict());
    }
}
