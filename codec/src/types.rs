//! Location reference value types.

use wire::OffsetFlags;

/// A location reference point: one waypoint of the referenced path.
///
/// Holds the WGS84 coordinate plus the line attributes of the outgoing road
/// and the path attributes towards the next point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationReferencePoint {
    /// WGS84 longitude in degrees.
    pub lon: f64,
    /// WGS84 latitude in degrees.
    pub lat: f64,
    /// Functional road class, 0 (most important) to 7.
    pub frc: u8,
    /// Form of way, 0 to 7.
    pub fow: u8,
    /// Bearing in degrees, 0 to 360.
    pub bear: u16,
    /// Lowest functional road class to the next point.
    pub lfrcnp: u8,
    /// Distance to the next point in meters.
    pub dnp: u32,
}

impl LocationReferencePoint {
    /// Creates a point at the given coordinate with all attributes zero.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            frc: 0,
            fow: 0,
            bear: 0,
            lfrcnp: 0,
            dnp: 0,
        }
    }

    /// Sets the functional road class.
    #[must_use]
    pub const fn frc(mut self, frc: u8) -> Self {
        self.frc = frc;
        self
    }

    /// Sets the form of way.
    #[must_use]
    pub const fn fow(mut self, fow: u8) -> Self {
        self.fow = fow;
        self
    }

    /// Sets the bearing in degrees.
    #[must_use]
    pub const fn bear(mut self, bear: u16) -> Self {
        self.bear = bear;
        self
    }

    /// Sets the lowest functional road class to the next point.
    #[must_use]
    pub const fn lfrcnp(mut self, lfrcnp: u8) -> Self {
        self.lfrcnp = lfrcnp;
        self
    }

    /// Sets the distance to the next point in meters.
    #[must_use]
    pub const fn dnp(mut self, dnp: u32) -> Self {
        self.dnp = dnp;
        self
    }
}

/// A line location reference: an ordered path of at least two points.
///
/// `poffs` and `noffs` are ratios in [0, 1) describing how far the start of
/// the desired location lies after the first point, and how far its end lies
/// before the last point.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineLocationReference {
    /// Reference points in path order.
    pub points: Vec<LocationReferencePoint>,
    /// Positive offset ratio.
    #[cfg_attr(feature = "serde", serde(default))]
    pub poffs: f64,
    /// Negative offset ratio.
    #[cfg_attr(feature = "serde", serde(default))]
    pub noffs: f64,
}

impl LineLocationReference {
    /// Creates a line without offsets.
    #[must_use]
    pub fn new(points: Vec<LocationReferencePoint>) -> Self {
        Self {
            points,
            poffs: 0.0,
            noffs: 0.0,
        }
    }

    /// Sets the positive offset ratio.
    #[must_use]
    pub fn with_poffs(mut self, poffs: f64) -> Self {
        self.poffs = poffs;
        self
    }

    /// Sets the negative offset ratio.
    #[must_use]
    pub fn with_noffs(mut self, noffs: f64) -> Self {
        self.noffs = noffs;
        self
    }

    /// Offset flags written into the last point's attributes.
    #[must_use]
    pub fn offset_flags(&self) -> OffsetFlags {
        OffsetFlags::from_offsets(self.poffs, self.noffs)
    }

    /// Number of bytes [`encode`](Self::encode) produces for this line.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        wire::line_encoded_len(self.points.len(), self.offset_flags())
    }
}
