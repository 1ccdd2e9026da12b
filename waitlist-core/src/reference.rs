//! The caller's reference point.

use geo::Coord;
use thiserror::Error;

/// Validated latitude/longitude pair against which proximity is scored.
///
/// # Examples
///
/// ```
/// use waitlist_core::{ReferencePoint, ReferencePointError};
///
/// let point = ReferencePoint::new(46.7110, -63.1150).expect("in range");
/// assert_eq!(point.coord().x, -63.1150);
/// assert_eq!(
///     ReferencePoint::new(91.0, 0.0),
///     Err(ReferencePointError::LatitudeOutOfRange(91.0))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReferencePoint {
    latitude: f64,
    longitude: f64,
}

/// Errors returned by [`ReferencePoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ReferencePointError {
    /// Latitude was outside `-90..=90` or not finite.
    #[error("latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),
    /// Longitude was outside `-180..=180` or not finite.
    #[error("longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),
}

impl ReferencePoint {
    /// Validate and construct a reference point.
    ///
    /// # Errors
    /// Returns [`ReferencePointError`] when either coordinate is out of
    /// range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ReferencePointError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ReferencePointError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ReferencePointError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The point as a `geo` coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}
