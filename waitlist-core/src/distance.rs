//! Great-circle distance between two coordinates.
//!
//! Distances use the haversine formula over a spherical Earth. Coordinates
//! follow the `geo` convention of `x = longitude` and `y = latitude`, both in
//! decimal degrees.

use std::fmt;
use std::str::FromStr;

use geo::Coord;
use thiserror::Error;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MI: f64 = 3958.8;

/// Unit in which [`haversine`] reports distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    /// Kilometres (`"km"`).
    #[default]
    Kilometres,
    /// Statute miles (`"mi"`).
    Miles,
}

impl DistanceUnit {
    /// Earth radius expressed in this unit.
    #[must_use]
    pub const fn earth_radius(self) -> f64 {
        match self {
            Self::Kilometres => EARTH_RADIUS_KM,
            Self::Miles => EARTH_RADIUS_MI,
        }
    }

    /// Short label accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kilometres => "km",
            Self::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = DistanceError;

    fn from_str(unit: &str) -> Result<Self, Self::Err> {
        match unit {
            "km" => Ok(Self::Kilometres),
            "mi" => Ok(Self::Miles),
            other => Err(DistanceError::InvalidUnit {
                unit: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while computing distances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// The requested unit is neither `km` nor `mi`.
    #[error("invalid unit {unit:?}; use 'km' for kilometres or 'mi' for miles")]
    InvalidUnit {
        /// Unit string supplied by the caller.
        unit: String,
    },
}

/// Haversine distance between `from` and `to` in the given unit.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use waitlist_core::{DistanceUnit, haversine};
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// assert_eq!(haversine(origin, origin, DistanceUnit::Kilometres), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine(from: Coord<f64>, to: Coord<f64>, unit: DistanceUnit) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let half_dlat = (to.y - from.y).to_radians() / 2.0;
    let half_dlon = (to.x - from.x).to_radians() / 2.0;

    // Rounding can push near-antipodal points just past 1.0.
    let a = (half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    unit.earth_radius() * c
}

/// Distance between two latitude/longitude pairs with a textual unit.
///
/// # Errors
/// Returns [`DistanceError::InvalidUnit`] when `unit` is not `"km"` or
/// `"mi"`.
pub fn distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    unit: &str,
) -> Result<f64, DistanceError> {
    let parsed = unit.parse::<DistanceUnit>()?;
    Ok(haversine(
        Coord { x: lon1, y: lat1 },
        Coord { x: lon2, y: lat2 },
        parsed,
    ))
}
