//! Candidate records as they appear in a roster.

use std::fmt;

use geo::Coord;
use thiserror::Error;

/// Location of a candidate as decimal-degree strings.
///
/// Rosters store coordinates as text; [`Candidate::coordinates`] parses
/// them when a distance is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateLocation {
    /// Latitude in decimal degrees, e.g. `"46.7110"`.
    pub latitude: String,
    /// Longitude in decimal degrees, e.g. `"-63.1150"`.
    pub longitude: String,
}

/// A person awaiting an offer, together with their engagement history.
///
/// # Examples
///
/// ```
/// use waitlist_core::{Candidate, CandidateLocation};
///
/// # fn main() -> Result<(), waitlist_core::CandidateError> {
/// let candidate = Candidate {
///     id: "541d25c9".into(),
///     name: "Samir Pacocha".into(),
///     location: CandidateLocation {
///         latitude: "46.7110".into(),
///         longitude: "-63.1150".into(),
///     },
///     age: 46,
///     accepted_offers: 49,
///     canceled_offers: 92,
///     average_reply_time: 2598.0,
/// };
/// let coord = candidate.coordinates()?;
/// assert_eq!(coord.y, 46.711);
/// assert_eq!(candidate.total_offers(), 141);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Candidate {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Home location.
    pub location: CandidateLocation,
    /// Age in years.
    pub age: u32,
    /// Offers the candidate has accepted.
    pub accepted_offers: u32,
    /// Offers the candidate has cancelled.
    pub canceled_offers: u32,
    /// Mean time taken to answer an offer, in seconds.
    pub average_reply_time: f64,
}

/// Which half of a coordinate pair failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    /// The latitude string.
    Latitude,
    /// The longitude string.
    Longitude,
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        })
    }
}

/// Errors raised while interpreting a [`Candidate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandidateError {
    /// A coordinate string was not a finite decimal number.
    #[error("candidate {id} has an invalid {field}: {value:?}")]
    InvalidCoordinate {
        /// Identifier of the affected candidate.
        id: String,
        /// Coordinate that failed to parse.
        field: CoordinateField,
        /// Raw text found in the roster.
        value: String,
    },
}

impl Candidate {
    /// Parse the stored location into a `geo` coordinate.
    ///
    /// # Errors
    /// Returns [`CandidateError::InvalidCoordinate`] when either string is
    /// not a finite number.
    pub fn coordinates(&self) -> Result<Coord<f64>, CandidateError> {
        let y = self.parse_coordinate(&self.location.latitude, CoordinateField::Latitude)?;
        let x = self.parse_coordinate(&self.location.longitude, CoordinateField::Longitude)?;
        Ok(Coord { x, y })
    }

    /// Accepted plus cancelled offers.
    #[must_use]
    pub const fn total_offers(&self) -> u32 {
        self.accepted_offers.saturating_add(self.canceled_offers)
    }

    fn parse_coordinate(&self, raw: &str, field: CoordinateField) -> Result<f64, CandidateError> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| CandidateError::InvalidCoordinate {
                id: self.id.clone(),
                field,
                value: raw.to_owned(),
            })
    }
}
