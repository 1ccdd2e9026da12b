//! Core domain types for the waitlist ranking engine.
//!
//! The crate holds the pieces every other crate agrees on: the
//! [`Candidate`] record read from a roster, the caller's
//! [`ReferencePoint`], great-circle distance in [`distance`](mod@distance),
//! min-max normalisation in [`normalise`](mod@normalise), and the
//! [`DatasetLoader`] seam through which rosters are read.
//!
//! # Examples
//!
//! ```
//! use waitlist_core::{DistanceUnit, ReferencePoint, haversine};
//!
//! # fn main() -> Result<(), waitlist_core::ReferencePointError> {
//! let bangalore = ReferencePoint::new(12.9716, 77.5946)?;
//! let chennai = ReferencePoint::new(13.0827, 80.2707)?;
//! let km = haversine(bangalore.coord(), chennai.coord(), DistanceUnit::Kilometres);
//! assert!((280.0..300.0).contains(&km));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidate;
pub mod distance;
mod loader;
pub mod normalise;
mod reference;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use candidate::{Candidate, CandidateError, CandidateLocation, CoordinateField};
pub use distance::{DistanceError, DistanceUnit, distance, haversine};
pub use loader::{DatasetLoader, LoadError};
pub use normalise::{NEUTRAL_SCORE, Range, normalise, normalise_inverted};
pub use reference::{ReferencePoint, ReferencePointError};
