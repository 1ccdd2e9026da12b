//! Read candidate rosters from an external source.
//!
//! The [`DatasetLoader`] trait abstracts where a roster lives. Each call to
//! [`DatasetLoader::load`] must return an independent working copy so that
//! concurrent ranking requests never observe each other's data.

use std::error::Error as StdError;

use thiserror::Error;

use crate::Candidate;

/// Supply the roster of candidates for a ranking request.
///
/// Implementations must be `Send + Sync` so a single loader can serve
/// concurrent callers.
///
/// # Examples
///
/// ```rust
/// use waitlist_core::{Candidate, DatasetLoader, LoadError};
///
/// struct EmptyRoster;
///
/// impl DatasetLoader for EmptyRoster {
///     fn load(&self) -> Result<Vec<Candidate>, LoadError> {
///         Ok(Vec::new())
///     }
/// }
///
/// assert!(EmptyRoster.load().expect("empty roster").is_empty());
/// ```
pub trait DatasetLoader: Send + Sync {
    /// Return a fresh copy of the roster.
    ///
    /// # Errors
    /// Returns [`LoadError`] when the source is missing or malformed.
    fn load(&self) -> Result<Vec<Candidate>, LoadError>;
}

/// The roster source was unavailable or corrupt.
#[derive(Debug, Error)]
#[error("failed to load candidates from {origin}: {source}")]
pub struct LoadError {
    origin: String,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl LoadError {
    /// Wrap an underlying failure raised while reading `origin`.
    pub fn new(
        origin: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            origin: origin.into(),
            source: source.into(),
        }
    }

    /// Description of the source that failed, e.g. a file path.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }
}
