//! Error types raised while scoring candidates.
#![forbid(unsafe_code)]

use thiserror::Error;
use waitlist_core::CandidateError;

/// Errors raised while measuring or scoring a roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Provided weights were unusable.
    #[error("weights must be finite, non-negative and sum to a positive value")]
    InvalidWeights,
    /// A candidate's stored location could not be parsed.
    #[error("failed to locate candidate: {source}")]
    InvalidLocation {
        /// Source error from coordinate parsing.
        #[from]
        source: CandidateError,
    },
    /// Scoring ran before the candidate's distance was measured.
    #[error("distance is not defined for candidate {id}")]
    MissingDistance {
        /// Identifier of the affected candidate.
        id: String,
    },
}
