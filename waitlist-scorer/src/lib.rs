//! Scoring for waitlist candidates.
//!
//! The [`ScoringEngine`] turns a roster and a reference point into
//! [`ScoredCandidate`] values:
//! - **Range discovery** measures great-circle distance and total offers for
//!   every candidate and records the dataset-wide minimum and maximum of each
//!   scored field.
//! - **Scoring** min-max normalises age and accepted offers (larger is
//!   better) and distance, cancelled offers and reply time (smaller is
//!   better), blends them with [`ScoreWeights`], and publishes a score on a
//!   `1..=10` scale.
//! - **Confidence** marks candidates whose normalised offer history is too
//!   thin to trust as [`Confidence::LowConfidence`].
//!
//! Fields that are constant across a roster normalise to
//! [`NEUTRAL_SCORE`](waitlist_core::NEUTRAL_SCORE) instead of dividing by
//! zero.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod types;

pub use engine::{
    LOW_CONFIDENCE_THRESHOLD, SCORE_CEILING, SCORE_FLOOR, SCORE_SCALE, ScoringEngine,
};
pub use error::ScoringError;
pub use types::{
    Confidence, FactorBreakdown, FactorScore, FieldRanges, MeasuredCandidate, Measurements,
    ScoreWeights, ScoredCandidate,
};
