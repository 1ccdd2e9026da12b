//! Facade crate for the waitlist ranking engine.
//!
//! This crate re-exports the core domain types, the scoring engine and the
//! ranking pipeline, and exposes the JSON dataset loader behind a feature
//! flag.

#![forbid(unsafe_code)]

pub use waitlist_core::{
    Candidate, CandidateError, CandidateLocation, DatasetLoader, DistanceError, DistanceUnit,
    LoadError, NEUTRAL_SCORE, Range, ReferencePoint, ReferencePointError, distance, haversine,
    normalise, normalise_inverted,
};

pub use waitlist_scorer::{
    Confidence, FactorBreakdown, FactorScore, FieldRanges, ScoreWeights, ScoredCandidate,
    ScoringEngine, ScoringError,
};

pub use waitlist_selector::{
    DetailedResult, PreserveOrder, RankError, RankErrorKind, RankedList, RankedResult, Ranker,
    RankerConfig, SeededShuffler, Selection, SelectionError, SelectionPolicy, Shuffler,
    ThreadRngShuffler,
};

#[cfg(feature = "loader-json")]
pub use waitlist_data::{JsonDatasetError, JsonDatasetLoader};

#[cfg(feature = "test-support")]
pub use waitlist_core::test_support;
