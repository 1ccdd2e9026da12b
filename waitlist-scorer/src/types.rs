//! Public configuration, intermediate and output types for scoring.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use waitlist_core::{Candidate, Range};

use crate::ScoringError;

/// Relative importance of each scoring factor.
///
/// Weights are expected to sum to `1.0` so the weighted total stays within
/// `0.0..=1.0`; final scores are capped at `10` either way.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    /// Weight of the candidate's age (older scores higher).
    pub age: f64,
    /// Weight of proximity to the reference point (closer scores higher).
    pub distance: f64,
    /// Weight of accepted offers (more scores higher).
    pub accepted_offers: f64,
    /// Weight of cancelled offers (fewer scores higher).
    pub canceled_offers: f64,
    /// Weight of average reply time (faster scores higher).
    pub reply_time: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeights`] when any value is negative or
    /// not finite, or when all weights are zero.
    pub fn validate(self) -> Result<Self, ScoringError> {
        let values = self.values();
        let usable = values.iter().all(|w| w.is_finite() && *w >= 0.0);
        if usable && self.total() > 0.0 {
            Ok(self)
        } else {
            Err(ScoringError::InvalidWeights)
        }
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values().iter().sum()
    }

    const fn values(&self) -> [f64; 5] {
        [
            self.age,
            self.distance,
            self.accepted_offers,
            self.canceled_offers,
            self.reply_time,
        ]
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            age: 0.1,
            distance: 0.1,
            accepted_offers: 0.3,
            canceled_offers: 0.3,
            reply_time: 0.2,
        }
    }
}

/// How far a candidate's engagement history can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    /// Enough offer history to trust the score.
    Reliable,
    /// Too little offer history; the score is a guess.
    LowConfidence,
}

impl Confidence {
    /// Report whether this is [`Confidence::Reliable`].
    #[must_use]
    pub const fn is_reliable(self) -> bool {
        matches!(self, Self::Reliable)
    }
}

/// Dataset-wide bounds of every scored field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldRanges {
    /// Age in years.
    pub age: Range,
    /// Accepted offers.
    pub accepted: Range,
    /// Cancelled offers.
    pub canceled: Range,
    /// Accepted plus cancelled offers.
    pub total_offers: Range,
    /// Average reply time.
    pub reply: Range,
    /// Distance to the reference point.
    pub distance: Range,
}

impl FieldRanges {
    /// Ranges that contain no values yet.
    pub const EMPTY: Self = Self {
        age: Range::EMPTY,
        accepted: Range::EMPTY,
        canceled: Range::EMPTY,
        total_offers: Range::EMPTY,
        reply: Range::EMPTY,
        distance: Range::EMPTY,
    };

    /// Names of the fields whose range collapsed to a single value.
    #[must_use]
    pub fn degenerate_fields(&self) -> Vec<&'static str> {
        [
            ("age", self.age),
            ("acceptedOffers", self.accepted),
            ("canceledOffers", self.canceled),
            ("totalOffers", self.total_offers),
            ("averageReplyTime", self.reply),
            ("distance", self.distance),
        ]
        .into_iter()
        .filter(|(_, range)| range.is_degenerate())
        .map(|(name, _)| name)
        .collect()
    }

    pub(crate) fn include(&mut self, measured: &MeasuredCandidate) {
        let candidate = &measured.candidate;
        self.age.include(f64::from(candidate.age));
        self.accepted.include(f64::from(candidate.accepted_offers));
        self.canceled.include(f64::from(candidate.canceled_offers));
        self.total_offers.include(f64::from(measured.total_offers));
        self.reply.include(candidate.average_reply_time);
        if let Some(distance) = measured.distance {
            self.distance.include(distance);
        }
    }
}

/// A candidate after range discovery.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredCandidate {
    /// The roster entry.
    pub candidate: Candidate,
    /// Distance to the reference point in the engine's unit, once measured.
    pub distance: Option<f64>,
    /// Accepted plus cancelled offers.
    pub total_offers: u32,
}

impl MeasuredCandidate {
    /// Pair a candidate with its measured distance.
    #[must_use]
    pub const fn new(candidate: Candidate, distance: f64) -> Self {
        let total_offers = candidate.total_offers();
        Self {
            candidate,
            distance: Some(distance),
            total_offers,
        }
    }

    /// Wrap a candidate whose distance has not been measured.
    #[must_use]
    pub const fn unmeasured(candidate: Candidate) -> Self {
        let total_offers = candidate.total_offers();
        Self {
            candidate,
            distance: None,
            total_offers,
        }
    }
}

/// Output of the range-discovery pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    /// Candidates in roster order with distance and total offers filled in.
    pub candidates: Vec<MeasuredCandidate>,
    /// Bounds observed across `candidates`.
    pub ranges: FieldRanges,
}

/// One factor's share of a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorScore {
    /// Oriented, normalised value; higher is always better.
    pub normalised: f64,
    /// `normalised` multiplied by the factor weight.
    pub contribution: f64,
}

/// Per-factor breakdown of a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    /// Age factor.
    pub age: FactorScore,
    /// Proximity factor.
    pub distance: FactorScore,
    /// Accepted offers factor.
    pub accepted_offers: FactorScore,
    /// Cancelled offers factor (inverted).
    pub canceled_offers: FactorScore,
    /// Reply time factor (inverted).
    pub reply_time: FactorScore,
    /// Sum of all contributions before scaling.
    pub raw_total: f64,
}

/// A fully scored candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// The roster entry.
    pub candidate: Candidate,
    /// Distance to the reference point in the engine's unit.
    pub distance: f64,
    /// Accepted plus cancelled offers.
    pub total_offers: u32,
    /// Score on a `1..=10` scale, rounded to two decimals.
    pub score: f64,
    /// Normalised total offers on a `0..=10` scale.
    pub engagement: f64,
    /// Engagement classification derived from `engagement`.
    pub confidence: Confidence,
    /// Factor contributions behind `score`.
    pub breakdown: FactorBreakdown,
}

impl ScoredCandidate {
    /// Report whether the candidate's history is trusted.
    #[must_use]
    pub const fn is_reliable(&self) -> bool {
        self.confidence.is_reliable()
    }
}
