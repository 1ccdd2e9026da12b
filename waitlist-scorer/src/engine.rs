//! Two-pass scoring over a candidate roster.
//!
//! Normalisation needs dataset-wide bounds before any single score can be
//! computed, so scoring runs in two passes:
//!
//! 1. [`ScoringEngine::measure`] computes each candidate's distance to the
//!    reference point and total offers, folding every field into
//!    [`FieldRanges`].
//! 2. [`ScoringEngine::score`] normalises each field against those ranges,
//!    applies the [`ScoreWeights`], and classifies engagement confidence.

use log::{debug, warn};
use waitlist_core::{
    Candidate, DistanceUnit, Range, ReferencePoint, haversine, normalise, normalise_inverted,
};

use crate::{
    Confidence, FactorBreakdown, FactorScore, FieldRanges, MeasuredCandidate, Measurements,
    ScoreWeights, ScoredCandidate, ScoringError,
};

/// Multiplier taking a `0..=1` weighted total onto the published scale.
pub const SCORE_SCALE: f64 = 10.0;
/// Lowest score a candidate can receive.
pub const SCORE_FLOOR: f64 = 1.0;
/// Highest score a candidate can receive.
pub const SCORE_CEILING: f64 = 10.0;
/// Engagement at or below this value marks a candidate as low confidence.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 1.0;

/// Scores candidates by proximity and engagement history.
///
/// # Examples
///
/// ```
/// use waitlist_core::ReferencePoint;
/// use waitlist_core::test_support::sample_roster;
/// use waitlist_scorer::{ScoreWeights, ScoringEngine};
///
/// let engine = ScoringEngine::new(ScoreWeights::default()).expect("default weights are valid");
/// let reference = ReferencePoint::new(12.9716, 77.5946).expect("valid reference");
/// let scored = engine.score_all(sample_roster(), &reference).expect("roster scores");
/// assert!(scored.iter().all(|c| (1.0..=10.0).contains(&c.score)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringEngine {
    weights: ScoreWeights,
    unit: DistanceUnit,
}

impl ScoringEngine {
    /// Build an engine measuring distances in kilometres.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeights`] when `weights` fail
    /// validation.
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoringError> {
        Ok(Self {
            weights: weights.validate()?,
            unit: DistanceUnit::Kilometres,
        })
    }

    /// Measure distances in `unit` instead of kilometres.
    #[must_use]
    pub const fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Weights applied by this engine.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Unit used for distances.
    #[must_use]
    pub const fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// First pass: measure every candidate and discover field ranges.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidLocation`] when a candidate's stored
    /// coordinates cannot be parsed.
    pub fn measure(
        &self,
        candidates: Vec<Candidate>,
        reference: &ReferencePoint,
    ) -> Result<Measurements, ScoringError> {
        let origin = reference.coord();
        let mut ranges = FieldRanges::EMPTY;
        let mut measured = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let location = candidate.coordinates()?;
            let distance = haversine(location, origin, self.unit);
            let entry = MeasuredCandidate::new(candidate, distance);
            ranges.include(&entry);
            measured.push(entry);
        }

        let degenerate = ranges.degenerate_fields();
        if !measured.is_empty() && !degenerate.is_empty() {
            warn!(
                "Constant fields across {} candidates normalise to a neutral score: {}",
                measured.len(),
                degenerate.join(", ")
            );
        }
        debug!(
            "Measured {} candidates; distance range {:.2}..={:.2} {}",
            measured.len(),
            ranges.distance.min,
            ranges.distance.max,
            self.unit
        );

        Ok(Measurements {
            candidates: measured,
            ranges,
        })
    }

    /// Second pass: score a measured candidate against dataset ranges.
    ///
    /// # Errors
    /// Returns [`ScoringError::MissingDistance`] when `measured` has not been
    /// through [`ScoringEngine::measure`].
    pub fn score(
        &self,
        measured: MeasuredCandidate,
        ranges: &FieldRanges,
    ) -> Result<ScoredCandidate, ScoringError> {
        let MeasuredCandidate {
            candidate,
            distance,
            total_offers,
        } = measured;
        let Some(distance_value) = distance else {
            return Err(ScoringError::MissingDistance { id: candidate.id });
        };

        let breakdown = self.breakdown(&candidate, distance_value, ranges);
        let score = scale_score(breakdown.raw_total);
        let engagement = engagement_score(total_offers, ranges.total_offers);
        let confidence = if engagement <= LOW_CONFIDENCE_THRESHOLD {
            Confidence::LowConfidence
        } else {
            Confidence::Reliable
        };

        Ok(ScoredCandidate {
            candidate,
            distance: distance_value,
            total_offers,
            score,
            engagement,
            confidence,
            breakdown,
        })
    }

    /// Run both passes over a roster, preserving roster order.
    ///
    /// # Errors
    /// Propagates failures from [`ScoringEngine::measure`] and
    /// [`ScoringEngine::score`].
    pub fn score_all(
        &self,
        candidates: Vec<Candidate>,
        reference: &ReferencePoint,
    ) -> Result<Vec<ScoredCandidate>, ScoringError> {
        let Measurements {
            candidates: measured,
            ranges,
        } = self.measure(candidates, reference)?;
        measured
            .into_iter()
            .map(|entry| self.score(entry, &ranges))
            .collect()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "weighted aggregation multiplies and sums normalised factors"
    )]
    fn breakdown(
        &self,
        candidate: &Candidate,
        distance: f64,
        ranges: &FieldRanges,
    ) -> FactorBreakdown {
        let weights = self.weights;
        let factor = |normalised: f64, weight: f64| FactorScore {
            normalised,
            contribution: normalised * weight,
        };

        let age = factor(
            normalise(f64::from(candidate.age), ranges.age),
            weights.age,
        );
        let distance_factor = factor(
            normalise_inverted(distance, ranges.distance),
            weights.distance,
        );
        let accepted_offers = factor(
            normalise(f64::from(candidate.accepted_offers), ranges.accepted),
            weights.accepted_offers,
        );
        let canceled_offers = factor(
            normalise_inverted(f64::from(candidate.canceled_offers), ranges.canceled),
            weights.canceled_offers,
        );
        let reply_time = factor(
            normalise_inverted(candidate.average_reply_time, ranges.reply),
            weights.reply_time,
        );
        let raw_total = age.contribution
            + distance_factor.contribution
            + accepted_offers.contribution
            + canceled_offers.contribution
            + reply_time.contribution;

        FactorBreakdown {
            age,
            distance: distance_factor,
            accepted_offers,
            canceled_offers,
            reply_time,
            raw_total,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            unit: DistanceUnit::Kilometres,
        }
    }
}

/// Scale a weighted total to `1..=10`, rounded to two decimals.
#[expect(
    clippy::float_arithmetic,
    reason = "scaling and rounding a score are float operations"
)]
pub(crate) fn scale_score(raw_total: f64) -> f64 {
    let rounded = (raw_total * SCORE_SCALE * 100.0).round() / 100.0;
    if rounded.is_nan() {
        return SCORE_FLOOR;
    }
    rounded.clamp(SCORE_FLOOR, SCORE_CEILING)
}

/// Normalised total offers on a `0..=10` scale.
#[expect(
    clippy::float_arithmetic,
    reason = "engagement is a scaled normalisation"
)]
pub(crate) fn engagement_score(total_offers: u32, range: Range) -> f64 {
    normalise(f64::from(total_offers), range) * SCORE_SCALE
}
