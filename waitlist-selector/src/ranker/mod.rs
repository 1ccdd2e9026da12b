//! End-to-end ranking: load, score, select.
//!
//! [`Ranker`] wires a [`DatasetLoader`], a [`ScoringEngine`] and a
//! [`SelectionPolicy`] together. Every call to [`Ranker::rank`] loads its own
//! working copy of the roster, so one ranker can serve concurrent callers.

use log::debug;
use thiserror::Error;
use waitlist_core::{DatasetLoader, DistanceUnit, LoadError, ReferencePoint};
use waitlist_scorer::{ScoreWeights, ScoringEngine, ScoringError};

use crate::{
    DEFAULT_RANDOM_M, DEFAULT_TOP_N, RankedList, SelectionError, SelectionPolicy, Shuffler,
    ThreadRngShuffler,
};

/// Tunable parameters for a [`Ranker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankerConfig {
    /// Reliable candidates to return.
    pub top_n: usize,
    /// Low-confidence candidates to sample.
    pub random_m: usize,
    /// Factor weights used for scoring.
    pub weights: ScoreWeights,
    /// Unit for reported distances.
    pub unit: DistanceUnit,
}

impl RankerConfig {
    /// Check the configuration and return it unchanged.
    ///
    /// # Errors
    /// Returns [`RankError::Configuration`] when the weights are unusable.
    pub fn validate(self) -> Result<Self, RankError> {
        self.weights
            .validate()
            .map_err(|source| RankError::Configuration { source })?;
        Ok(self)
    }
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            random_m: DEFAULT_RANDOM_M,
            weights: ScoreWeights::default(),
            unit: DistanceUnit::default(),
        }
    }
}

/// Broad category of a [`RankError`], for mapping onto transport responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankErrorKind {
    /// The ranker was built with unusable parameters.
    Configuration,
    /// The dataset could not be read.
    Load,
    /// The dataset held no candidates.
    EmptyDataset,
    /// Measuring or scoring a candidate failed.
    Scoring,
}

/// Errors raised while ranking a roster.
#[derive(Debug, Error)]
pub enum RankError {
    /// The ranker configuration was rejected.
    #[error("error processing list: invalid configuration: {source}")]
    Configuration {
        /// Validation failure.
        #[source]
        source: ScoringError,
    },
    /// The dataset loader failed.
    #[error("error processing list: {source}")]
    Load {
        /// Loader failure.
        #[from]
        source: LoadError,
    },
    /// The dataset held no candidates.
    #[error("error processing list: no candidates available")]
    EmptyDataset,
    /// Measuring or scoring failed.
    #[error("error processing list: scoring failed: {source}")]
    Scoring {
        /// Scoring failure.
        #[source]
        source: ScoringError,
    },
}

impl RankError {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> RankErrorKind {
        match self {
            Self::Configuration { .. } => RankErrorKind::Configuration,
            Self::Load { .. } => RankErrorKind::Load,
            Self::EmptyDataset => RankErrorKind::EmptyDataset,
            Self::Scoring { .. } => RankErrorKind::Scoring,
        }
    }
}

impl From<SelectionError> for RankError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::EmptyDataset => Self::EmptyDataset,
        }
    }
}

/// Ranks a roster against a reference point.
///
/// # Examples
///
/// ```
/// use waitlist_core::ReferencePoint;
/// use waitlist_core::test_support::{MemoryLoader, sample_roster};
/// use waitlist_selector::{PreserveOrder, Ranker};
///
/// let ranker = Ranker::new(MemoryLoader::with_candidates(sample_roster()), PreserveOrder);
/// let reference = ReferencePoint::new(12.9716, 77.5946).expect("valid reference");
/// let ranked = ranker.rank(&reference, false).expect("ranking succeeds");
/// assert_eq!(ranked.len(), 3);
/// ```
#[derive(Debug)]
pub struct Ranker<L, S = ThreadRngShuffler> {
    loader: L,
    shuffler: S,
    engine: ScoringEngine,
    policy: SelectionPolicy,
}

impl<L, S> Ranker<L, S>
where
    L: DatasetLoader,
    S: Shuffler,
{
    /// Build a ranker with the default configuration.
    #[must_use]
    pub fn new(loader: L, shuffler: S) -> Self {
        let config = RankerConfig::default();
        Self {
            loader,
            shuffler,
            engine: ScoringEngine::default().with_unit(config.unit),
            policy: SelectionPolicy::new(config.top_n, config.random_m),
        }
    }

    /// Build a ranker from an explicit configuration.
    ///
    /// # Errors
    /// Returns [`RankError::Configuration`] when `config` fails validation.
    pub fn with_config(loader: L, shuffler: S, config: RankerConfig) -> Result<Self, RankError> {
        let RankerConfig {
            top_n,
            random_m,
            weights,
            unit,
        } = config;
        let engine = ScoringEngine::new(weights)
            .map_err(|source| RankError::Configuration { source })?
            .with_unit(unit);
        Ok(Self {
            loader,
            shuffler,
            engine,
            policy: SelectionPolicy::new(top_n, random_m),
        })
    }

    /// Scoring engine used by this ranker.
    #[must_use]
    pub const fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Selection quotas used by this ranker.
    #[must_use]
    pub const fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// Rank the roster against `reference`.
    ///
    /// Returns detailed results with per-factor breakdowns when `debug` is
    /// set, compact results otherwise.
    ///
    /// # Errors
    /// - [`RankError::Load`] when the loader fails.
    /// - [`RankError::EmptyDataset`] when the roster is empty.
    /// - [`RankError::Scoring`] when a candidate cannot be measured or
    ///   scored.
    pub fn rank(&self, reference: &ReferencePoint, debug: bool) -> Result<RankedList, RankError> {
        let roster = self.loader.load()?;
        debug!("Loaded {} candidates", roster.len());
        if roster.is_empty() {
            return Err(RankError::EmptyDataset);
        }

        let measurements = self
            .engine
            .measure(roster, reference)
            .map_err(|source| RankError::Scoring { source })?;
        let ranges = measurements.ranges;
        let scored = measurements
            .candidates
            .into_iter()
            .map(|entry| self.engine.score(entry, &ranges))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| RankError::Scoring { source })?;
        debug!("Scored {} candidates", scored.len());

        let selection = self.policy.select(scored, &self.shuffler)?;
        debug!(
            "Selected {} reliable and {} sampled candidates{}",
            selection.primary.len(),
            selection.secondary.len(),
            if selection.fallback_used {
                " (fallback)"
            } else {
                ""
            }
        );
        Ok(selection.into_list(debug))
    }
}

#[cfg(test)]
mod tests;
