//! Two-bucket selection over scored candidates.

use log::{debug, warn};
use thiserror::Error;
use waitlist_scorer::ScoredCandidate;

use crate::{DetailedResult, RankedList, RankedResult, Shuffler};

/// Reliable candidates returned by default.
pub const DEFAULT_TOP_N: usize = 7;
/// Low-confidence candidates sampled by default.
pub const DEFAULT_RANDOM_M: usize = 3;

/// Errors raised while selecting candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// There were no scored candidates to choose from.
    #[error("no candidates available to select from")]
    EmptyDataset,
}

/// Quotas for the reliable and low-confidence groups.
///
/// Reliable candidates are ranked by descending score and the first
/// `top_n` kept. Low-confidence candidates are shuffled and the first
/// `random_m` kept. When no candidate is low confidence, the second group is
/// filled from the reliable candidates ranked just below the first group.
///
/// # Examples
///
/// ```
/// use waitlist_core::ReferencePoint;
/// use waitlist_core::test_support::sample_roster;
/// use waitlist_scorer::{ScoreWeights, ScoringEngine};
/// use waitlist_selector::{PreserveOrder, SelectionPolicy};
///
/// let engine = ScoringEngine::new(ScoreWeights::default()).expect("default weights");
/// let reference = ReferencePoint::new(12.9716, 77.5946).expect("valid reference");
/// let scored = engine.score_all(sample_roster(), &reference).expect("roster scores");
///
/// let selection = SelectionPolicy::new(1, 1)
///     .select(scored, &PreserveOrder)
///     .expect("roster is not empty");
/// assert_eq!(selection.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    top_n: usize,
    random_m: usize,
}

impl SelectionPolicy {
    /// Create a policy with explicit quotas.
    #[must_use]
    pub const fn new(top_n: usize, random_m: usize) -> Self {
        Self { top_n, random_m }
    }

    /// Quota for the reliable group.
    #[must_use]
    pub const fn top_n(&self) -> usize {
        self.top_n
    }

    /// Quota for the low-confidence group.
    #[must_use]
    pub const fn random_m(&self) -> usize {
        self.random_m
    }

    /// Split `scored` into the two output groups.
    ///
    /// # Errors
    /// Returns [`SelectionError::EmptyDataset`] when `scored` is empty.
    pub fn select<S: Shuffler>(
        &self,
        scored: Vec<ScoredCandidate>,
        shuffler: &S,
    ) -> Result<Selection, SelectionError> {
        if scored.is_empty() {
            return Err(SelectionError::EmptyDataset);
        }

        let (mut reliable, mut low_confidence): (Vec<_>, Vec<_>) =
            scored.into_iter().partition(ScoredCandidate::is_reliable);
        debug!(
            "Selecting from {} reliable and {} low-confidence candidates",
            reliable.len(),
            low_confidence.len()
        );

        // `sort_by` is stable, so equal scores keep roster order.
        reliable.sort_by(|a, b| b.score.total_cmp(&a.score));
        let mut ranked = reliable.into_iter();
        let primary: Vec<_> = ranked.by_ref().take(self.top_n).collect();

        if low_confidence.is_empty() {
            let secondary: Vec<_> = ranked.take(self.random_m).collect();
            if self.random_m > 0 {
                warn!(
                    "No low-confidence candidates; filling {} of {} sampled slots from the reliable ranking",
                    secondary.len(),
                    self.random_m
                );
            }
            return Ok(Selection {
                primary,
                secondary,
                fallback_used: true,
            });
        }

        shuffler.shuffle(&mut low_confidence);
        low_confidence.truncate(self.random_m);
        Ok(Selection {
            primary,
            secondary: low_confidence,
            fallback_used: false,
        })
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N, DEFAULT_RANDOM_M)
    }
}

/// Candidates chosen by a [`SelectionPolicy`].
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Highest-scoring reliable candidates, best first.
    pub primary: Vec<ScoredCandidate>,
    /// Sampled low-confidence candidates, or the next reliable ranks when
    /// `fallback_used` is set.
    pub secondary: Vec<ScoredCandidate>,
    /// Whether `secondary` came from the reliable ranking.
    pub fallback_used: bool,
}

impl Selection {
    /// Total number of selected candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    /// Report whether nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Iterate over `primary` followed by `secondary`.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredCandidate> {
        self.primary.iter().chain(&self.secondary)
    }

    /// Consume into a single ordered list.
    #[must_use]
    pub fn into_candidates(self) -> Vec<ScoredCandidate> {
        let mut candidates = self.primary;
        candidates.extend(self.secondary);
        candidates
    }

    /// Consume into the compact output shape.
    #[must_use]
    pub fn into_compact(self) -> Vec<RankedResult> {
        self.into_candidates()
            .into_iter()
            .map(RankedResult::from)
            .collect()
    }

    /// Consume into the detailed output shape.
    #[must_use]
    pub fn into_detailed(self) -> Vec<DetailedResult> {
        self.into_candidates()
            .into_iter()
            .map(DetailedResult::from)
            .collect()
    }

    /// Consume into the shape requested by `debug`.
    #[must_use]
    pub fn into_list(self, debug: bool) -> RankedList {
        if debug {
            RankedList::Detailed(self.into_detailed())
        } else {
            RankedList::Compact(self.into_compact())
        }
    }
}
