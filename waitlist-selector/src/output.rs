//! Result shapes returned to callers.
//!
//! [`RankedResult`] is the compact view; [`DetailedResult`] adds the raw
//! fields and per-factor breakdown for operator inspection.

use serde::Serialize;
use waitlist_scorer::{Confidence, FactorBreakdown, ScoredCandidate};

/// Compact view of a selected candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    /// Candidate identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Score on a `1..=10` scale.
    pub score: f64,
    /// Engagement classification.
    pub confidence: Confidence,
}

impl From<ScoredCandidate> for RankedResult {
    fn from(scored: ScoredCandidate) -> Self {
        Self {
            id: scored.candidate.id,
            name: scored.candidate.name,
            score: scored.score,
            confidence: scored.confidence,
        }
    }
}

/// Debug view of a selected candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedResult {
    /// Candidate identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Distance to the reference point.
    pub distance: f64,
    /// Age in years.
    pub age: u32,
    /// Accepted offers.
    pub accepted_offers: u32,
    /// Cancelled offers.
    pub canceled_offers: u32,
    /// Average reply time.
    pub average_reply_time: f64,
    /// Accepted plus cancelled offers.
    pub total_offers: u32,
    /// Score on a `1..=10` scale.
    pub score: f64,
    /// Normalised total offers on a `0..=10` scale.
    pub engagement_score: f64,
    /// Factor contributions behind `score`.
    pub breakdown: FactorBreakdown,
    /// Engagement classification.
    pub confidence: Confidence,
}

impl From<ScoredCandidate> for DetailedResult {
    fn from(scored: ScoredCandidate) -> Self {
        let ScoredCandidate {
            candidate,
            distance,
            total_offers,
            score,
            engagement,
            confidence,
            breakdown,
        } = scored;
        Self {
            id: candidate.id,
            name: candidate.name,
            distance,
            age: candidate.age,
            accepted_offers: candidate.accepted_offers,
            canceled_offers: candidate.canceled_offers,
            average_reply_time: candidate.average_reply_time,
            total_offers,
            score,
            engagement_score: engagement,
            breakdown,
            confidence,
        }
    }
}

/// A ranked list in either output shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RankedList {
    /// Compact results.
    Compact(Vec<RankedResult>),
    /// Detailed results with factor breakdowns.
    Detailed(Vec<DetailedResult>),
}

impl RankedList {
    /// Number of selected candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Compact(results) => results.len(),
            Self::Detailed(results) => results.len(),
        }
    }

    /// Report whether nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identifiers in output order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Compact(results) => results.iter().map(|r| r.id.as_str()).collect(),
            Self::Detailed(results) => results.iter().map(|r| r.id.as_str()).collect(),
        }
    }
}
