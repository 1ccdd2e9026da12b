//! Unit coverage for the ranking pipeline.

use std::error::Error as _;

use rstest::{fixture, rstest};
use waitlist_core::test_support::{FailingLoader, MemoryLoader, candidate_at, sample_roster};
use waitlist_core::{DistanceUnit, ReferencePoint};
use waitlist_scorer::{ScoreWeights, ScoringError};

use super::{RankError, RankErrorKind, Ranker, RankerConfig};
use crate::{PreserveOrder, RankedList, SeededShuffler};

#[fixture]
fn bangalore() -> ReferencePoint {
    ReferencePoint::new(12.9716, 77.5946).expect("valid reference point")
}

#[fixture]
fn sample_loader() -> MemoryLoader {
    MemoryLoader::with_candidates(sample_roster())
}

#[rstest]
fn empty_roster_fails_with_empty_dataset(bangalore: ReferencePoint) {
    let ranker = Ranker::new(MemoryLoader::default(), PreserveOrder);
    let err = ranker
        .rank(&bangalore, false)
        .expect_err("empty roster should fail");
    assert!(matches!(err, RankError::EmptyDataset));
    assert_eq!(err.kind(), RankErrorKind::EmptyDataset);
    assert_eq!(
        err.to_string(),
        "error processing list: no candidates available"
    );
}

#[rstest]
fn loader_failures_are_wrapped(bangalore: ReferencePoint) {
    let ranker = Ranker::new(FailingLoader::new("disk on fire"), PreserveOrder);
    let err = ranker
        .rank(&bangalore, false)
        .expect_err("loader failure should propagate");
    assert_eq!(err.kind(), RankErrorKind::Load);
    assert_eq!(
        err.to_string(),
        "error processing list: failed to load candidates from failing loader: disk on fire"
    );
    let source = err.source().expect("load error is chained");
    assert!(source.to_string().contains("failing loader"));
}

#[rstest]
fn unparsable_coordinates_are_scoring_failures(bangalore: ReferencePoint) {
    let mut roster = sample_roster();
    if let Some(first) = roster.first_mut() {
        first.location.longitude = "east-ish".to_owned();
    }
    let ranker = Ranker::new(MemoryLoader::with_candidates(roster), PreserveOrder);
    let err = ranker
        .rank(&bangalore, false)
        .expect_err("bad coordinate should fail");
    assert_eq!(err.kind(), RankErrorKind::Scoring);
    let message = err.to_string();
    assert!(message.starts_with("error processing list: scoring failed:"));
    assert!(message.contains("\"east-ish\""), "message was {message}");
}

#[rstest]
fn invalid_weights_are_rejected_at_construction(sample_loader: MemoryLoader) {
    let config = RankerConfig {
        weights: ScoreWeights {
            age: -1.0,
            ..ScoreWeights::default()
        },
        ..RankerConfig::default()
    };
    let err = Ranker::with_config(sample_loader, PreserveOrder, config)
        .expect_err("negative weight should fail");
    assert_eq!(err.kind(), RankErrorKind::Configuration);
    assert!(matches!(
        err,
        RankError::Configuration {
            source: ScoringError::InvalidWeights
        }
    ));
}

#[rstest]
fn with_config_applies_quotas_weights_and_unit(sample_loader: MemoryLoader) {
    let weights = ScoreWeights {
        age: 0.4,
        ..ScoreWeights::default()
    };
    let config = RankerConfig {
        top_n: 2,
        random_m: 5,
        weights,
        unit: DistanceUnit::Miles,
    };
    let ranker =
        Ranker::with_config(sample_loader, PreserveOrder, config).expect("config is valid");
    assert_eq!(ranker.engine().unit(), DistanceUnit::Miles);
    assert_eq!(ranker.engine().weights(), weights);
    assert_eq!(ranker.policy().top_n(), 2);
    assert_eq!(ranker.policy().random_m(), 5);
}

#[rstest]
fn new_uses_default_configuration(sample_loader: MemoryLoader) {
    let ranker = Ranker::new(sample_loader, PreserveOrder);
    let defaults = RankerConfig::default();
    assert_eq!(ranker.engine().unit(), defaults.unit);
    assert_eq!(ranker.engine().weights(), defaults.weights);
    assert_eq!(ranker.policy().top_n(), defaults.top_n);
    assert_eq!(ranker.policy().random_m(), defaults.random_m);
}

#[rstest]
fn validate_accepts_defaults() {
    let config = RankerConfig::default()
        .validate()
        .expect("defaults are valid");
    assert_eq!(config.top_n, 7);
    assert_eq!(config.random_m, 3);
    assert_eq!(config.unit, DistanceUnit::Kilometres);
}

#[rstest]
fn equal_offer_histories_trigger_the_fallback(bangalore: ReferencePoint) {
    // Identical totals collapse the engagement range, so nobody is low
    // confidence and the second group comes from the reliable ranking.
    let roster = vec![
        candidate_at("near", 12.98, 77.60, 60, 8, 2, 300.0),
        candidate_at("middle", 13.50, 78.00, 45, 5, 5, 900.0),
        candidate_at("far", 28.61, 77.21, 25, 2, 8, 2400.0),
    ];
    let config = RankerConfig {
        top_n: 1,
        random_m: 1,
        ..RankerConfig::default()
    };
    let ranker = Ranker::with_config(MemoryLoader::with_candidates(roster), PreserveOrder, config)
        .expect("configuration is valid");
    let ranked = ranker.rank(&bangalore, false).expect("ranking succeeds");
    let RankedList::Compact(results) = ranked else {
        panic!("expected compact output");
    };
    assert!(results.iter().all(|r| r.confidence.is_reliable()));
    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["near", "middle"]);
}

#[rstest]
fn sample_roster_splits_into_both_groups(sample_loader: MemoryLoader, bangalore: ReferencePoint) {
    let ranked = Ranker::new(sample_loader, PreserveOrder)
        .rank(&bangalore, false)
        .expect("ranking succeeds");
    let RankedList::Compact(results) = ranked else {
        panic!("expected compact output");
    };
    let [first, second, third] = results.as_slice() else {
        panic!("expected three results");
    };
    assert!(first.confidence.is_reliable());
    assert!(second.confidence.is_reliable());
    assert!(first.score >= second.score);
    // Fewest total offers normalises to zero engagement.
    assert_eq!(third.id, "90592106-a0d9-4329-8159-af7ce4ba45ad");
    assert!(!third.confidence.is_reliable());
}

#[rstest]
fn debug_output_exposes_breakdowns(sample_loader: MemoryLoader, bangalore: ReferencePoint) {
    let ranker = Ranker::new(sample_loader, PreserveOrder);
    let ranked = ranker.rank(&bangalore, true).expect("ranking succeeds");
    let RankedList::Detailed(results) = ranked else {
        panic!("expected detailed output");
    };
    assert_eq!(results.len(), 3);
    for result in &results {
        assert!(result.distance > 0.0);
        assert_eq!(
            result.total_offers,
            result.accepted_offers + result.canceled_offers
        );
        assert!((1.0..=10.0).contains(&result.score));
    }
}

#[rstest]
fn low_confidence_candidates_fill_the_second_group(bangalore: ReferencePoint) {
    let mut roster = sample_roster();
    roster.push(candidate_at("newcomer-1", 13.0, 77.6, 30, 0, 0, 100.0));
    roster.push(candidate_at("newcomer-2", 12.9, 77.5, 40, 1, 0, 100.0));
    let config = RankerConfig {
        top_n: 2,
        random_m: 1,
        ..RankerConfig::default()
    };
    let ranker = Ranker::with_config(
        MemoryLoader::with_candidates(roster),
        SeededShuffler::new(5),
        config,
    )
    .expect("configuration is valid");
    let ranked = ranker.rank(&bangalore, false).expect("ranking succeeds");
    let RankedList::Compact(results) = ranked else {
        panic!("expected compact output");
    };
    assert_eq!(results.len(), 3);
    let (primary, secondary) = results.split_at(2);
    assert!(primary.iter().all(|r| r.confidence.is_reliable()));
    assert!(secondary.iter().all(|r| !r.confidence.is_reliable()));
    assert!(secondary.iter().all(|r| r.id.starts_with("newcomer")));
}

#[rstest]
fn miles_shrink_reported_distances(sample_loader: MemoryLoader, bangalore: ReferencePoint) {
    let km = Ranker::new(sample_loader.clone(), PreserveOrder)
        .rank(&bangalore, true)
        .expect("kilometre ranking succeeds");
    let config = RankerConfig {
        unit: DistanceUnit::Miles,
        ..RankerConfig::default()
    };
    let mi = Ranker::with_config(sample_loader, PreserveOrder, config)
        .expect("configuration is valid")
        .rank(&bangalore, true)
        .expect("mile ranking succeeds");
    let (RankedList::Detailed(km), RankedList::Detailed(mi)) = (km, mi) else {
        panic!("expected detailed output");
    };
    for (in_km, in_mi) in km.iter().zip(&mi) {
        assert_eq!(in_km.id, in_mi.id);
        assert!(in_mi.distance < in_km.distance);
    }
}

#[rstest]
fn repeated_calls_are_independent(sample_loader: MemoryLoader, bangalore: ReferencePoint) {
    let ranker = Ranker::new(sample_loader, PreserveOrder);
    let first = ranker.rank(&bangalore, false).expect("first ranking");
    let second = ranker.rank(&bangalore, false).expect("second ranking");
    assert_eq!(first, second);
}
