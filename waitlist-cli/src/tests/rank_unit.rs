//! Focused unit tests covering rank CLI configuration and output.

use super::helpers::{ROSTER, RosterDir, bangalore_args};
use super::*;
use camino::Utf8PathBuf;
use rstest::rstest;
use waitlist_core::DistanceUnit;
use waitlist_data::DEFAULT_DATASET_PATH;
use waitlist_selector::RankErrorKind;

#[rstest]
#[case::latitude(None, Some(77.5), ARG_LATITUDE, ENV_LATITUDE)]
#[case::longitude(Some(12.9), None, ARG_LONGITUDE, ENV_LONGITUDE)]
fn converting_without_coordinates_errors(
    #[case] latitude: Option<f64>,
    #[case] longitude: Option<f64>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let args = RankArgs {
        latitude,
        longitude,
        ..RankArgs::default()
    };
    let err = RankConfig::try_from(args).expect_err("missing coordinate should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn rank_config_applies_defaults() {
    let args = RankArgs {
        latitude: Some(12.9716),
        longitude: Some(77.5946),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.dataset, Utf8PathBuf::from(DEFAULT_DATASET_PATH));
    assert!(!config.debug);
    assert_eq!(config.seed, None);
    assert_eq!(config.ranker, waitlist_selector::RankerConfig::default());
}

#[rstest]
fn rank_config_applies_overrides() {
    let args = RankArgs {
        latitude: Some(-33.8688),
        longitude: Some(151.2093),
        debug: Some(true),
        top: Some(4),
        random: Some(0),
        unit: Some("mi".to_owned()),
        seed: Some(9),
        weight_age: Some(0.5),
        weight_reply: Some(0.0),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert!(config.debug);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.ranker.top_n, 4);
    assert_eq!(config.ranker.random_m, 0);
    assert_eq!(config.ranker.unit, DistanceUnit::Miles);
    assert_eq!(config.ranker.weights.age, 0.5);
    assert_eq!(config.ranker.weights.reply_time, 0.0);
    assert_eq!(config.ranker.weights.accepted_offers, 0.3);
}

#[rstest]
fn unknown_unit_is_rejected() {
    let args = RankArgs {
        latitude: Some(12.9716),
        longitude: Some(77.5946),
        unit: Some("leagues".to_owned()),
        ..RankArgs::default()
    };
    let err = RankConfig::try_from(args).expect_err("unknown unit should error");
    assert!(matches!(err, CliError::InvalidUnit(_)));
    assert_eq!(err.exit_code(), 2);
}

#[rstest]
#[case(91.0, 0.0)]
#[case(0.0, -180.5)]
fn out_of_range_reference_is_rejected(#[case] latitude: f64, #[case] longitude: f64) {
    let args = RankArgs {
        latitude: Some(latitude),
        longitude: Some(longitude),
        ..RankArgs::default()
    };
    let err = RankConfig::try_from(args).expect_err("out of range should error");
    assert!(matches!(err, CliError::InvalidReferencePoint(_)));
}

#[rstest]
fn negative_weights_are_rejected() {
    let args = RankArgs {
        latitude: Some(12.9716),
        longitude: Some(77.5946),
        weight_distance: Some(-0.2),
        ..RankArgs::default()
    };
    let err = RankConfig::try_from(args).expect_err("negative weight should error");
    match &err {
        CliError::Rank(rank) => assert_eq!(rank.kind(), RankErrorKind::Configuration),
        other => panic!("expected Rank, found {other:?}"),
    }
    assert_eq!(err.exit_code(), 2);
}

#[rstest]
fn validate_sources_reports_missing_dataset() {
    let dir = RosterDir::new();
    let config = RankConfig::try_from(bangalore_args(dir.roster())).expect("config builds");
    let err = config.validate_sources().expect_err("missing roster");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_DATASET),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let dir = RosterDir::new();
    let config =
        RankConfig::try_from(bangalore_args(dir.root().to_path_buf())).expect("config builds");
    let err = config.validate_sources().expect_err("directory is not a roster");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_DATASET),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn run_rank_writes_compact_json() {
    let dir = RosterDir::with_roster(ROSTER);
    let args = RankArgs {
        top: Some(2),
        random: Some(1),
        seed: Some(1),
        ..bangalore_args(dir.roster())
    };
    let mut stdout = Vec::new();
    run_rank_with(args, &mut stdout).expect("rank should succeed");

    let value: serde_json::Value = serde_json::from_slice(&stdout).expect("stdout is JSON");
    let results = value.as_array().expect("JSON array");
    let ids: Vec<&str> = results
        .iter()
        .filter_map(|entry| entry["id"].as_str())
        .collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids.first(), Some(&"near"));
    assert_eq!(ids.last(), Some(&"newcomer"));
    assert!(results.iter().all(|entry| entry.get("breakdown").is_none()));
}

#[rstest]
fn run_rank_writes_breakdowns_in_debug_mode() {
    let dir = RosterDir::with_roster(ROSTER);
    let args = RankArgs {
        debug: Some(true),
        ..bangalore_args(dir.roster())
    };
    let mut stdout = Vec::new();
    run_rank_with(args, &mut stdout).expect("rank should succeed");

    let value: serde_json::Value = serde_json::from_slice(&stdout).expect("stdout is JSON");
    let results = value.as_array().expect("JSON array");
    assert_eq!(results.len(), 4);
    for entry in results {
        assert!(entry["breakdown"]["rawTotal"].is_number());
        assert!(entry["engagementScore"].is_number());
    }
}

#[rstest]
fn run_rank_surfaces_empty_rosters() {
    let dir = RosterDir::with_roster("[]");
    let mut stdout = Vec::new();
    let err = run_rank_with(bangalore_args(dir.roster()), &mut stdout)
        .expect_err("empty roster should fail");
    match &err {
        CliError::Rank(rank) => assert_eq!(rank.kind(), RankErrorKind::EmptyDataset),
        other => panic!("expected Rank, found {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
    assert!(stdout.is_empty());
}

#[rstest]
fn run_rank_surfaces_malformed_rosters() {
    let dir = RosterDir::with_roster("{ not json");
    let roster = dir.roster();
    let mut stdout = Vec::new();
    let err = run_rank_with(bangalore_args(roster.clone()), &mut stdout)
        .expect_err("malformed roster should fail");
    let message = err.to_string();
    assert!(message.contains(roster.as_str()), "message was {message}");
    assert!(message.contains("failed to parse dataset"), "message was {message}");
    assert!(message.contains("line 1"), "message was {message}");
    match err {
        CliError::Rank(rank) => assert_eq!(rank.kind(), RankErrorKind::Load),
        other => panic!("expected Rank, found {other:?}"),
    }
}

#[rstest]
fn negative_coordinates_parse_from_the_command_line() {
    let cli = Cli::try_parse_from([
        "waitlist",
        "rank",
        "--latitude",
        "-33.8688",
        "--longitude",
        "-70.6693",
        "--debug",
    ])
    .expect("arguments parse");
    let Command::Rank(args) = cli.command;
    assert_eq!(args.latitude, Some(-33.8688));
    assert_eq!(args.longitude, Some(-70.6693));
    assert_eq!(args.debug, Some(true));
}
