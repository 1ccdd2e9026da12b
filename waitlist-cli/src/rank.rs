//! Rank command implementation for the waitlist CLI.

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waitlist_core::{DistanceUnit, ReferencePoint};
use waitlist_data::{DEFAULT_DATASET_PATH, JsonDatasetLoader};
use waitlist_scorer::ScoreWeights;
use waitlist_selector::{
    RankedList, Ranker, RankerConfig, SeededShuffler, Shuffler, ThreadRngShuffler,
};

use crate::{
    ARG_DATASET, ARG_DEBUG, ARG_LATITUDE, ARG_LONGITUDE, ARG_RANDOM, ARG_SEED, ARG_TOP, ARG_UNIT,
    ARG_WEIGHT_ACCEPTED, ARG_WEIGHT_AGE, ARG_WEIGHT_CANCELED, ARG_WEIGHT_DISTANCE,
    ARG_WEIGHT_REPLY, CliError, ENV_LATITUDE, ENV_LONGITUDE,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the candidate roster by proximity to a reference point \
                 and by engagement history. Reliable candidates are listed \
                 by score, followed by a random sample of candidates with \
                 little offer history. Values can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Rank candidates around a reference point"
)]
#[ortho_config(prefix = "WAITLIST")]
pub(crate) struct RankArgs {
    /// Latitude of the reference point in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the reference point in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Emit per-factor score breakdowns.
    #[arg(long = ARG_DEBUG, num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) debug: Option<bool>,
    /// Path to the JSON candidate roster.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Number of reliable candidates to return.
    #[arg(long = ARG_TOP, value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Number of low-confidence candidates to sample.
    #[arg(long = ARG_RANDOM, value_name = "count")]
    #[serde(default)]
    pub(crate) random: Option<usize>,
    /// Distance unit: "km" or "mi".
    #[arg(long = ARG_UNIT, value_name = "unit")]
    #[serde(default)]
    pub(crate) unit: Option<String>,
    /// Seed for a reproducible low-confidence sample.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Weight of the age factor.
    #[arg(long = ARG_WEIGHT_AGE, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_age: Option<f64>,
    /// Weight of the distance factor.
    #[arg(long = ARG_WEIGHT_DISTANCE, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_distance: Option<f64>,
    /// Weight of the accepted offers factor.
    #[arg(long = ARG_WEIGHT_ACCEPTED, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_accepted: Option<f64>,
    /// Weight of the cancelled offers factor.
    #[arg(long = ARG_WEIGHT_CANCELED, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_canceled: Option<f64>,
    /// Weight of the reply time factor.
    #[arg(long = ARG_WEIGHT_REPLY, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_reply: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Point candidates are ranked around.
    pub(crate) reference: ReferencePoint,
    /// Whether to emit detailed results.
    pub(crate) debug: bool,
    /// Path to the JSON roster.
    pub(crate) dataset: Utf8PathBuf,
    /// Seed for the low-confidence shuffle, if reproducibility is wanted.
    pub(crate) seed: Option<u64>,
    /// Quotas, weights and unit for the ranker.
    pub(crate) ranker: RankerConfig,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.dataset, ARG_DATASET)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_LONGITUDE,
        })?;
        let reference = ReferencePoint::new(latitude, longitude)?;

        let unit = args
            .unit
            .as_deref()
            .map(str::parse::<DistanceUnit>)
            .transpose()?
            .unwrap_or_default();

        let defaults = ScoreWeights::default();
        let weights = ScoreWeights {
            age: args.weight_age.unwrap_or(defaults.age),
            distance: args.weight_distance.unwrap_or(defaults.distance),
            accepted_offers: args.weight_accepted.unwrap_or(defaults.accepted_offers),
            canceled_offers: args.weight_canceled.unwrap_or(defaults.canceled_offers),
            reply_time: args.weight_reply.unwrap_or(defaults.reply_time),
        };

        let base = RankerConfig::default();
        let ranker = RankerConfig {
            top_n: args.top.unwrap_or(base.top_n),
            random_m: args.random.unwrap_or(base.random_m),
            weights,
            unit,
        }
        .validate()?;

        Ok(Self {
            reference,
            debug: args.debug.unwrap_or(false),
            dataset: args
                .dataset
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET_PATH)),
            seed: args.seed,
            ranker,
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let list = execute_rank(&config)?;
    write_ranked_list(writer, &list)
}

fn execute_rank(config: &RankConfig) -> Result<RankedList, CliError> {
    let loader = JsonDatasetLoader::new(config.dataset.clone());
    debug!(
        "Ranking {} around ({}, {})",
        config.dataset,
        config.reference.latitude(),
        config.reference.longitude()
    );
    match config.seed {
        Some(seed) => rank_with(loader, SeededShuffler::new(seed), config),
        None => rank_with(loader, ThreadRngShuffler, config),
    }
}

fn rank_with<S: Shuffler>(
    loader: JsonDatasetLoader,
    shuffler: S,
    config: &RankConfig,
) -> Result<RankedList, CliError> {
    let ranker = Ranker::with_config(loader, shuffler, config.ranker)?;
    Ok(ranker.rank(&config.reference, config.debug)?)
}

fn write_ranked_list(writer: &mut dyn Write, list: &RankedList) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(list).map_err(CliError::SerialiseRankedList)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRankOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteRankOutput)?;
    writer.flush().map_err(CliError::WriteRankOutput)
}

/// Return whether `path` exists and is a regular file.
fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("dataset path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
