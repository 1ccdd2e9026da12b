//! Error types emitted by the waitlist CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use waitlist_core::{DistanceError, ReferencePointError};
use waitlist_selector::{RankError, RankErrorKind};

/// Errors emitted by the waitlist CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The reference point lies outside valid coordinate bounds.
    #[error("invalid reference point: {0}")]
    InvalidReferencePoint(#[from] ReferencePointError),
    /// The distance unit was not recognised.
    #[error(transparent)]
    InvalidUnit(#[from] DistanceError),
    /// The dataset path does not exist.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The dataset path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The dataset path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Building the ranker or ranking the roster failed.
    #[error(transparent)]
    Rank(#[from] RankError),
    /// Serialising the ranked list to JSON failed.
    #[error("failed to serialise ranked list: {0}")]
    SerialiseRankedList(#[source] serde_json::Error),
    /// Writing the ranked list to stdout failed.
    #[error("failed to write ranked list: {0}")]
    WriteRankOutput(#[source] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Input problems the caller can fix map to `2`; failures while loading
    /// or ranking map to `1`. Ranking errors are classified by
    /// [`RankError::kind`] rather than by message.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ArgumentParsing(_)
            | Self::Configuration(_)
            | Self::MissingArgument { .. }
            | Self::InvalidReferencePoint(_)
            | Self::InvalidUnit(_)
            | Self::MissingSourceFile { .. }
            | Self::SourcePathNotFile { .. } => 2,
            Self::Rank(err) if matches!(err.kind(), RankErrorKind::Configuration) => 2,
            Self::InspectSourcePath { .. }
            | Self::Rank(_)
            | Self::SerialiseRankedList(_)
            | Self::WriteRankOutput(_) => 1,
        }
    }
}
