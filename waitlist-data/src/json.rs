//! JSON-file backed [`DatasetLoader`].

use std::collections::HashSet;
use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::{debug, warn};
use thiserror::Error;
use waitlist_core::{Candidate, DatasetLoader, LoadError};

/// Location of the bundled mock roster, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "public/mocks/patients.json";

/// Errors raised while reading a JSON roster.
#[derive(Debug, Error)]
pub enum JsonDatasetError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset at {path}: {source}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
    /// The dataset file did not hold a JSON array of candidates.
    #[error("failed to parse dataset at {path}: {source}")]
    Parse {
        /// Path whose contents were malformed.
        path: Utf8PathBuf,
        /// Source error from JSON decoding.
        #[source]
        source: serde_json::Error,
    },
}

/// Load candidates from a JSON file.
///
/// The file must contain an array of objects with `id`, `name`, `location`
/// (`latitude`/`longitude` as strings), `age`, `acceptedOffers`,
/// `canceledOffers` and `averageReplyTime`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDatasetLoader {
    path: Utf8PathBuf,
}

impl JsonDatasetLoader {
    /// Create a loader reading from `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Read and decode the dataset.
    ///
    /// # Errors
    /// Returns [`JsonDatasetError::Open`] when the file cannot be opened and
    /// [`JsonDatasetError::Parse`] when its contents are not a candidate
    /// array.
    pub fn read(&self) -> Result<Vec<Candidate>, JsonDatasetError> {
        let file = fs_utf8::File::open_ambient(&self.path, ambient_authority()).map_err(
            |source| JsonDatasetError::Open {
                path: self.path.clone(),
                source,
            },
        )?;
        let candidates: Vec<Candidate> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| JsonDatasetError::Parse {
                path: self.path.clone(),
                source,
            })?;
        warn_on_duplicate_ids(&candidates);
        debug!("Read {} candidates from {}", candidates.len(), self.path);
        Ok(candidates)
    }
}

impl Default for JsonDatasetLoader {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}

impl DatasetLoader for JsonDatasetLoader {
    fn load(&self) -> Result<Vec<Candidate>, LoadError> {
        self.read()
            .map_err(|err| LoadError::new(self.path.as_str(), err))
    }
}

fn warn_on_duplicate_ids(candidates: &[Candidate]) {
    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if !seen.insert(candidate.id.as_str()) {
            warn!(
                "Duplicate candidate id {}; both entries are kept",
                candidate.id
            );
        }
    }
}
