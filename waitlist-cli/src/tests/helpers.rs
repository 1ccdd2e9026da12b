//! Test helpers for writing rosters and building `rank` arguments.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const ROSTER: &str = r#"[
  {
    "id": "near",
    "name": "Asha Rao",
    "location": { "latitude": "12.9352", "longitude": "77.6245" },
    "age": 64,
    "acceptedOffers": 40,
    "canceledOffers": 2,
    "averageReplyTime": 300
  },
  {
    "id": "far",
    "name": "Dev Malhotra",
    "location": { "latitude": "28.6139", "longitude": "77.2090" },
    "age": 29,
    "acceptedOffers": 12,
    "canceledOffers": 30,
    "averageReplyTime": 3000
  },
  {
    "id": "middle",
    "name": "Meera Iyer",
    "location": { "latitude": "13.0827", "longitude": "80.2707" },
    "age": 47,
    "acceptedOffers": 25,
    "canceledOffers": 10,
    "averageReplyTime": 1200
  },
  {
    "id": "newcomer",
    "name": "Kiran Shah",
    "location": { "latitude": "12.9716", "longitude": "77.5946" },
    "age": 38,
    "acceptedOffers": 0,
    "canceledOffers": 0,
    "averageReplyTime": 600
  }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write file");
}

/// Temporary workspace holding a roster file.
pub(super) struct RosterDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl RosterDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn with_roster(contents: &str) -> Self {
        let dir = Self::new();
        write_utf8(&dir.roster(), contents.as_bytes());
        dir
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn roster(&self) -> Utf8PathBuf {
        self.root.join("patients.json")
    }
}

/// Arguments ranking around Bangalore with only the roster path set.
pub(super) fn bangalore_args(dataset: Utf8PathBuf) -> RankArgs {
    RankArgs {
        latitude: Some(12.9716),
        longitude: Some(77.5946),
        dataset: Some(dataset),
        ..RankArgs::default()
    }
}
