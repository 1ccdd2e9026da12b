//! Dataset loaders for candidate rosters.
//!
//! [`JsonDatasetLoader`] reads a JSON array of candidates from a UTF-8 path
//! on every call to [`DatasetLoader::load`], so each ranking request works on
//! its own copy of the roster.
//!
//! [`DatasetLoader::load`]: waitlist_core::DatasetLoader::load

#![forbid(unsafe_code)]

mod json;

pub use json::{DEFAULT_DATASET_PATH, JsonDatasetError, JsonDatasetLoader};
