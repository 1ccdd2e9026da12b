//! Test-only loaders and roster builders used by unit and behaviour tests.

use crate::{Candidate, CandidateLocation, DatasetLoader, LoadError};

/// In-memory `DatasetLoader` returning clones of a fixed roster.
#[derive(Default, Debug, Clone)]
pub struct MemoryLoader {
    candidates: Vec<Candidate>,
}

impl MemoryLoader {
    /// Create a loader from a collection of candidates.
    pub fn with_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Candidate>,
    {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }
}

impl DatasetLoader for MemoryLoader {
    fn load(&self) -> Result<Vec<Candidate>, LoadError> {
        Ok(self.candidates.clone())
    }
}

/// `DatasetLoader` that always fails with the configured message.
#[derive(Debug, Clone)]
pub struct FailingLoader {
    message: String,
}

impl FailingLoader {
    /// Create a loader that reports `message` as the underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl DatasetLoader for FailingLoader {
    fn load(&self) -> Result<Vec<Candidate>, LoadError> {
        Err(LoadError::new("failing loader", self.message.clone()))
    }
}

/// Build a candidate located at `(latitude, longitude)`.
#[must_use]
pub fn candidate_at(
    id: &str,
    latitude: f64,
    longitude: f64,
    age: u32,
    accepted_offers: u32,
    canceled_offers: u32,
    average_reply_time: f64,
) -> Candidate {
    Candidate {
        id: id.to_owned(),
        name: format!("Candidate {id}"),
        location: CandidateLocation {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        },
        age,
        accepted_offers,
        canceled_offers,
        average_reply_time,
    }
}

/// Three candidates with well-known field ranges.
///
/// Ages span `21..=67`, accepted offers `49..=95`, cancelled offers
/// `24..=96`, total offers `93..=191` and reply times `1908..=3452`.
#[must_use]
pub fn sample_roster() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "541d25c9-9500-4265-8967-240f44ecf723".to_owned(),
            name: "Samir Pacocha".to_owned(),
            location: CandidateLocation {
                latitude: "46.7110".to_owned(),
                longitude: "-63.1150".to_owned(),
            },
            age: 46,
            accepted_offers: 49,
            canceled_offers: 92,
            average_reply_time: 2598.0,
        },
        Candidate {
            id: "41fd45bc-b166-444a-a69e-9d527b4aee48".to_owned(),
            name: "Bernard Mosciski".to_owned(),
            location: CandidateLocation {
                latitude: "-81.0341".to_owned(),
                longitude: "144.9963".to_owned(),
            },
            age: 21,
            accepted_offers: 95,
            canceled_offers: 96,
            average_reply_time: 1908.0,
        },
        Candidate {
            id: "90592106-a0d9-4329-8159-af7ce4ba45ad".to_owned(),
            name: "Theo Effertz".to_owned(),
            location: CandidateLocation {
                latitude: "-35.5336".to_owned(),
                longitude: "-25.2795".to_owned(),
            },
            age: 67,
            accepted_offers: 69,
            canceled_offers: 24,
            average_reply_time: 3452.0,
        },
    ]
}
