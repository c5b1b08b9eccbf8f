//! Mock SEPTA client for running without network access.
//!
//! Serves a canned set of trains (or a canned failure) for every station
//! pair. A client built with [`MockSeptaClient::recording`] also keeps the
//! lookups it was asked for.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{ArrivalRecord, Delay, StationName};

use super::error::SeptaError;

/// A lookup the mock has served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockRequest {
    pub from: StationName,
    pub to: StationName,
    pub count: u8,
}

#[derive(Debug, Clone)]
enum MockOutcome {
    Trains(Vec<ArrivalRecord>),
    Fail(String),
}

/// Mock SEPTA client with canned responses.
#[derive(Debug, Clone)]
pub struct MockSeptaClient {
    outcome: MockOutcome,
    requests: Option<Arc<RwLock<Vec<MockRequest>>>>,
}

impl MockSeptaClient {
    /// Serve the given trains for every lookup.
    pub fn with_trains(trains: Vec<ArrivalRecord>) -> Self {
        Self {
            outcome: MockOutcome::Trains(trains),
            requests: None,
        }
    }

    /// Fail every lookup with a provider error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Fail(message.into()),
            requests: None,
        }
    }

    /// A Paoli/Thorndale sample: one delayed train and two on time.
    pub fn sample() -> Self {
        let train = |number: &str, departs: &str, arrives: &str, delay: &str| ArrivalRecord {
            train_number: number.to_string(),
            departure_time: departs.to_string(),
            arrival_time: arrives.to_string(),
            line: "Paoli/Thorndale".to_string(),
            delay: Delay::from_provider(delay),
            is_direct: true,
        };

        Self::with_trains(vec![
            train("562", " 1:22PM", " 1:45PM", "3 mins"),
            train("564", " 2:04PM", " 2:27PM", "On time"),
            train("566", " 2:23PM", " 2:46PM", "On time"),
        ])
    }

    /// Keep every lookup for [`MockSeptaClient::requests`].
    ///
    /// The log is unbounded; meant for tests.
    pub fn recording(mut self) -> Self {
        self.requests = Some(Arc::new(RwLock::new(Vec::new())));
        self
    }

    /// Mimics `SeptaClient::next_to_arrive`. Returns at most `count` trains.
    pub async fn next_to_arrive(
        &self,
        from: StationName,
        to: StationName,
        count: u8,
    ) -> Result<Vec<ArrivalRecord>, SeptaError> {
        if let Some(requests) = &self.requests {
            requests.write().await.push(MockRequest { from, to, count });
        }

        match &self.outcome {
            MockOutcome::Trains(trains) => {
                Ok(trains.iter().take(usize::from(count)).cloned().collect())
            }
            MockOutcome::Fail(message) => Err(SeptaError::Provider(message.clone())),
        }
    }

    /// Lookups served so far, oldest first. Empty unless recording.
    pub async fn requests(&self) -> Vec<MockRequest> {
        match &self.requests {
            Some(requests) => requests.read().await.clone(),
            None => Vec::new(),
        }
    }
}
