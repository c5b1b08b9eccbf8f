//! Where arrival data comes from: the live API or the mock.

use crate::domain::{ArrivalRecord, StationName};

use super::client::SeptaClient;
use super::error::SeptaError;
use super::mock::MockSeptaClient;

/// Source of upcoming trains.
#[derive(Debug, Clone)]
pub enum ArrivalSource {
    /// The SEPTA hackathon API
    Live(SeptaClient),
    /// Canned data
    Mock(MockSeptaClient),
}

impl ArrivalSource {
    /// Fetch the next `count` trains from `from` to `to`.
    pub async fn next_to_arrive(
        &self,
        from: StationName,
        to: StationName,
        count: u8,
    ) -> Result<Vec<ArrivalRecord>, SeptaError> {
        match self {
            ArrivalSource::Live(client) => client.next_to_arrive(from, to, count).await,
            ArrivalSource::Mock(client) => client.next_to_arrive(from, to, count).await,
        }
    }

    /// Returns true when serving canned data.
    pub fn is_mock(&self) -> bool {
        matches!(self, ArrivalSource::Mock(_))
    }
}

impl From<SeptaClient> for ArrivalSource {
    fn from(client: SeptaClient) -> Self {
        ArrivalSource::Live(client)
    }
}

impl From<MockSeptaClient> for ArrivalSource {
    fn from(client: MockSeptaClient) -> Self {
        ArrivalSource::Mock(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::septa::SeptaConfig;
    use crate::stations::resolve;

    #[tokio::test]
    async fn dispatches_to_mock() {
        let source = ArrivalSource::from(MockSeptaClient::sample());
        assert!(source.is_mock());

        let trains = source
            .next_to_arrive(resolve("dev"), resolve("30"), 3)
            .await
            .unwrap();
        assert_eq!(trains.len(), 3);
    }

    #[test]
    fn live_is_not_mock() {
        let client = SeptaClient::new(SeptaConfig::new()).unwrap();
        assert!(!ArrivalSource::from(client).is_mock());
    }
}
