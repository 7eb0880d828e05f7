// Repository trait for the zone status API
use crate::domain::zone::{AllReport, Zone, ZoneReport};
use async_trait::async_trait;
use thiserror::Error;

/// Ways a status fetch can fail. The dashboard collapses every variant to
/// the same offline render; the distinction exists only for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("status endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Malformed(#[source] reqwest::Error),
}

#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetch the report for a single zone.
    async fn fetch_zone(&self, zone: Zone) -> Result<ZoneReport, FetchError>;

    /// Fetch both zones in one combined request.
    async fn fetch_all(&self) -> Result<AllReport, FetchError>;
}
