//! Traits describing place provider capabilities and their errors.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{PlaceId, PlaceRecord};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to place providers.
pub enum PortError {
    /// Network layer failed or the provider answered with an error status.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Requested place does not exist.
    #[error("Place not found")]
    PlaceNotFound,
    /// Provider knows the place but has no representative point for it.
    #[error("Place has no representative coordinate")]
    MissingCoordinate,
    /// Place identifier is invalid for the provider.
    #[error("Invalid place id")]
    InvalidPlaceId,
    /// Internal provider error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Source of place records, looked up by identifier.
pub trait PlaceProvider: Send + Sync {
    /// Human-readable name of the provider, used in log output.
    fn name(&self) -> &str;

    /// Fetch the record for a single place.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the request fails or the place is unknown.
    async fn place(&self, id: &PlaceId) -> Result<PlaceRecord, PortError>;
}
