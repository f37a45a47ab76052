use std::sync::Arc;

use antiquity_core::{
    model::{PlaceId, PlaceRecord},
    ports::{PlaceProvider, PortError},
    roster::Roster,
    service::SettlementService,
};
use async_trait::async_trait;

use crate::app::App;
use crate::config::QueryConfig;

/// Provider that knows no places.
struct NoPlaces;

#[async_trait]
impl PlaceProvider for NoPlaces {
    fn name(&self) -> &str {
        "none"
    }

    async fn place(&self, _id: &PlaceId) -> Result<PlaceRecord, PortError> {
        Err(PortError::PlaceNotFound)
    }
}

/// App with default query years and a service that resolves nothing.
pub(crate) fn app() -> App {
    let service = SettlementService::new(Arc::new(NoPlaces), Roster::default());
    App::new(Arc::new(service), QueryConfig::default())
}
