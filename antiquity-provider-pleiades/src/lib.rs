//! Place provider backed by the Pleiades gazetteer of ancient places.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use antiquity_core::{
    model::{Coordinate, PlaceId, PlaceRecord, YearRange},
    ports::{PlaceProvider, PortError},
};

/// Public Pleiades site; place JSON lives under `/places/{id}/json`.
pub const DEFAULT_BASE_URL: &str = "https://pleiades.stoa.org";

/// Response from /places/{id}/json
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceResponse {
    id: String,
    title: String,

    #[serde(default)]
    description: Option<String>,

    // [longitude, latitude]
    #[serde(default)]
    repr_point: Option<[f64; 2]>,

    #[serde(default)]
    place_types: Vec<String>,

    #[serde(default)]
    names: Vec<NameEntry>,

    #[serde(default)]
    locations: Vec<LocationEntry>,
    // connections, features, references etc. are not needed
}

/// Single entry of the `names` array
#[derive(Debug, Deserialize)]
struct NameEntry {
    #[serde(default)]
    romanized: Option<String>,
}

/// Single entry of the `locations` array, only the attested years matter
#[derive(Debug, Deserialize)]
struct LocationEntry {
    #[serde(default)]
    start: Option<i32>,
    #[serde(default)]
    end: Option<i32>,
}

/// Place lookups against the Pleiades JSON API.
pub struct PleiadesPlaceProvider {
    client: Client,
    base_url: String,
}

impl PleiadesPlaceProvider {
    /// Create a provider talking to the public Pleiades site.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Create a provider talking to a mirror at `base_url`.
    #[must_use]
    pub fn with_base_url<S: Into<String>>(client: Client, base_url: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }
}

#[async_trait]
impl PlaceProvider for PleiadesPlaceProvider {
    fn name(&self) -> &str {
        "Pleiades"
    }

    async fn place(&self, id: &PlaceId) -> Result<PlaceRecord, PortError> {
        if !is_valid_id(&id.0) {
            return Err(PortError::InvalidPlaceId);
        }

        let url = format!("{}/places/{}/json", self.base_url, id.0);
        tracing::debug!(%url, "fetching place");

        let resp = self.client.get(url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(PortError::PlaceNotFound);
        }

        let place = resp.error_for_status()?.json::<PlaceResponse>().await?;
        into_record(place)
    }
}

/// Pleiades ids are numeric path segments; reject anything that could alter the URL.
fn is_valid_id(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}

fn into_record(place: PlaceResponse) -> Result<PlaceRecord, PortError> {
    let [longitude, latitude] = place.repr_point.ok_or(PortError::MissingCoordinate)?;

    let names = place
        .names
        .into_iter()
        .filter_map(|name| name.romanized)
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .collect();

    Ok(PlaceRecord {
        id: PlaceId(place.id),
        title: place.title,
        description: place
            .description
            .filter(|description| !description.trim().is_empty()),
        names,
        coordinate: Some(Coordinate::new(latitude, longitude)),
        place_types: place.place_types,
        active: attested_years(&place.locations),
    })
}

/// Earliest start and latest end over all locations that carry years.
fn attested_years(locations: &[LocationEntry]) -> Option<YearRange> {
    let start = locations.iter().filter_map(|location| location.start).min();
    let end = locations.iter().filter_map(|location| location.end).max();

    match (start, end) {
        (Some(start), Some(end)) => Some(YearRange::new(start, end)),
        (Some(year), None) | (None, Some(year)) => Some(YearRange::new(year, year)),
        (None, None) => None,
    }
}
