//! Domain data structures for places, settlements, and population statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Opaque identifier of a place known to a provider.
pub struct PlaceId(pub String);

impl fmt::Display for PlaceId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(raw: &str) -> Self {
        PlaceId(raw.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Representative point of a place.
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Inclusive start/end years. Negative years are BCE.
///
/// `start <= end` is expected but not enforced.
pub struct YearRange {
    /// First active year (inclusive).
    pub start: i32,
    /// Last active year (inclusive).
    pub end: i32,
}

impl YearRange {
    /// Construct a new year range.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Years covered by both ranges, `None` when they are disjoint.
    #[must_use]
    pub fn intersection(self, other: YearRange) -> Option<YearRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(YearRange { start, end })
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} – {}",
            EraYear(self.start),
            EraYear(self.end)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Display adapter rendering a signed year as `50 BCE` or `100 CE`.
pub struct EraYear(pub i32);

impl fmt::Display for EraYear {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(formatter, "{} BCE", self.0.unsigned_abs())
        } else {
            write!(formatter, "{} CE", self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Place record as returned by a provider.
pub struct PlaceRecord {
    /// Provider identifier.
    pub id: PlaceId,
    /// Primary title of the place.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Alternate names (romanized).
    pub names: Vec<String>,
    /// Representative point, if the provider knows one.
    pub coordinate: Option<Coordinate>,
    /// Provider place-type tags such as `settlement` or `city`.
    pub place_types: Vec<String>,
    /// Active interval reported by the provider.
    pub active: Option<YearRange>,
}

impl PlaceRecord {
    /// Create a record with only a title; remaining fields empty.
    #[must_use]
    pub fn new<I: Into<PlaceId>, T: Into<String>>(id: I, title: T) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            names: Vec::new(),
            coordinate: None,
            place_types: Vec::new(),
            active: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append an alternate name.
    #[must_use]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.names.push(name.into());
        self
    }

    /// Set the representative point.
    #[must_use]
    pub fn with_coordinate(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinate = Some(Coordinate::new(latitude, longitude));
        self
    }

    /// Append a place-type tag.
    #[must_use]
    pub fn with_place_type<S: Into<String>>(mut self, place_type: S) -> Self {
        self.place_types.push(place_type.into());
        self
    }

    /// Set the active interval.
    #[must_use]
    pub fn with_active(mut self, start: i32, end: i32) -> Self {
        self.active = Some(YearRange::new(start, end));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Population category assigned by the classifier.
pub enum PopulationType {
    /// Roman settlement.
    Roman,
    /// Jewish settlement.
    Jewish,
    /// Settlement with a mixed population.
    Mixed,
    /// Anything else.
    Other,
}

impl fmt::Display for PopulationType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PopulationType::Roman => "Roman",
            PopulationType::Jewish => "Jewish",
            PopulationType::Mixed => "Mixed",
            PopulationType::Other => "Other",
        };
        formatter.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// How reliable a settlement's figures are.
pub enum Confidence {
    /// Well attested.
    High,
    /// Partially attested.
    Medium,
    /// Speculative.
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        };
        formatter.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A classified, dated and located population record.
pub struct Settlement {
    /// Identifier of the underlying place.
    pub id: PlaceId,
    /// Display name.
    pub name: String,
    /// Representative point.
    pub coordinate: Coordinate,
    /// Classifier output.
    pub population_type: PopulationType,
    /// Estimated head count, 0 when unknown.
    pub estimated_population: u64,
    /// Years during which the settlement is considered active.
    pub active: YearRange,
    /// Reliability of the figures.
    pub confidence: Confidence,
    /// Where the figures come from.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Aggregated population figures for one requested group.
pub struct GroupStatistic {
    /// Requested group label.
    pub group: String,
    /// Sum of the group's settlement populations.
    pub population: u64,
    /// Share of the query's total population, in `[0, 100]`.
    pub percentage: f64,
    /// Most common coarse region among the group's settlements.
    pub region: String,
    /// Population growth. Always 0, there is no temporal delta data.
    pub growth: f64,
    /// Settlements contributing to the group.
    pub settlements: Vec<Settlement>,
}
