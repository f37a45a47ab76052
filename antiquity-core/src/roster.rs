//! Registry of the places queried by the service and the figures attached to them.

use crate::classify::classify;
use crate::model::{Confidence, PlaceId, PlaceRecord, Settlement, YearRange};

/// Static figures for one known place.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    /// Identifier resolved through the place provider.
    pub id: PlaceId,
    /// Short label used in logs before the record is fetched.
    pub label: String,
    /// Population estimate attached to the place, 0 when unknown.
    pub estimated_population: u64,
    /// Years the place counts as a settlement. Provider years can only narrow it.
    pub active: YearRange,
    /// Reliability of the figures.
    pub confidence: Confidence,
    /// Where the figures come from.
    pub source: String,
}

impl RosterEntry {
    /// Create an entry with unknown population, medium confidence and the given interval.
    #[must_use]
    pub fn new<I: Into<PlaceId>, L: Into<String>>(id: I, label: L, active: YearRange) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            estimated_population: 0,
            active,
            confidence: Confidence::Medium,
            source: String::from("Pleiades"),
        }
    }

    /// Set the population estimate.
    #[must_use]
    pub fn with_population(mut self, estimated_population: u64) -> Self {
        self.estimated_population = estimated_population;
        self
    }

    /// Set the confidence label.
    #[must_use]
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set the source label.
    #[must_use]
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = source.into();
        self
    }

    /// Combine the fetched record with this entry's figures.
    ///
    /// The active interval is this entry's interval, narrowed to the provider's attested
    /// years when the two overlap. Returns `None` when the record has no coordinate to
    /// place it on a map.
    #[must_use]
    pub fn settle(&self, record: &PlaceRecord) -> Option<Settlement> {
        let coordinate = record.coordinate?;
        Some(Settlement {
            id: record.id.clone(),
            name: record.title.clone(),
            coordinate,
            population_type: classify(record),
            estimated_population: self.estimated_population,
            active: record
                .active
                .and_then(|attested| self.active.intersection(attested))
                .unwrap_or(self.active),
            confidence: self.confidence,
            source: self.source.clone(),
        })
    }
}

/// Ordered list of places resolved for every query.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Build a roster from the provided entries, keeping their order.
    #[must_use]
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// All entries in query order.
    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Look up the entry for a place.
    #[must_use]
    pub fn entry(&self, id: &PlaceId) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Roster {
    /// Major settlements of the Roman world, keyed by Pleiades identifiers.
    fn default() -> Self {
        let historical = "Historical records";
        let archaeological = "Archaeological evidence";

        Self::new(vec![
            RosterEntry::new("423025", "Rome", YearRange::new(-100, 200))
                .with_population(1_000_000)
                .with_confidence(Confidence::High)
                .with_source(historical),
            RosterEntry::new("520985", "Constantinople", YearRange::new(100, 400))
                .with_population(500_000)
                .with_confidence(Confidence::High)
                .with_source(historical),
            RosterEntry::new("727070", "Alexandria", YearRange::new(-50, 200))
                .with_population(300_000)
                .with_confidence(Confidence::High)
                .with_source(historical),
            RosterEntry::new("658457", "Antioch", YearRange::new(-50, 200))
                .with_population(250_000)
                .with_confidence(Confidence::High)
                .with_source(historical),
            RosterEntry::new("314921", "Carthage", YearRange::new(-50, 150))
                .with_population(200_000)
                .with_source(archaeological),
            RosterEntry::new("599612", "Ephesus", YearRange::new(-50, 200))
                .with_population(150_000)
                .with_confidence(Confidence::High)
                .with_source(historical),
            RosterEntry::new("570182", "Corinth", YearRange::new(-50, 150))
                .with_population(100_000)
                .with_source(archaeological),
            RosterEntry::new("579885", "Athens", YearRange::new(-50, 200))
                .with_population(80_000)
                .with_source(historical),
            RosterEntry::new("491741", "Thessalonica", YearRange::new(-50, 200))
                .with_population(70_000)
                .with_source(historical),
            RosterEntry::new("678106", "Damascus", YearRange::new(-50, 200))
                .with_population(60_000)
                .with_source(historical),
            RosterEntry::new("687928", "Jerusalem", YearRange::new(-50, 200))
                .with_population(80_000)
                .with_confidence(Confidence::High)
                .with_source(historical),
            RosterEntry::new("687840", "Bethlehem", YearRange::new(-50, 200))
                .with_population(5_000)
                .with_source(historical),
            RosterEntry::new("678330", "Nazareth", YearRange::new(-50, 200))
                .with_population(3_000)
                .with_source(historical),
            RosterEntry::new("678021", "Capernaum", YearRange::new(-50, 200))
                .with_population(2_000)
                .with_source(archaeological),
            RosterEntry::new("678424", "Tiberias", YearRange::new(20, 200))
                .with_population(15_000)
                .with_confidence(Confidence::High)
                .with_source(historical),
            RosterEntry::new("678418", "Sepphoris", YearRange::new(-50, 200))
                .with_population(12_000)
                .with_source(archaeological),
            RosterEntry::new("687917", "Jericho", YearRange::new(-50, 200))
                .with_population(8_000)
                .with_source(historical),
            RosterEntry::new("687885", "Hebron", YearRange::new(-50, 200))
                .with_population(6_000)
                .with_source(historical),
            RosterEntry::new("678377", "Safed", YearRange::new(-50, 200))
                .with_population(4_000)
                .with_confidence(Confidence::Low)
                .with_source(historical),
            RosterEntry::new("678180", "Galilee Region", YearRange::new(-50, 200))
                .with_population(50_000)
                .with_source("Historical estimates"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PopulationType;

    #[test]
    fn settle_narrows_to_provider_interval() {
        let entry = RosterEntry::new("1", "Rome", YearRange::new(-100, 200)).with_population(42);
        let record = PlaceRecord::new("1", "Roma")
            .with_description("Capital of the Roman empire")
            .with_coordinate(41.9, 12.5)
            .with_active(-753, 150);

        let settlement = entry.settle(&record);
        assert_eq!(
            settlement.as_ref().map(|found| found.active),
            Some(YearRange::new(-100, 150)),
            "shared years of both intervals"
        );
        assert_eq!(
            settlement.as_ref().map(|found| found.population_type),
            Some(PopulationType::Roman),
            "classified from record text"
        );
        assert_eq!(
            settlement.map(|found| (found.name, found.estimated_population)),
            Some(("Roma".to_owned(), 42)),
            "name from record, population from roster"
        );
    }

    #[test]
    fn wider_provider_interval_keeps_roster_interval() {
        let entry = RosterEntry::new("2", "Constantinople", YearRange::new(100, 400));
        let record = PlaceRecord::new("2", "Byzantion")
            .with_coordinate(41.0, 28.9)
            .with_active(-700, 2100);
        assert_eq!(
            entry.settle(&record).map(|found| found.active),
            Some(YearRange::new(100, 400)),
            "modern attestations do not extend the roster interval"
        );
    }

    #[test]
    fn disjoint_provider_interval_is_ignored() {
        let entry = RosterEntry::new("3", "Tiberias", YearRange::new(20, 200));
        let record = PlaceRecord::new("3", "Tiberias")
            .with_coordinate(32.8, 35.5)
            .with_active(600, 1900);
        assert_eq!(
            entry.settle(&record).map(|found| found.active),
            Some(YearRange::new(20, 200)),
            "roster interval used"
        );
    }

    #[test]
    fn settle_falls_back_to_roster_interval() {
        let entry = RosterEntry::new("1", "Rome", YearRange::new(-100, 200));
        let record = PlaceRecord::new("1", "Roma").with_coordinate(41.9, 12.5);
        assert_eq!(
            entry.settle(&record).map(|found| found.active),
            Some(YearRange::new(-100, 200)),
            "roster interval used"
        );
    }

    #[test]
    fn settle_requires_coordinate() {
        let entry = RosterEntry::new("1", "Rome", YearRange::new(-100, 200));
        assert!(
            entry.settle(&PlaceRecord::new("1", "Roma")).is_none(),
            "nothing to place on the map"
        );
    }

    #[test]
    fn default_roster_has_unique_ids() {
        let roster = Roster::default();
        assert!(!roster.is_empty(), "default roster is populated");
        for entry in roster.entries() {
            assert_eq!(
                roster.entry(&entry.id).map(|found| &found.label),
                Some(&entry.label),
                "{} resolves to itself",
                entry.id
            );
        }
    }

    #[test]
    fn default_roster_lists_jewish_settlements() {
        let roster = Roster::default();
        let labels: Vec<&str> = roster.entries().iter().map(|entry| entry.label.as_str()).collect();
        for label in [
            "Jerusalem",
            "Bethlehem",
            "Nazareth",
            "Capernaum",
            "Tiberias",
            "Sepphoris",
            "Jericho",
            "Hebron",
            "Safed",
            "Galilee Region",
        ] {
            assert!(labels.contains(&label), "{label} is in the default roster");
        }
        assert_eq!(roster.len(), 20, "every major settlement");

        let tiberias = roster.entries().iter().find(|entry| entry.label == "Tiberias");
        assert_eq!(
            tiberias.map(|entry| (entry.active, entry.estimated_population)),
            Some((YearRange::new(20, 200), 15_000)),
            "founded in 20 CE"
        );
        let safed = roster.entries().iter().find(|entry| entry.label == "Safed");
        assert_eq!(
            safed.map(|entry| entry.confidence),
            Some(Confidence::Low),
            "speculative figures"
        );
    }
}
