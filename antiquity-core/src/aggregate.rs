//! Per-group population totals, shares and regions.

use std::collections::HashMap;

use crate::groups::group_label_for;
use crate::model::{Coordinate, GroupStatistic, Settlement};

/// Region label for a group without settlements.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Coarse region of a coordinate, by latitude band.
#[must_use]
pub fn region_for(coordinate: Coordinate) -> &'static str {
    let latitude = coordinate.latitude;
    if latitude > 40.0 {
        "Northern Europe"
    } else if latitude > 35.0 {
        "Mediterranean"
    } else if latitude > 30.0 {
        "Levant"
    } else {
        "North Africa"
    }
}

/// Build one statistic per requested group, in request order.
///
/// Percentages are relative to the population of all `settlements`, not only the
/// requested groups, so they need not add up to 100.
#[must_use]
pub fn aggregate<S: AsRef<str>>(
    settlements: &[Settlement],
    requested_groups: &[S],
) -> Vec<GroupStatistic> {
    let mut buckets: HashMap<&str, Vec<&Settlement>> = HashMap::new();
    for settlement in settlements {
        buckets
            .entry(group_label_for(settlement.population_type))
            .or_default()
            .push(settlement);
    }

    let total: u64 = settlements
        .iter()
        .map(|settlement| settlement.estimated_population)
        .sum();

    requested_groups
        .iter()
        .map(|group| {
            let group = group.as_ref();
            let members = buckets.get(group).map_or(&[][..], Vec::as_slice);
            let population = members
                .iter()
                .map(|settlement| settlement.estimated_population)
                .sum();

            GroupStatistic {
                group: group.to_owned(),
                population,
                percentage: share(population, total),
                region: dominant_region(members).to_owned(),
                growth: 0.0,
                settlements: members.iter().map(|&settlement| settlement.clone()).collect(),
            }
        })
        .collect()
}

#[expect(
    clippy::cast_precision_loss,
    reason = "population sums stay far below f64's exact integer range"
)]
fn share(population: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    population as f64 / total as f64 * 100.0
}

/// Most frequent region among `members`; the first region seen wins a tie.
fn dominant_region(members: &[&Settlement]) -> &'static str {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for settlement in members {
        let region = region_for(settlement.coordinate);
        match counts.iter_mut().find(|(seen, _)| *seen == region) {
            Some((_, count)) => *count += 1,
            None => counts.push((region, 1)),
        }
    }

    let mut best: Option<(&'static str, usize)> = None;
    for (region, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((region, count));
        }
    }
    best.map_or(UNKNOWN_REGION, |(region, _)| region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Confidence, PlaceId, PopulationType, YearRange};

    fn settlement(
        name: &str,
        population_type: PopulationType,
        population: u64,
        latitude: f64,
    ) -> Settlement {
        Settlement {
            id: PlaceId(name.to_lowercase()),
            name: name.to_owned(),
            coordinate: Coordinate::new(latitude, 20.0),
            population_type,
            estimated_population: population,
            active: YearRange::new(-50, 200),
            confidence: Confidence::Medium,
            source: "test".to_owned(),
        }
    }

    #[test]
    fn region_bands() {
        assert_eq!(region_for(Coordinate::new(41.9, 12.5)), "Northern Europe", "rome");
        assert_eq!(region_for(Coordinate::new(37.9, 23.7)), "Mediterranean", "athens");
        assert_eq!(region_for(Coordinate::new(31.8, 35.2)), "Levant", "jerusalem");
        assert_eq!(region_for(Coordinate::new(30.0, 31.2)), "North Africa", "band edge");
    }

    #[test]
    fn statistics_follow_request_order_and_include_empty_groups() {
        let settlements = vec![
            settlement("Rome", PopulationType::Roman, 300, 41.9),
            settlement("Jerusalem", PopulationType::Jewish, 100, 31.8),
        ];
        let stats = aggregate(&settlements, &["Jewish", "Byzantine", "Ancient Roman"]);

        let groups: Vec<&str> = stats.iter().map(|stat| stat.group.as_str()).collect();
        assert_eq!(groups, ["Jewish", "Byzantine", "Ancient Roman"], "request order kept");

        let [jewish, byzantine, roman] = stats.as_slice() else {
            panic!("expected three statistics");
        };
        assert_eq!(jewish.population, 100, "jewish sum");
        assert!((jewish.percentage - 25.0).abs() < 1e-9, "jewish share");
        assert_eq!(jewish.region, "Levant", "jewish region");

        assert_eq!(byzantine.population, 0, "byzantine has no bucket");
        assert!(byzantine.percentage.abs() < f64::EPSILON, "empty share");
        assert_eq!(byzantine.region, UNKNOWN_REGION, "empty region");
        assert!(byzantine.settlements.is_empty(), "no members");

        assert_eq!(roman.population, 300, "roman sum");
        assert!((roman.percentage - 75.0).abs() < 1e-9, "roman share");
        assert!(roman.growth.abs() < f64::EPSILON, "growth is always zero");
    }

    #[test]
    fn total_counts_unrequested_settlements() {
        let settlements = vec![
            settlement("Rome", PopulationType::Roman, 100, 41.9),
            settlement("Antioch", PopulationType::Mixed, 300, 36.2),
        ];
        let stats = aggregate(&settlements, &["Ancient Roman"]);
        assert!(
            stats
                .first()
                .is_some_and(|stat| (stat.percentage - 25.0).abs() < 1e-9),
            "denominator includes the mixed settlement"
        );
    }

    #[test]
    fn zero_total_population_gives_zero_percentage() {
        let settlements = vec![settlement("Rome", PopulationType::Roman, 0, 41.9)];
        let stats = aggregate(&settlements, &["Ancient Roman"]);
        assert!(
            stats
                .first()
                .is_some_and(|stat| stat.percentage.abs() < f64::EPSILON),
            "no division by zero"
        );
    }

    #[test]
    fn region_tie_goes_to_first_seen() {
        let settlements = vec![
            settlement("Sepphoris", PopulationType::Jewish, 10, 32.7),
            settlement("Sardis", PopulationType::Jewish, 10, 38.4),
            settlement("Jericho", PopulationType::Jewish, 10, 31.8),
            settlement("Smyrna", PopulationType::Jewish, 10, 38.4),
        ];
        let stats = aggregate(&settlements, &["Jewish"]);
        assert_eq!(
            stats.first().map(|stat| stat.region.as_str()),
            Some("Levant"),
            "two-two tie resolved by first occurrence"
        );

        let majority = aggregate(&settlements[1..], &["Jewish"]);
        assert_eq!(
            majority.first().map(|stat| stat.region.as_str()),
            Some("Mediterranean"),
            "plurality wins"
        );
    }
}
