//! High-level query facade combining roster, provider cache and aggregation.

use std::sync::Arc;

use crate::aggregate::aggregate;
use crate::cache::PlaceCache;
use crate::groups::{GROUP_CATALOGUE, types_for_groups};
use crate::model::{GroupStatistic, PopulationType, Settlement};
use crate::ports::PlaceProvider;
use crate::range::{intervals_overlap, year_in_range};
use crate::roster::Roster;

/// Public entry point for settlement and population queries.
///
/// Queries never fail: places the provider cannot deliver are logged and left out.
pub struct SettlementService {
    cache: PlaceCache,
    roster: Roster,
}

impl SettlementService {
    /// Create a new service resolving `roster` through `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn PlaceProvider>, roster: Roster) -> Self {
        Self {
            cache: PlaceCache::new(provider),
            roster,
        }
    }

    /// Places resolved by every query.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Group labels a caller can select.
    #[must_use]
    pub fn group_catalogue(&self) -> &'static [&'static str] {
        GROUP_CATALOGUE
    }

    /// Settlements active at some point in `start_year..=end_year` whose type is in `types`.
    ///
    /// An empty `types` slice selects every type.
    pub async fn find_settlements(
        &self,
        start_year: i32,
        end_year: i32,
        types: &[PopulationType],
    ) -> Vec<Settlement> {
        let mut settlements = Vec::new();

        for entry in self.roster.entries() {
            let Some(record) = self.cache.get_or_fetch(&entry.id).await else {
                continue;
            };
            let Some(settlement) = entry.settle(&record) else {
                tracing::debug!(place = %entry.id, label = %entry.label, "place has no coordinate, skipped");
                continue;
            };

            let in_range = intervals_overlap(settlement.active, start_year, end_year);
            let wanted = types.is_empty() || types.contains(&settlement.population_type);
            if in_range && wanted {
                settlements.push(settlement);
            }
        }

        tracing::debug!(
            start_year,
            end_year,
            roster = self.roster.len(),
            found = settlements.len(),
            "settlement search finished"
        );
        settlements
    }

    /// Population statistics for `selected_groups` among settlements active in `current_year`.
    ///
    /// Returns one entry per selected group, in order. No groups yield no statistics.
    pub async fn compute_statistics<S: AsRef<str> + Sync>(
        &self,
        selected_groups: &[S],
        start_year: i32,
        end_year: i32,
        current_year: i32,
    ) -> Vec<GroupStatistic> {
        if selected_groups.is_empty() {
            return Vec::new();
        }

        let current = self
            .settlements_for_map(selected_groups, start_year, end_year, Some(current_year))
            .await;
        aggregate(&current, selected_groups)
    }

    /// Settlements to draw as map markers for `selected_groups`.
    ///
    /// When `current_year` is given only settlements active in that year are kept.
    pub async fn settlements_for_map<S: AsRef<str> + Sync>(
        &self,
        selected_groups: &[S],
        start_year: i32,
        end_year: i32,
        current_year: Option<i32>,
    ) -> Vec<Settlement> {
        if selected_groups.is_empty() {
            return Vec::new();
        }

        let types = types_for_groups(selected_groups);
        let mut settlements = self.find_settlements(start_year, end_year, &types).await;
        if let Some(year) = current_year {
            settlements
                .retain(|settlement| year_in_range(year, settlement.active.start, settlement.active.end));
        }
        settlements
    }
}
