//! Year and interval predicates used to filter settlements.

use crate::model::YearRange;

/// Whether `year` lies within `start..=end`.
#[must_use]
pub fn year_in_range(year: i32, start: i32, end: i32) -> bool {
    start <= year && year <= end
}

/// Whether a settlement's active interval loosely overlaps the queried years.
///
/// True when either end of `active` falls inside the query, or `active` spans the
/// whole query. A settlement spanning a broad era therefore matches any narrower
/// query inside it.
#[must_use]
pub fn intervals_overlap(active: YearRange, query_start: i32, query_end: i32) -> bool {
    year_in_range(active.start, query_start, query_end)
        || year_in_range(active.end, query_start, query_end)
        || (active.start <= query_start && active.end >= query_end)
}
