//! Core types and query pipeline for the antiquity settlement population explorer.

/// Per-group population totals, shares and regions.
pub mod aggregate;
/// Write-once cache in front of a place provider.
pub mod cache;
/// Keyword classification of place records.
pub mod classify;
/// Group labels and their population-type mapping.
pub mod groups;
/// Domain models and identifiers shared by all crates.
pub mod model;
/// Traits describing the place provider interface.
pub mod ports;
/// Year and interval predicates.
pub mod range;
/// Registry of known places and their static figures.
pub mod roster;
/// High-level query facade used by clients.
pub mod service;

pub use aggregate::*;
pub use cache::*;
pub use classify::*;
pub use groups::*;
pub use model::*;
pub use ports::*;
pub use range::*;
pub use roster::*;
pub use service::*;
