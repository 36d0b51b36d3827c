//! Core data model for bintrack: records, bins, and the shared error type
//! used by the aggregation crates.
pub mod errors;
pub mod models;

pub use errors::BinTrackError;
pub use models::{BinStat, ScoredRegion, Unit};
