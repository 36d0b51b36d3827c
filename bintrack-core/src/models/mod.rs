pub mod bin_stat;
pub mod scored_region;
pub mod unit;

// re-export for cleaner imports
pub use self::bin_stat::BinStat;
pub use self::scored_region::ScoredRegion;
pub use self::unit::Unit;
