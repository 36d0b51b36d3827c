//! Bin-space aggregation of genomic locus-score tracks.
//!
//! Track viewers that work in "bin" coordinates (each bin covering a
//! variable genomic length) need irregular locus-score records folded into a
//! fixed-resolution sequence of per-bin values. This crate provides the
//! adapter that does that folding, caching the most recently computed bin
//! window so that panning and zooming over overlapping ranges does not
//! recompute it.
//!
//! ## Quick Start
//!
//! ```rust
//! use bintrack_agg::{BinDataAdapter, FixedGridAxis, StaticScoreProvider};
//! use bintrack_core::{ScoredRegion, Unit};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut provider = StaticScoreProvider::new();
//! provider.add_records(
//!     "chr1",
//!     vec![
//!         ScoredRegion::new(100, 250, 2.0),
//!         ScoredRegion::new(300, 420, 4.0),
//!     ],
//! );
//!
//! let grid = FixedGridAxis::new(100, 5);
//! let mut adapter = BinDataAdapter::new(provider);
//!
//! // bins 1..=4 at 100 bp resolution
//! let interval = adapter.get_bins(&grid, Unit::Bp, "chr1", 1, 4)?;
//! let bin = interval.get(1).expect("bin 1 has data");
//! assert_eq!(bin.value(), 2.0);
//! # Ok(())
//! # }
//! ```
pub mod adapter;
pub mod cache;
pub mod grid;
pub mod provider;

// re-exports
pub use adapter::BinDataAdapter;
pub use cache::LoadedInterval;
pub use grid::{FixedGridAxis, GridAxis};
pub use provider::{ScoreProvider, StaticScoreProvider};
