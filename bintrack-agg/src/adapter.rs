use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;

use bintrack_core::{BinStat, BinTrackError, Unit};

use crate::cache::LoadedInterval;
use crate::grid::GridAxis;
use crate::provider::ScoreProvider;

/// Adapter between a locus-score source and a bin-coordinate track view.
///
/// Holds a single cache slot: the most recently materialized
/// [`LoadedInterval`]. A contained query returns that entry untouched; any
/// other query recomputes and replaces it. The slot is read-then-replaced
/// with no internal synchronization, so one adapter instance serves one
/// view context at a time; returned entries are `Arc` snapshots and stay
/// valid across a replacement.
pub struct BinDataAdapter<P> {
    provider: P,
    loaded: Option<Arc<LoadedInterval>>,
}

impl<P: ScoreProvider> BinDataAdapter<P> {
    pub fn new(provider: P) -> Self {
        BinDataAdapter {
            provider,
            loaded: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Aggregated bin values for `[start_bin, end_bin]` (inclusive) on
    /// `chrom`, at the resolution and zoom the grid axis represents.
    ///
    /// On a cache hit the returned interval is the previously materialized
    /// range, which may be wider than requested; index it by
    /// `bin_number - start_bin()`. On a miss the requested window is
    /// expanded by half its width on each side before fetching, so that
    /// panning to an adjacent window usually hits.
    ///
    /// An empty record set is valid output (an all-empty interval), not an
    /// error. Provider failures propagate unchanged.
    pub fn get_bins(
        &mut self,
        grid: &dyn GridAxis,
        unit: Unit,
        chrom: &str,
        start_bin: u32,
        end_bin: u32,
    ) -> Result<Arc<LoadedInterval>> {
        if end_bin < start_bin {
            return Err(BinTrackError::InvalidBinRange {
                start: start_bin,
                end: end_bin,
            }
            .into());
        }

        let resolution = grid.bin_size();
        if let Some(loaded) = &self.loaded
            && loaded.contains(resolution, unit, chrom, start_bin, end_bin)
        {
            return Ok(Arc::clone(loaded));
        }

        // Expand the window by 50% on each side to facilitate panning
        let margin = (end_bin - start_bin) / 2;
        let fetch_start = start_bin.saturating_sub(margin);
        let fetch_end = end_bin + margin;
        debug!(
            "loading bins {}:{}-{} (requested {}-{})",
            chrom, fetch_start, fetch_end, start_bin, end_bin
        );

        let mut bins: Vec<Option<BinStat>> = vec![None; (fetch_end - fetch_start + 1) as usize];

        let genomic_start = grid.genomic_start(fetch_start);
        let genomic_end = grid.genomic_end(fetch_end);
        let records = self
            .provider
            .records(chrom, grid.zoom(), genomic_start, genomic_end)
            .with_context(|| {
                format!(
                    "Failed to retrieve records for {}:{}-{}",
                    chrom, genomic_start, genomic_end
                )
            })?;

        for record in &records {
            let bs = grid.bin_for_position(record.start);
            let be = grid.bin_for_position(record.end);

            if bs > fetch_end {
                // records are sorted by start, nothing further can land in
                // the window
                break;
            } else if be < fetch_start {
                continue;
            }

            for b in bs.max(fetch_start)..=be.min(fetch_end) {
                let bin = bins[(b - fetch_start) as usize].get_or_insert_with(|| {
                    BinStat::new(b, grid.genomic_start(b), grid.genomic_end(b))
                });
                bin.add_score(record);
            }
        }

        let loaded = Arc::new(LoadedInterval::new(
            resolution,
            unit,
            chrom.to_string(),
            fetch_start,
            fetch_end,
            bins,
        ));
        self.loaded = Some(Arc::clone(&loaded));

        Ok(loaded)
    }
}
