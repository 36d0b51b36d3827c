#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::scored_region::ScoredRegion;

///
/// BinStat struct, the accumulator for one aggregation bin. A bin covers a
/// half-open genomic span `[genomic_start, genomic_end)` and folds in every
/// source record that overlaps it.
///
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinStat {
    bin_number: u32,
    genomic_start: u32,
    genomic_end: u32,
    weighted_sum: f64,
    n_records: u32,
}

impl BinStat {
    pub fn new(bin_number: u32, genomic_start: u32, genomic_end: u32) -> Self {
        debug_assert!(genomic_start < genomic_end);
        BinStat {
            bin_number,
            genomic_start,
            genomic_end,
            weighted_sum: 0.0,
            n_records: 0,
        }
    }

    pub fn bin_number(&self) -> u32 {
        self.bin_number
    }

    pub fn genomic_start(&self) -> u32 {
        self.genomic_start
    }

    pub fn genomic_end(&self) -> u32 {
        self.genomic_end
    }

    pub fn n_records(&self) -> u32 {
        self.n_records
    }

    /// Fold one record into the bin. Every contributing record counts with
    /// full weight, regardless of how much of it falls inside the bin; use
    /// [`BinStat::overlap_fraction`] if the proportional quantity is needed.
    ///
    /// The contribution test is `start < genomic_end && end >= genomic_start`:
    /// half-open against the bin end, closed against the bin start. A record
    /// whose span cannot overlap is ignored.
    pub fn add_score(&mut self, region: &ScoredRegion) {
        if region.start >= self.genomic_end || region.end < self.genomic_start {
            return;
        }

        self.weighted_sum += region.score;
        self.n_records += 1;
    }

    /// Fraction of this bin's span covered by the record, in `[0, 1]`.
    /// This is the proportional-overlap weight that full-weight accumulation
    /// deliberately does not apply.
    pub fn overlap_fraction(&self, region: &ScoredRegion) -> f64 {
        if region.start >= self.genomic_end || region.end < self.genomic_start {
            return 0.0;
        }

        let covered = region.end.min(self.genomic_end) - region.start.max(self.genomic_start);
        covered as f64 / (self.genomic_end - self.genomic_start) as f64
    }

    /// Mean score of the contributing records, or 0 for an empty bin.
    pub fn value(&self) -> f64 {
        if self.n_records == 0 {
            0.0
        } else {
            self.weighted_sum / self.n_records as f64
        }
    }
}
