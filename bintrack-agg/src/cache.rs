use log::debug;

use bintrack_core::{BinStat, Unit};

/// One materialized aggregation pass: the bin vector together with the query
/// parameters that produced it. Never mutated after construction; the
/// adapter replaces its entry wholesale on a miss.
///
/// Slots are `None` where no record contributed, which keeps "no data"
/// distinguishable from a bin whose mean happens to be zero.
#[derive(Debug, Clone)]
pub struct LoadedInterval {
    resolution: u32,
    unit: Unit,
    chrom: String,
    start_bin: u32,
    end_bin: u32,
    bins: Vec<Option<BinStat>>,
}

impl LoadedInterval {
    pub(crate) fn new(
        resolution: u32,
        unit: Unit,
        chrom: String,
        start_bin: u32,
        end_bin: u32,
        bins: Vec<Option<BinStat>>,
    ) -> Self {
        debug_assert_eq!(bins.len() as u64, (end_bin - start_bin) as u64 + 1);
        LoadedInterval {
            resolution,
            unit,
            chrom,
            start_bin,
            end_bin,
            bins,
        }
    }

    /// True iff a query for `[start_bin, end_bin]` on `chrom` at this
    /// resolution and unit lies fully inside the materialized range. Partial
    /// overlap is a full miss, not a partial hit.
    pub fn contains(
        &self,
        resolution: u32,
        unit: Unit,
        chrom: &str,
        start_bin: u32,
        end_bin: u32,
    ) -> bool {
        let contains = resolution == self.resolution
            && unit == self.unit
            && chrom == self.chrom
            && start_bin >= self.start_bin
            && end_bin <= self.end_bin;
        if !contains {
            debug!(
                "bin cache miss: wanted {}:{}-{} at {} {}, holding {}:{}-{} at {} {}",
                chrom,
                start_bin,
                end_bin,
                resolution,
                unit,
                self.chrom,
                self.start_bin,
                self.end_bin,
                self.resolution,
                self.unit,
            );
        }
        contains
    }

    /// First bin index of the materialized range. Callers index the bin
    /// slice by `bin_number - start_bin()`.
    pub fn start_bin(&self) -> u32 {
        self.start_bin
    }

    /// Last bin index of the materialized range (inclusive).
    pub fn end_bin(&self) -> u32 {
        self.end_bin
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    /// The full materialized bin sequence, indexed by
    /// `bin_number - start_bin()`. Empty slots are `None`.
    pub fn bins(&self) -> &[Option<BinStat>] {
        &self.bins
    }

    /// Bin stats for an absolute bin number, if the bin is materialized and
    /// non-empty.
    pub fn get(&self, bin_number: u32) -> Option<&BinStat> {
        if bin_number < self.start_bin || bin_number > self.end_bin {
            return None;
        }
        self.bins[(bin_number - self.start_bin) as usize].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::LoadedInterval;
    use bintrack_core::{BinStat, Unit};

    #[fixture]
    fn interval() -> LoadedInterval {
        let mut bins: Vec<Option<BinStat>> = vec![None; 11];
        bins[2] = Some(BinStat::new(12, 1200, 1300));
        LoadedInterval::new(100, Unit::Bp, "chr2".to_string(), 10, 20, bins)
    }

    #[rstest]
    // fully inside
    #[case(100, Unit::Bp, "chr2", 10, 20, true)]
    #[case(100, Unit::Bp, "chr2", 12, 18, true)]
    #[case(100, Unit::Bp, "chr2", 10, 10, true)]
    // partial overlap is a full miss
    #[case(100, Unit::Bp, "chr2", 5, 15, false)]
    #[case(100, Unit::Bp, "chr2", 15, 25, false)]
    // key mismatches
    #[case(200, Unit::Bp, "chr2", 12, 18, false)]
    #[case(100, Unit::Frag, "chr2", 12, 18, false)]
    #[case(100, Unit::Bp, "chr3", 12, 18, false)]
    #[case(100, Unit::Bp, "Chr2", 12, 18, false)] // case-sensitive
    fn test_contains(
        interval: LoadedInterval,
        #[case] resolution: u32,
        #[case] unit: Unit,
        #[case] chrom: &str,
        #[case] start: u32,
        #[case] end: u32,
        #[case] expected: bool,
    ) {
        assert_eq!(interval.contains(resolution, unit, chrom, start, end), expected);
    }

    #[rstest]
    fn test_get_by_absolute_bin_number(interval: LoadedInterval) {
        assert!(interval.get(12).is_some());
        assert_eq!(interval.get(12).unwrap().bin_number(), 12);
        // materialized but empty
        assert!(interval.get(11).is_none());
        // outside the materialized range
        assert!(interval.get(9).is_none());
        assert!(interval.get(21).is_none());
    }

    #[rstest]
    fn test_miss_does_not_mutate(interval: LoadedInterval) {
        assert!(!interval.contains(999, Unit::Bp, "chr2", 12, 18));
        // the entry still answers the original query afterwards
        assert!(interval.contains(100, Unit::Bp, "chr2", 12, 18));
    }
}
