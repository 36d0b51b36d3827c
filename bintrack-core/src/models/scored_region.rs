use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// ScoredRegion struct, one locus-score record: a half-open genomic span
/// `[start, end)` carrying a scalar value.
///
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredRegion {
    pub start: u32,
    pub end: u32,
    pub score: f64,
}

impl ScoredRegion {
    pub fn new(start: u32, end: u32, score: f64) -> Self {
        ScoredRegion { start, end, score }
    }

    ///
    /// Get length of the region
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    /// Check if this record overlaps the span `[start, end)`
    #[inline]
    pub fn overlaps(&self, start: u32, end: u32) -> bool {
        self.start < end && self.end > start
    }
}

impl Display for ScoredRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}\t{}", self.start, self.end, self.score)
    }
}
