use std::collections::HashMap;

use anyhow::Result;

use bintrack_core::ScoredRegion;

/// Source of locus-score records for the adapter.
///
/// Implementations must return records sorted ascending by start coordinate.
/// The adapter's fill loop stops scanning as soon as a record starts past
/// the fetch window; records delivered out of order past that point are
/// never seen. A provider that cannot guarantee ordering must sort before
/// returning.
pub trait ScoreProvider {
    /// All records on `chrom` overlapping `[genomic_start, genomic_end]` at
    /// the given zoom level.
    fn records(
        &self,
        chrom: &str,
        zoom: i32,
        genomic_start: u32,
        genomic_end: u32,
    ) -> Result<Vec<ScoredRegion>>;
}

/// In-memory score provider holding per-chromosome record vectors, sorted on
/// insertion. The reference implementation for callers that already hold
/// their records in memory; file- and URL-backed providers live elsewhere.
#[derive(Debug, Default, Clone)]
pub struct StaticScoreProvider {
    records: HashMap<String, Vec<ScoredRegion>>,
}

impl StaticScoreProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records for a chromosome, keeping the stored vector sorted by
    /// start coordinate.
    pub fn add_records(&mut self, chrom: &str, mut records: Vec<ScoredRegion>) {
        let entry = self.records.entry(chrom.to_string()).or_default();
        entry.append(&mut records);
        entry.sort_by_key(|r| r.start);
    }
}

impl ScoreProvider for StaticScoreProvider {
    fn records(
        &self,
        chrom: &str,
        _zoom: i32,
        genomic_start: u32,
        genomic_end: u32,
    ) -> Result<Vec<ScoredRegion>> {
        let overlapping = self
            .records
            .get(chrom)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.start <= genomic_end && r.end >= genomic_start)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(overlapping)
    }
}
