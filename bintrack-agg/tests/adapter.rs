use std::sync::Arc;

use pretty_assertions::assert_eq;

use bintrack_agg::{BinDataAdapter, FixedGridAxis, StaticScoreProvider};
use bintrack_core::{ScoredRegion, Unit};

fn coverage_provider() -> StaticScoreProvider {
    let mut provider = StaticScoreProvider::new();
    // a flat stretch of scored features every 500 bp on chr1
    let records = (0u32..200)
        .map(|i| {
            let start = i * 500;
            ScoredRegion::new(start, start + 300, (i % 4) as f64)
        })
        .collect();
    provider.add_records("chr1", records);
    provider
}

#[test]
fn pan_and_zoom_session() {
    let mut adapter = BinDataAdapter::new(coverage_provider());
    let grid = FixedGridAxis::new(1000, 4);

    // initial view: bins 40..=60
    let first = adapter.get_bins(&grid, Unit::Bp, "chr1", 40, 60).unwrap();
    assert_eq!(first.start_bin(), 30);
    assert_eq!(first.end_bin(), 70);

    // every materialized bin aggregates two 500 bp features
    for bin in first.bins().iter().flatten() {
        assert_eq!(bin.n_records(), 2);
    }

    // pan right within the prefetch margin: same snapshot
    let panned = adapter.get_bins(&grid, Unit::Bp, "chr1", 48, 68).unwrap();
    assert!(Arc::ptr_eq(&first, &panned));

    // pan past the prefetched range: recomputed around the new window
    let far = adapter.get_bins(&grid, Unit::Bp, "chr1", 65, 85).unwrap();
    assert!(!Arc::ptr_eq(&first, &far));
    assert_eq!(far.start_bin(), 55);
    assert_eq!(far.end_bin(), 95);

    // zoom in: new resolution invalidates the cache entry
    let fine_grid = FixedGridAxis::new(500, 5);
    let zoomed = adapter
        .get_bins(&fine_grid, Unit::Bp, "chr1", 130, 170)
        .unwrap();
    assert_eq!(zoomed.resolution(), 500);
    // at 500 bp each feature covers exactly one bin
    let bin130 = zoomed.get(130).unwrap();
    assert_eq!(bin130.n_records(), 1);
    assert_eq!(bin130.value(), (130 % 4) as f64);

    // back to the coarse view: miss again, values identical to the first pass
    let coarse_again = adapter.get_bins(&grid, Unit::Bp, "chr1", 40, 60).unwrap();
    assert!(!Arc::ptr_eq(&first, &coarse_again));
    assert_eq!(
        first.get(45).unwrap().value(),
        coarse_again.get(45).unwrap().value()
    );
}

#[test]
fn uncovered_chromosome_yields_empty_bins() {
    let mut adapter = BinDataAdapter::new(coverage_provider());
    let grid = FixedGridAxis::new(1000, 4);

    let interval = adapter.get_bins(&grid, Unit::Bp, "chrM", 0, 10).unwrap();
    assert!(interval.bins().iter().all(|slot| slot.is_none()));
    assert_eq!(interval.bins().len(), 16);
}
