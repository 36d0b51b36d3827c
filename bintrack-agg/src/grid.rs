/// Mapping between bin indices and genomic coordinates for one zoom level.
///
/// The adapter's sorted early-exit relies on this mapping being monotonic
/// and self-consistent: `bin_for_position(genomic_start(b)) == b` for every
/// bin `b`, and larger coordinates never map to smaller bins.
pub trait GridAxis {
    /// Genomic width of one bin (the resolution the axis represents).
    fn bin_size(&self) -> u32;

    /// Zoom level this axis belongs to, forwarded to the score provider.
    fn zoom(&self) -> i32;

    /// First genomic coordinate covered by `bin` (inclusive).
    fn genomic_start(&self, bin: u32) -> u32;

    /// Genomic coordinate just past the span of `bin` (exclusive).
    fn genomic_end(&self, bin: u32) -> u32;

    /// Bin containing the genomic coordinate `pos`.
    fn bin_for_position(&self, pos: u32) -> u32;
}

/// Uniform-width grid axis: bin `b` covers
/// `[b * bin_size, (b + 1) * bin_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGridAxis {
    bin_size: u32,
    zoom: i32,
}

impl FixedGridAxis {
    pub fn new(bin_size: u32, zoom: i32) -> Self {
        assert!(bin_size > 0, "bin size must be positive");
        FixedGridAxis { bin_size, zoom }
    }
}

impl GridAxis for FixedGridAxis {
    fn bin_size(&self) -> u32 {
        self.bin_size
    }

    fn zoom(&self) -> i32 {
        self.zoom
    }

    fn genomic_start(&self, bin: u32) -> u32 {
        bin * self.bin_size
    }

    fn genomic_end(&self, bin: u32) -> u32 {
        (bin + 1) * self.bin_size
    }

    fn bin_for_position(&self, pos: u32) -> u32 {
        pos / self.bin_size
    }
}
