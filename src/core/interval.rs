//! Genomic intervals.

use crate::core::Strand;

/// A half-open genomic interval: a chromosome, a 0-based start, a length,
/// and a strand.
///
/// Intervals describe both a single aligned block within a gapped alignment
/// and an exon of a gene product.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct GenomicInterval {
    /// The chromosome upon which the interval sits.
    chromosome: String,

    /// The 0-based start of the interval.
    start: u64,

    /// The length of the interval.
    length: u64,

    /// The strand of the interval.
    strand: Strand,
}

impl GenomicInterval {
    /// Creates a new [`GenomicInterval`].
    ///
    /// # Examples
    ///
    /// ```
    /// use probemap::core::GenomicInterval;
    /// use probemap::core::Strand;
    ///
    /// let interval = GenomicInterval::new("10", 1000, 250, Strand::Positive);
    /// assert_eq!(interval.chromosome(), "10");
    /// assert_eq!(interval.start(), 1000);
    /// assert_eq!(interval.length(), 250);
    /// assert_eq!(interval.end(), 1250);
    /// ```
    pub fn new(chromosome: impl Into<String>, start: u64, length: u64, strand: Strand) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            length,
            strand,
        }
    }

    /// Gets the chromosome name.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Gets the 0-based start of the interval.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Gets the length of the interval.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Gets the exclusive end of the interval.
    pub fn end(&self) -> u64 {
        self.start + self.length
    }

    /// Gets the strand of the interval.
    pub fn strand(&self) -> Strand {
        self.strand
    }
}

impl std::fmt::Display for GenomicInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}-{}",
            self.chromosome,
            self.strand,
            self.start,
            self.end()
        )
    }
}
