//! The gene-product annotation boundary.
//!
//! The mapper asks an annotation source for candidate gene products near an
//! alignment's target locus. Sources are expected to hand back fully
//! materialized exon sets; nothing here is lazily loaded or refreshed.
//! Failures at this boundary are fatal and propagate unchanged to the
//! caller, with no internal retry.

use std::collections::HashMap;

use rust_lapper as lapper;

use crate::core::GenomicInterval;
use crate::core::Strand;

/// A gene product (transcript) and its ordered exon intervals.
///
/// Exon sets are read-only inputs to this crate, supplied by an external
/// annotation collaborator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneProductExonSet {
    /// The key identifying the gene product.
    id: String,

    /// The ordered exons of the gene product.
    exons: Vec<GenomicInterval>,
}

impl GeneProductExonSet {
    /// Creates a new [`GeneProductExonSet`].
    ///
    /// # Examples
    ///
    /// ```
    /// use probemap::annotation::GeneProductExonSet;
    /// use probemap::core::GenomicInterval;
    /// use probemap::core::Strand;
    ///
    /// let product = GeneProductExonSet::new(
    ///     "NM_000123",
    ///     vec![GenomicInterval::new("10", 1000, 200, Strand::Positive)],
    /// );
    ///
    /// assert_eq!(product.id(), "NM_000123");
    /// assert_eq!(product.exons().len(), 1);
    /// ```
    pub fn new(id: impl Into<String>, exons: Vec<GenomicInterval>) -> Self {
        Self {
            id: id.into(),
            exons,
        }
    }

    /// Gets the key identifying the gene product.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the ordered exons of the gene product.
    pub fn exons(&self) -> &[GenomicInterval] {
        &self.exons
    }

    /// Gets the chromosome of the gene product, if it has any exons.
    pub fn chromosome(&self) -> Option<&str> {
        self.exons.first().map(|exon| exon.chromosome())
    }

    /// Gets the strand of the gene product, if it has any exons.
    pub fn strand(&self) -> Option<Strand> {
        self.exons.first().map(|exon| exon.strand())
    }

    /// Gets the genomic extent of the gene product: the span from its
    /// leftmost exon start to its rightmost exon end.
    pub fn extent(&self) -> Option<GenomicInterval> {
        let first = self.exons.first()?;

        let start = self.exons.iter().map(|e| e.start()).min()?;
        let end = self.exons.iter().map(|e| e.end()).max()?;

        Some(GenomicInterval::new(
            first.chromosome(),
            start,
            end - start,
            first.strand(),
        ))
    }
}

/// An error raised by an annotation source.
///
/// Source failures are treated as fatal by this crate and are propagated
/// unchanged; the underlying cause is preserved.
#[derive(Debug)]
pub struct Error(Box<dyn std::error::Error + Send + Sync>);

impl Error {
    /// Creates a new [`Error`] from an underlying cause.
    pub fn new(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(cause.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "annotation source error: {}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.0.as_ref())
    }
}

/// A source of candidate gene products for a genomic locus.
pub trait Source {
    /// Returns the gene products whose genomic extent overlaps the provided
    /// locus.
    fn overlapping(&self, locus: &GenomicInterval) -> Result<Vec<GeneProductExonSet>, Error>;
}

/// An eagerly populated, in-memory annotation source.
///
/// Gene-product extents are indexed per chromosome in an interval tree, so
/// candidate lookup is sublinear in the number of annotated products.
#[derive(Debug)]
pub struct Annotations {
    /// Per-chromosome interval index over gene-product extents. Values are
    /// indices into `products`.
    lookup: HashMap<String, lapper::Lapper<u64, usize>>,

    /// The annotated gene products.
    products: Vec<GeneProductExonSet>,
}

impl Annotations {
    /// Creates a new [`Annotations`] from a set of gene products.
    ///
    /// Products without exons carry no genomic extent and are never
    /// returned from lookups.
    ///
    /// # Examples
    ///
    /// ```
    /// use probemap::annotation::Annotations;
    /// use probemap::annotation::GeneProductExonSet;
    /// use probemap::annotation::Source;
    /// use probemap::core::GenomicInterval;
    /// use probemap::core::Strand;
    ///
    /// let annotations = Annotations::new(vec![GeneProductExonSet::new(
    ///     "NM_000123",
    ///     vec![GenomicInterval::new("10", 1000, 200, Strand::Positive)],
    /// )]);
    ///
    /// let locus = GenomicInterval::new("10", 1100, 10, Strand::Positive);
    /// let candidates = annotations.overlapping(&locus)?;
    /// assert_eq!(candidates.len(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(products: impl IntoIterator<Item = GeneProductExonSet>) -> Self {
        let products = products.into_iter().collect::<Vec<_>>();

        let mut intervals = HashMap::<String, Vec<lapper::Interval<u64, usize>>>::new();

        for (index, product) in products.iter().enumerate() {
            if let Some(extent) = product.extent() {
                intervals
                    .entry(extent.chromosome().to_string())
                    .or_default()
                    .push(lapper::Interval {
                        start: extent.start(),
                        stop: extent.end(),
                        val: index,
                    });
            }
        }

        let lookup = intervals
            .into_iter()
            .map(|(chromosome, intervals)| (chromosome, lapper::Lapper::new(intervals)))
            .collect();

        Self { lookup, products }
    }
}

impl Source for Annotations {
    fn overlapping(&self, locus: &GenomicInterval) -> Result<Vec<GeneProductExonSet>, Error> {
        let Some(index) = self.lookup.get(locus.chromosome()) else {
            return Ok(Vec::new());
        };

        Ok(index
            .find(locus.start(), locus.end())
            .map(|entry| self.products[entry.val].clone())
            .collect())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// A two-exon transcript on chromosome 1.
    fn product(id: &str, exon_starts: &[(u64, u64)]) -> GeneProductExonSet {
        GeneProductExonSet::new(
            id,
            exon_starts
                .iter()
                .map(|(start, length)| GenomicInterval::new("1", *start, *length, Strand::Positive))
                .collect(),
        )
    }

    #[test]
    fn test_extent_spans_all_exons() -> Result<(), Box<dyn std::error::Error>> {
        let product = product("G1", &[(100, 50), (300, 100)]);
        let extent = product.extent().unwrap();

        assert_eq!(extent.chromosome(), "1");
        assert_eq!(extent.start(), 100);
        assert_eq!(extent.end(), 400);

        Ok(())
    }

    #[test]
    fn test_extent_of_empty_exon_set() -> Result<(), Box<dyn std::error::Error>> {
        let product = GeneProductExonSet::new("G1", Vec::new());
        assert!(product.extent().is_none());
        Ok(())
    }

    #[test]
    fn test_overlapping_lookup() -> Result<(), Box<dyn std::error::Error>> {
        let annotations = Annotations::new(vec![
            product("G1", &[(100, 50), (300, 100)]),
            product("G2", &[(1000, 100)]),
        ]);

        let locus = GenomicInterval::new("1", 120, 100, Strand::Positive);
        let candidates = annotations.overlapping(&locus)?;
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id(), "G1");

        let locus = GenomicInterval::new("1", 5000, 10, Strand::Positive);
        assert!(annotations.overlapping(&locus)?.is_empty());

        let locus = GenomicInterval::new("2", 120, 100, Strand::Positive);
        assert!(annotations.overlapping(&locus)?.is_empty());

        Ok(())
    }

    #[test]
    fn test_error_preserves_cause() -> Result<(), Box<dyn std::error::Error>> {
        let err = Error::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "database unreachable",
        ));

        assert_eq!(
            err.to_string(),
            "annotation source error: database unreachable"
        );
        assert!(std::error::Error::source(&err).is_some());

        Ok(())
    }
}
