//! Pure interval-overlap arithmetic.
//!
//! These functions have no side effects and are safely callable
//! concurrently. Invalid arguments are rejected with precondition errors,
//! never silently coerced.

use crate::core::GenomicInterval;

/// An error related to overlap computation.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An interval whose start is after its end.
    InvertedInterval(&'static str),

    /// Block start and size lists of differing lengths.
    MismatchedBlockLists {
        /// The number of block starts provided.
        starts: usize,
        /// The number of block sizes provided.
        sizes: usize,
    },

    /// An empty sequence where a non-empty one is required.
    EmptySequence(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvertedInterval(name) => {
                write!(f, "{} interval start is after its end", name)
            }
            Error::MismatchedBlockLists { starts, sizes } => write!(
                f,
                "mismatched block lists: {} starts but {} sizes",
                starts, sizes
            ),
            Error::EmptySequence(name) => write!(f, "{} sequence is empty", name),
        }
    }
}

impl std::error::Error for Error {}

/// Computes the number of bases shared by the interval `[start, end)` and
/// the exon `[exon_start, exon_end)`.
///
/// A single formula covers all four relative placements: disjoint, partial
/// overhang on either side, and total containment in either direction.
///
/// # Examples
///
/// ```
/// use probemap::overlap;
///
/// assert_eq!(overlap::compute(10, 20, 15, 25)?, 5);
/// assert_eq!(overlap::compute(10, 30, 15, 20)?, 5);
/// assert_eq!(overlap::compute(0, 5, 10, 20)?, 0);
/// # Ok::<(), probemap::overlap::Error>(())
/// ```
pub fn compute(start: u64, end: u64, exon_start: u64, exon_end: u64) -> Result<u64, Error> {
    if start > end {
        return Err(Error::InvertedInterval("query"));
    }

    if exon_start > exon_end {
        return Err(Error::InvertedInterval("exon"));
    }

    Ok(end.min(exon_end).saturating_sub(start.max(exon_start)))
}

/// Computes the total number of bases the provided alignment blocks share
/// with the exons of a gene product.
///
/// Returns zero when the gene product has no exons; a value of zero for a
/// non-empty exon set means the alignment sits entirely within introns.
/// Chromosome agreement between the blocks and the exons is the caller's
/// responsibility.
pub fn gene_exon_overlap(
    block_starts: &[u64],
    block_sizes: &[u64],
    exons: &[GenomicInterval],
) -> Result<u64, Error> {
    if block_starts.len() != block_sizes.len() {
        return Err(Error::MismatchedBlockLists {
            starts: block_starts.len(),
            sizes: block_sizes.len(),
        });
    }

    let mut total = 0;

    for (start, size) in block_starts.iter().zip(block_sizes) {
        for exon in exons {
            total += compute(*start, start + size, exon.start(), exon.end())?;
        }
    }

    Ok(total)
}

/// Computes the length of the longest suffix of `target` that is also a
/// prefix of `query`.
///
/// Candidate suffixes are scanned from longest to shortest; the result is
/// the amount that must be trimmed off `query` to join it onto `target`
/// without introducing redundancy. Empty sequences are invalid arguments.
///
/// # Examples
///
/// ```
/// use probemap::overlap;
///
/// assert_eq!(overlap::right_hand_overlap("ABCDE", "DEFGH")?, 2);
/// assert_eq!(overlap::right_hand_overlap("ABC", "XYZ")?, 0);
/// # Ok::<(), probemap::overlap::Error>(())
/// ```
pub fn right_hand_overlap(target: &str, query: &str) -> Result<usize, Error> {
    if target.is_empty() {
        return Err(Error::EmptySequence("target"));
    }

    if query.is_empty() {
        return Err(Error::EmptySequence("query"));
    }

    let target = target.as_bytes();
    let query = query.as_bytes();

    for i in 0..target.len() {
        if query.starts_with(&target[i..]) {
            return Ok(target.len() - i);
        }
    }

    Ok(0)
}
