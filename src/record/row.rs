//! A fully materialized alignment row.

use crate::core::Strand;

/// One alignment row as handed over by an external source.
///
/// This is the common funnel for both input paths: the flat-file parser
/// assembles a [`Row`] from a tab-delimited line, and callers querying an
/// external alignment database assemble one from a result row. Conversion
/// into an [`AlignmentRecord`](crate::record::AlignmentRecord) applies
/// identical name normalization and invariant checks either way, so the two
/// paths are indistinguishable for equivalent data.
///
/// Names are raw here; they are cleaned during conversion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    /// The raw query (probe) sequence name.
    pub query_name: String,

    /// The length of the query sequence.
    pub query_size: u64,

    /// The number of matching bases.
    pub matches: u64,

    /// The number of mismatching bases.
    pub mismatches: u64,

    /// The number of bases matching repeat sequence.
    pub rep_matches: u64,

    /// The number of `N` bases.
    pub n_count: u64,

    /// The number of gaps in the query.
    pub query_gap_count: u64,

    /// The number of bases in query gaps.
    pub query_gap_bases: u64,

    /// The number of gaps in the target.
    pub target_gap_count: u64,

    /// The number of bases in target gaps.
    pub target_gap_bases: u64,

    /// The strand of the alignment.
    pub strand: Strand,

    /// The 0-based, query-local start of the alignment.
    pub query_start: u64,

    /// The query-local end of the alignment.
    pub query_end: u64,

    /// The raw target (chromosome) name.
    pub target_name: String,

    /// The length of the target chromosome.
    pub target_size: u64,

    /// The chromosome-local start of the alignment.
    pub target_start: u64,

    /// The chromosome-local end of the alignment.
    pub target_end: u64,

    /// The number of aligned blocks.
    pub block_count: u64,

    /// The sizes of the aligned blocks.
    pub block_sizes: Vec<u64>,

    /// The query-local starts of the aligned blocks.
    pub query_block_starts: Vec<u64>,

    /// The chromosome-local starts of the aligned blocks.
    pub target_block_starts: Vec<u64>,
}
