//! `probemap` is a crate for mapping microarray probes to the gene products
//! they actually detect, using genome-alignment evidence produced by a
//! sequence aligner.
//!
//! The crate provides three main points of entry:
//!
//! - Parsing aligner output into canonical alignment records.
//! - Resolving, per probe, a deduplicated and specificity-aware set of
//!   probe-to-gene-product associations.
//! - Collapsing a tiled set of overlapping probe fragments into one
//!   consensus sequence.
//!
//! ## Reading alignment records
//!
//! Aligner output is tab-delimited with exactly 21 fields per data line.
//! The [`Reader`] streams over such output one line at a time: blank lines
//! and recognized headers are passed over, lines with unparseable numeric
//! fields are dropped and counted (see [`Reader::skipped`]), and a wrong
//! field count is surfaced as an error so the caller can decide whether to
//! abort or continue. Query and chromosome names are normalized during
//! parsing; rows queried from an external alignment database can be funneled
//! through [`record::Row`] to receive identical treatment.
//!
//! ```
//! let data = b"50\t0\t0\t0\t0\t0\t0\t0\t+\ttarget:probeA;\t50\t0\t50\tchr10.fa\t135534747\t1000\t1050\t2\t25,25,\t0,25,\t1000,1025,\n";
//! let mut reader = probemap::Reader::new(&data[..]);
//!
//! for result in reader.records() {
//!     let record = result?;
//!     assert_eq!(record.query_name(), "probeA");
//!     assert_eq!(record.chromosome(), "10");
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Mapping probes to gene products
//!
//! The [`mapper::ProbeMapper`] consumes parsed records (possibly covering
//! many probes), consults an [`annotation::Source`] for candidate gene
//! products near each alignment, and resolves the evidence into at most one
//! [`mapper::Association`] per probe and gene product pair. Probes whose
//! evidence implicates several distinct gene products are either retained
//! with reduced confidence or discarded, depending on configuration.
//!
//! ```
//! use probemap::annotation::Annotations;
//! use probemap::annotation::GeneProductExonSet;
//! use probemap::core::GenomicInterval;
//! use probemap::core::Strand;
//! use probemap::mapper::ProbeMapper;
//!
//! let data = b"50\t0\t0\t0\t0\t0\t0\t0\t+\tprobeA\t50\t0\t50\tchrX\t100000\t1020\t1070\t1\t50,\t0,\t1020,\n";
//! let mut reader = probemap::Reader::new(&data[..]);
//! let records = reader.records().collect::<Result<Vec<_>, _>>()?;
//!
//! let annotations = Annotations::new(vec![GeneProductExonSet::new(
//!     "NM_000123",
//!     vec![GenomicInterval::new("X", 1000, 100, Strand::Positive)],
//! )]);
//!
//! let mapping = ProbeMapper::default().process(&annotations, records)?;
//! assert_eq!(mapping["probeA"].len(), 1);
//! assert_eq!(mapping["probeA"][0].gene_product(), "NM_000123");
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Collapsing probe sets
//!
//! A composite probe set tiles several reporters across overlapping regions
//! of the same transcript. [`collapse::collapse`] reconstructs the
//! approximate target sequence by joining the fragments leftmost first,
//! trimming the redundant overlap at each step.
//!
//! ```
//! use probemap::collapse;
//! use probemap::collapse::Reporter;
//!
//! let reporters = vec![
//!     Reporter::new("r1", 0, "ABCDE"),
//!     Reporter::new("r2", 3, "DEFGH"),
//! ];
//!
//! assert_eq!(collapse::collapse(reporters)?, "ABCDEFGH");
//! # Ok::<(), probemap::overlap::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod annotation;
pub mod collapse;
pub mod core;
pub mod line;
pub mod mapper;
pub mod overlap;
pub mod progress;
pub mod reader;
pub mod record;

pub use line::Line;

pub use self::reader::Reader;
