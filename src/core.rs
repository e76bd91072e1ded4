//! Core functionality used across the crate.

pub mod interval;
pub mod strand;

pub use interval::GenomicInterval;
pub use strand::Strand;
