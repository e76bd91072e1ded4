//! Alignment records.

pub mod alignment;
pub mod normalize;
pub mod row;

pub use alignment::AlignmentRecord;
pub use row::Row;
