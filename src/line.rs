//! A line within aligner output.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::record::alignment;
use crate::record::AlignmentRecord;

/// The known tokens that begin the first header line of aligner output.
const HEADER_TOKENS: [&str; 2] = ["psLayout", "match"];

/// A run of leading spaces, as found on the continuation lines of an
/// aligner-output header.
static LEADING_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ +").expect("leading spaces regex must compile"));

/// A dashed separator line, as found at the end of an aligner-output header.
static DASHED_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-{5,}").expect("dashed separator regex must compile"));

/// An error related to the parsing of a line.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid alignment record.
    InvalidRecord(alignment::ParseError),
}

impl ParseError {
    /// Returns whether this error is fatal for the line (as opposed to a
    /// recoverable, skippable condition).
    pub fn is_fatal(&self) -> bool {
        match self {
            ParseError::InvalidRecord(err) => err.is_fatal(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidRecord(err) => write!(f, "invalid alignment record: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

/// A line within aligner output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// A blank line.
    Empty,
    /// A recognized header line.
    Header,
    /// An alignment record line.
    Record(AlignmentRecord),
}

/// Returns whether a line matches one of the recognized header patterns.
fn is_header(s: &str) -> bool {
    HEADER_TOKENS.iter().any(|token| s.starts_with(token))
        || LEADING_SPACES.is_match(s)
        || DASHED_SEPARATOR.is_match(s)
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Ok(Self::Empty)
        } else if is_header(s) {
            Ok(Self::Header)
        } else {
            s.parse::<AlignmentRecord>()
                .map(Line::Record)
                .map_err(ParseError::InvalidRecord)
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::record::alignment::tests::LINE;

    #[test]
    fn test_empty_line() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("".parse::<Line>()?, Line::Empty);
        assert_eq!("   ".parse::<Line>()?, Line::Empty);
        Ok(())
    }

    #[test]
    fn test_header_lines() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("psLayout version 3".parse::<Line>()?, Line::Header);
        assert_eq!(
            "match\tmis- \trep. \tN's\tQ gap\tQ gap\tT gap\tT gap"
                .parse::<Line>()?,
            Line::Header
        );
        assert_eq!("     match\tmatch".parse::<Line>()?, Line::Header);
        assert_eq!(
            "---------------------------------------".parse::<Line>()?,
            Line::Header
        );
        Ok(())
    }

    #[test]
    fn test_record_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = LINE.parse::<Line>()?;
        assert!(matches!(line, Line::Record(_)));
        Ok(())
    }

    #[test]
    fn test_invalid_record_line() -> Result<(), Box<dyn std::error::Error>> {
        let err = "1\t2\t3".parse::<Line>().unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "invalid alignment record: invalid number of fields in alignment line: expected 21 \
             fields, found 3 fields (line starts with `1\t2\t3`)"
        );
        Ok(())
    }
}
