//! Normalization of query and target names.
//!
//! Both input paths — flat aligner output and externally queried database
//! rows — funnel their identifiers through these helpers so that the two
//! are indistinguishable downstream.

/// The token some sequence writers substitute for literal spaces in query
/// names. Restored to a space during cleanup.
pub const SPACE_SUBSTITUTION: &str = "_____";

/// The marker prefixed to query names by some alignment pipelines.
const TARGET_MARKER: &str = "target:";

/// The chromosome name prefix used by UCSC-style genome builds.
const CHROMOSOME_PREFIX: &str = "chr";

/// The FASTA file suffix sometimes carried by chromosome names.
const FASTA_SUFFIX: &str = ".fa";

/// Cleans up a raw query (probe) name.
///
/// Strips a leading `target:` marker, strips one trailing semicolon, and
/// restores space-substitution tokens to literal spaces.
///
/// # Examples
///
/// ```
/// use probemap::record::normalize::clean_query_name;
///
/// assert_eq!(clean_query_name("target:NM_000123;"), "NM_000123");
/// assert_eq!(clean_query_name("probe_1"), "probe_1");
/// ```
pub fn clean_query_name(raw: &str) -> String {
    let name = raw.strip_prefix(TARGET_MARKER).unwrap_or(raw);
    let name = name.strip_suffix(';').unwrap_or(name);
    name.replace(SPACE_SUBSTITUTION, " ")
}

/// Cleans up a raw target (chromosome) name.
///
/// If the raw name contains `chr`, everything after it is taken; if that
/// value ends with `.fa`, the suffix is stripped. Names without a `chr`
/// component are used unchanged, which supports non-UCSC-style builds.
///
/// # Examples
///
/// ```
/// use probemap::record::normalize::clean_chromosome_name;
///
/// assert_eq!(clean_chromosome_name("chr10.fa"), "10");
/// assert_eq!(clean_chromosome_name("chrX"), "X");
/// assert_eq!(clean_chromosome_name("scaffold_7"), "scaffold_7");
/// ```
pub fn clean_chromosome_name(raw: &str) -> String {
    match raw.find(CHROMOSOME_PREFIX) {
        Some(at) => {
            let name = &raw[at + CHROMOSOME_PREFIX.len()..];
            name.strip_suffix(FASTA_SUFFIX).unwrap_or(name).to_string()
        }
        None => raw.to_string(),
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_clean_query_name() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(clean_query_name("target:NM_000123;"), "NM_000123");
        assert_eq!(clean_query_name("NM_000123"), "NM_000123");
        assert_eq!(clean_query_name("AFFX_probe;"), "AFFX_probe");
        assert_eq!(clean_query_name("a_____b"), "a b");
        Ok(())
    }

    #[test]
    fn test_clean_query_name_strips_one_trailing_semicolon() -> Result<(), Box<dyn std::error::Error>>
    {
        assert_eq!(clean_query_name("NM_000123;;"), "NM_000123;");
        Ok(())
    }

    #[test]
    fn test_clean_chromosome_name() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(clean_chromosome_name("chr10.fa"), "10");
        assert_eq!(clean_chromosome_name("chrX"), "X");
        assert_eq!(clean_chromosome_name("chr21"), "21");
        assert_eq!(clean_chromosome_name("scaffold_7"), "scaffold_7");
        Ok(())
    }
}
