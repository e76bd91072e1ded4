//! Collapsing tiled probe fragments into one consensus sequence.

use crate::overlap;

/// A probe sub-element: a short sequence tiled against a known position of
/// its probe set's target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reporter {
    /// The reporter name. Used as the deterministic tie-breaker when two
    /// reporters share a start coordinate.
    name: String,

    /// The 0-based start of the reporter within the target sequence.
    start: u64,

    /// The reporter sequence.
    sequence: String,
}

impl Reporter {
    /// Creates a new [`Reporter`].
    ///
    /// # Examples
    ///
    /// ```
    /// use probemap::collapse::Reporter;
    ///
    /// let reporter = Reporter::new("probeA_r1", 0, "ABCDE");
    /// assert_eq!(reporter.name(), "probeA_r1");
    /// assert_eq!(reporter.start(), 0);
    /// assert_eq!(reporter.sequence(), "ABCDE");
    /// ```
    pub fn new(name: impl Into<String>, start: u64, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start,
            sequence: sequence.into(),
        }
    }

    /// Gets the reporter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the 0-based start of the reporter within the target sequence.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Gets the reporter sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }
}

/// Reconstructs an approximate full-length target sequence from a tiled set
/// of overlapping probe fragments.
///
/// Reporters are consumed leftmost first (ties broken by name, so the
/// result is deterministic); at each step, only the part of the next
/// fragment that does not overlap the tail of the accumulated sequence is
/// appended. An empty reporter set collapses to the empty sequence; a
/// reporter with an empty sequence is an invalid argument.
///
/// # Examples
///
/// ```
/// use probemap::collapse;
/// use probemap::collapse::Reporter;
///
/// let reporters = vec![
///     Reporter::new("r1", 0, "ABCDE"),
///     Reporter::new("r2", 3, "DEFGH"),
/// ];
///
/// assert_eq!(collapse::collapse(reporters)?, "ABCDEFGH");
/// # Ok::<(), probemap::overlap::Error>(())
/// ```
pub fn collapse(reporters: impl IntoIterator<Item = Reporter>) -> Result<String, overlap::Error> {
    let mut working = reporters.into_iter().collect::<Vec<_>>();
    working.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.name.cmp(&b.name)));

    let mut collapsed = String::new();

    for reporter in working {
        if reporter.sequence.is_empty() {
            return Err(overlap::Error::EmptySequence("reporter"));
        }

        if collapsed.is_empty() {
            collapsed.push_str(&reporter.sequence);
            continue;
        }

        let shared = overlap::right_hand_overlap(&collapsed, &reporter.sequence)?;
        collapsed.push_str(&reporter.sequence[shared..]);
    }

    Ok(collapsed)
}
