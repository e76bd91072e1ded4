//! Progress observation.
//!
//! Large aligner-output files can take a while to stream through. A
//! [`Progress`] handle is an explicit, caller-owned observer that is ticked
//! once per processed item; it is an observability side effect only and
//! never alters results.

/// A caller-owned progress observer.
///
/// The callback is invoked with the running item count every `every` items.
///
/// # Examples
///
/// ```
/// use probemap::progress::Progress;
///
/// let mut progress = Progress::new(2, |count| println!("{} items", count));
/// for _ in 0..5 {
///     progress.tick();
/// }
///
/// assert_eq!(progress.count(), 5);
/// ```
#[allow(missing_debug_implementations)]
pub struct Progress<'a> {
    /// The reporting interval.
    every: u64,

    /// The number of items observed so far.
    count: u64,

    /// The callback invoked every `every` items.
    callback: Box<dyn FnMut(u64) + 'a>,
}

impl<'a> Progress<'a> {
    /// Creates a new [`Progress`] that invokes `callback` every `every`
    /// items. An interval of zero disables the callback but still counts.
    pub fn new(every: u64, callback: impl FnMut(u64) + 'a) -> Self {
        Self {
            every,
            count: 0,
            callback: Box::new(callback),
        }
    }

    /// Records one processed item, invoking the callback when the reporting
    /// interval is reached.
    pub fn tick(&mut self) {
        self.count += 1;

        if self.every > 0 && self.count % self.every == 0 {
            (self.callback)(self.count);
        }
    }

    /// Gets the number of items observed so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
pub mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_progress_ticks_at_interval() -> Result<(), Box<dyn std::error::Error>> {
        let reports = RefCell::new(Vec::new());

        let mut progress = Progress::new(3, |count| reports.borrow_mut().push(count));
        for _ in 0..7 {
            progress.tick();
        }

        assert_eq!(progress.count(), 7);
        drop(progress);
        assert_eq!(reports.into_inner(), vec![3, 6]);

        Ok(())
    }

    #[test]
    fn test_zero_interval_counts_silently() -> Result<(), Box<dyn std::error::Error>> {
        let mut progress = Progress::new(0, |_| panic!("callback must not fire"));
        progress.tick();
        progress.tick();

        assert_eq!(progress.count(), 2);

        Ok(())
    }
}
