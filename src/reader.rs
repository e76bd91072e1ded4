//! An aligner-output reader.

use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::io::{self};

use flate2::read::GzDecoder;

use crate::line;
use crate::progress::Progress;
use crate::record::AlignmentRecord;
use crate::Line;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// A line error.
    Line(line::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Line(err) => write!(f, "line error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// Options governing the reading of alignment records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// The score below which records are silently dropped (and counted).
    /// A threshold of zero disables the filter.
    score_threshold: f64,
}

impl Options {
    /// Sets the score threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use probemap::reader::Options;
    ///
    /// let options = Options::default().with_score_threshold(0.75);
    /// assert_eq!(options.score_threshold(), 0.75);
    /// ```
    pub fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Gets the score threshold.
    pub fn score_threshold(&self) -> f64 {
        self.score_threshold
    }
}

/// An aligner-output reader.
///
/// The reader is stream-oriented: memory use is bounded by one line at a
/// time, not by file size. Blank lines and recognized header lines are
/// skipped without being counted as input. Lines with unparseable numeric
/// fields are dropped and counted (see [`Reader::skipped`]); a wrong field
/// count is the one fatal per-line condition and is surfaced to the caller.
#[derive(Debug)]
pub struct Reader<T>
where
    T: BufRead,
{
    /// The inner reader.
    inner: T,

    /// The reading options.
    options: Options,

    /// The number of dropped lines and filtered records.
    skipped: u64,
}

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates an aligner-output reader with default [`Options`].
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"psLayout version 3\n";
    /// let reader = probemap::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::with_options(inner, Options::default())
    }

    /// Creates an aligner-output reader with the provided [`Options`].
    pub fn with_options(inner: T, options: Options) -> Self {
        Self {
            inner,
            options,
            skipped: 0,
        }
    }

    /// Gets a reference to the inner reader.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Gets the number of lines dropped for recoverable parse failures plus
    /// records dropped by the score-threshold filter.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"psLayout version 3\n-----\n";
    /// let mut reader = probemap::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 19);
    /// assert_eq!(buffer, "psLayout version 3");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 6);
    /// assert_eq!(buffer, "-----");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(&mut self.inner, buffer)
    }

    /// Attempts to read a [`Line`] from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use probemap::Line;
    ///
    /// let data = b"psLayout version 3\n\n";
    /// let mut reader = probemap::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Header)));
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Empty)));
    /// assert!(matches!(reader.read_line(&mut buffer)?, None));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_line(&mut self, buffer: &mut String) -> Result<Option<Line>, Error> {
        let read = self.read_line_raw(buffer).map_err(Error::Io)?;

        match read {
            0 => Ok(None),
            _ => {
                let line = buffer.parse::<Line>().map_err(Error::Line)?;
                Ok(Some(line))
            }
        }
    }

    /// Returns an iterator over the alignment records in the underlying
    /// reader.
    ///
    /// Blank lines and headers are passed over; recoverable per-line
    /// failures and sub-threshold records are dropped and counted.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"psLayout version 3\n\n50\t0\t0\t0\t0\t0\t0\t0\t+\tprobeA\t50\t0\t50\tchrX\t100000\t1000\t1050\t1\t50,\t0,\t1000,\n";
    /// let mut reader = probemap::Reader::new(&data[..]);
    ///
    /// let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(records.len(), 1);
    /// assert_eq!(records[0].query_name(), "probeA");
    /// assert_eq!(reader.skipped(), 0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn records(&mut self) -> Records<'_, '_, T> {
        Records {
            reader: self,
            buffer: String::new(),
            progress: None,
        }
    }

    /// Returns an iterator over the alignment records in the underlying
    /// reader, ticking the provided [`Progress`] handle once per parsed
    /// line.
    pub fn records_with_progress<'a, 'b>(
        &'a mut self,
        progress: &'a mut Progress<'b>,
    ) -> Records<'a, 'b, T> {
        Records {
            reader: self,
            buffer: String::new(),
            progress: Some(progress),
        }
    }
}

impl<R> Reader<BufReader<GzDecoder<R>>>
where
    R: Read,
{
    /// Creates an aligner-output reader over gzip-compressed input.
    pub fn gzip(inner: R) -> Self {
        Self::new(BufReader::new(GzDecoder::new(inner)))
    }
}

/// An iterator over the alignment records of a [`Reader`].
#[allow(missing_debug_implementations)]
pub struct Records<'a, 'b, T>
where
    T: BufRead,
{
    /// The underlying reader.
    reader: &'a mut Reader<T>,

    /// The reusable line buffer.
    buffer: String,

    /// An optional progress handle, ticked once per parsed line.
    progress: Option<&'a mut Progress<'b>>,
}

impl<T> Iterator for Records<'_, '_, T>
where
    T: BufRead,
{
    type Item = Result<AlignmentRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let read = match self.reader.read_line_raw(&mut self.buffer) {
                Ok(read) => read,
                Err(err) => return Some(Err(Error::Io(err))),
            };

            if read == 0 {
                return None;
            }

            if let Some(progress) = self.progress.as_deref_mut() {
                progress.tick();
            }

            match self.buffer.parse::<Line>() {
                Ok(Line::Empty) | Ok(Line::Header) => continue,
                Ok(Line::Record(record)) => {
                    let threshold = self.reader.options.score_threshold;
                    if threshold > 0.0 && record.score() < threshold {
                        self.reader.skipped += 1;
                        tracing::debug!(
                            query = record.query_name(),
                            score = record.score(),
                            threshold,
                            "dropping record below score threshold"
                        );
                        continue;
                    }

                    return Some(Ok(record));
                }
                Err(err) if err.is_fatal() => return Some(Err(Error::Line(err))),
                Err(err) => {
                    self.reader.skipped += 1;
                    tracing::debug!(%err, "dropping unparseable line");
                    continue;
                }
            }
        }
    }
}

/// Reads one line from a buffered reader, trimming the trailing newline
/// and any carriage return.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
