// io.rs

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::error::{RecordError, VariantCoreError};

const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// The buffered byte source a [`Records`] iterator reads lines from.
pub type LineSource = BufReader<Box<dyn Read + Send>>;

/// A path to an input file. Nothing is opened until [`InputStream::reader`]
/// is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStream {
    filepath: PathBuf,
}

impl InputStream {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.filepath
    }

    pub fn reader(&self) -> Result<LineSource, VariantCoreError> {
        let file = File::open(&self.filepath)?;
        debug!(path = %self.filepath.display(), "opened input file");
        Ok(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, Box::new(file)))
    }
}

/// A record type that can be parsed from one line of a tab-delimited file.
pub trait LineRecord: Sized {
    /// Whether this line carries no record (comments, headers, blank lines).
    /// The line has its line terminator removed but is otherwise raw.
    fn is_skipped(line: &str) -> bool;

    /// Parse a data line into a record.
    fn from_line(line: &str) -> Result<Self, RecordError>;
}

enum State {
    /// Not opened yet; the first call to `next()` opens the file.
    Pending(InputStream),
    Open(LineSource),
    /// Exhausted or failed. The reader has been dropped.
    Done,
}

/// A lazy, single-pass iterator of parsed records.
///
/// Lines are read one at a time. Skipped lines produce nothing, data lines
/// produce `Ok(record)`. The first error (I/O or parse) is yielded once and
/// ends the iteration. The underlying file handle is released as soon as
/// iteration ends or the iterator is dropped.
pub struct Records<T> {
    state: State,
    line: String,
    line_number: usize,
    n_records: usize,
    _record: PhantomData<fn() -> T>,
}

impl<T: LineRecord> Records<T> {
    /// Create an iterator over the file at `input`. The file is opened on
    /// the first call to `next()`.
    pub fn new(input: InputStream) -> Self {
        Self::with_state(State::Pending(input))
    }

    /// Create an iterator over an already-open byte source.
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        let reader: Box<dyn Read + Send> = Box::new(reader);
        Self::with_state(State::Open(BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            reader,
        )))
    }

    fn with_state(state: State) -> Self {
        Self {
            state,
            line: String::new(),
            line_number: 0,
            n_records: 0,
            _record: PhantomData,
        }
    }

    /// Number of lines consumed so far, including skipped lines.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Whether the underlying reader is currently held.
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    fn close(&mut self) {
        self.state = State::Done;
    }
}

impl<T: LineRecord> Iterator for Records<T> {
    type Item = Result<T, VariantCoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let reader = match &mut self.state {
                State::Open(reader) => reader,
                State::Pending(input) => match input.reader() {
                    Ok(reader) => {
                        self.state = State::Open(reader);
                        continue;
                    }
                    Err(e) => {
                        debug!("failed to open input: {}", e);
                        self.close();
                        return Some(Err(e));
                    }
                },
                State::Done => return None,
            };

            self.line.clear();
            match reader.read_line(&mut self.line) {
                Ok(0) => {
                    debug!(
                        records = self.n_records,
                        lines = self.line_number,
                        "finished reading input"
                    );
                    self.close();
                    return None;
                }
                Ok(_) => self.line_number += 1,
                Err(e) => {
                    debug!(line = self.line_number + 1, "read failed: {}", e);
                    self.close();
                    return Some(Err(e.into()));
                }
            }

            let line = self.line.trim_end_matches(&['\r', '\n'][..]);
            if T::is_skipped(line) {
                trace!(line = self.line_number, "skipping non-data line");
                continue;
            }

            return match T::from_line(line) {
                Ok(record) => {
                    self.n_records += 1;
                    Some(Ok(record))
                }
                Err(source) => {
                    debug!(line = self.line_number, "invalid record: {}", source);
                    self.close();
                    Some(Err(VariantCoreError::InvalidRecord {
                        line: self.line_number,
                        source,
                    }))
                }
            };
        }
    }
}

impl<T: LineRecord> FusedIterator for Records<T> {}
