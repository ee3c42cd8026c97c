use crate::records::{RawLine, RecordError};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Lazy line iterator over a log file with the header line removed.
///
/// The file handle is owned by the iterator and closed when it is dropped,
/// whether iteration ran to the end or stopped early.
pub struct RecordLines<R = BufReader<File>> {
    path: PathBuf,
    lines: Lines<R>,
    next_number: usize,
}

/// Opens `path` and discards its first line unconditionally.
pub fn open_records(path: &Path) -> Result<RecordLines, RecordError> {
    let file = File::open(path).map_err(|e| RecordError::open(path, e))?;
    tracing::info!(path = %path.display(), "opened log file");
    RecordLines::new(path, BufReader::new(file))
}

impl<R: BufRead> RecordLines<R> {
    /// Wraps any buffered reader; the first line is consumed as the header.
    ///
    /// The header is read as raw bytes, so its content (encoding included)
    /// never affects the run.
    pub fn new(path: impl Into<PathBuf>, mut reader: R) -> Result<Self, RecordError> {
        let path = path.into();

        let mut header = Vec::new();
        match reader.read_until(b'\n', &mut header) {
            Ok(0) => tracing::warn!(path = %path.display(), "log file is empty"),
            Ok(len) => tracing::debug!(len, "skipped header"),
            Err(source) => {
                return Err(RecordError::Read {
                    path,
                    line: 1,
                    source,
                });
            }
        }

        Ok(Self {
            path,
            lines: reader.lines(),
            next_number: 2,
        })
    }
}

impl<R: BufRead> Iterator for RecordLines<R> {
    type Item = Result<RawLine, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        let number = self.next_number;
        let item = self.lines.next()?;
        self.next_number += 1;

        Some(
            item.map(|text| RawLine { number, text })
                .map_err(|source| RecordError::Read {
                    path: self.path.clone(),
                    line: number,
                    source,
                }),
        )
    }
}
