// ============================================================================
// Pair Reader
// Whitespace-delimited token pairs from a buffered source
// ============================================================================

use super::errors::{BatchError, BatchResult};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Iterator over whitespace-separated token pairs.
///
/// Tokens are paired in reading order regardless of line breaks, so
/// `"1 2\n3\n4"` yields `("1", "2")` then `("3", "4")`. A trailing token
/// without a partner is dropped. After an I/O error the reader is exhausted.
pub struct PairReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
    exhausted: bool,
}

impl<R: BufRead> PairReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
            exhausted: false,
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            if self.exhausted {
                return Ok(None);
            }

            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => self.exhausted = true,
                Ok(_) => self
                    .pending
                    .extend(self.line.split_whitespace().map(str::to_owned)),
                Err(err) => {
                    self.exhausted = true;
                    self.pending.clear();
                    return Err(err);
                },
            }
        }
    }
}

impl<R: BufRead> Iterator for PairReader<R> {
    type Item = io::Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = match self.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(err) => return Some(Err(err)),
        };

        match self.next_token() {
            Ok(Some(second)) => Some(Ok((first, second))),
            Ok(None) => {
                tracing::debug!(token = %first, "dropping unpaired trailing token");
                None
            },
            Err(err) => Some(Err(err)),
        }
    }
}

/// Read the next whitespace-delimited token, skipping blank lines.
///
/// Returns `None` once the source is exhausted without yielding a token. Any
/// text after the token on the same line is discarded.
pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_owned()));
        }
    }
}

/// Open a file as a source of token pairs.
///
/// # Errors
/// Returns `SourceUnavailable` if the file cannot be opened.
pub fn open_pairs(path: impl AsRef<Path>) -> BatchResult<PairReader<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "could not open input");
        BatchError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(PairReader::new(BufReader::new(file)))
}
