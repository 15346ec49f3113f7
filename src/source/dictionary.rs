//! Wordlist replay.

use crate::error::{Result, SearchError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Yields one candidate per line of a wordlist, in file order.
///
/// Each line is trimmed of surrounding whitespace. Blank lines are kept and
/// yielded as empty candidates so the yield count always matches
/// [`DictionarySource::count_records`].
///
/// A read failure ends the sequence early. The failure is kept and must be
/// collected with [`DictionarySource::take_error`], otherwise a truncated
/// replay looks like a complete one.
#[derive(Debug)]
pub struct DictionarySource {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    buf: Vec<u8>,
    error: Option<io::Error>,
}

impl DictionarySource {
    /// Open the wordlist. Failure here is fatal and happens before any search.
    ///
    /// Only regular files are accepted; a directory opens fine on some
    /// platforms but can never be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let unavailable = |source| SearchError::SourceUnavailable {
            path: path.clone(),
            source,
        };

        let metadata = std::fs::metadata(&path).map_err(unavailable)?;
        if !metadata.is_file() {
            return Err(unavailable(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        let file = File::open(&path).map_err(unavailable)?;

        Ok(Self {
            path,
            reader: Some(BufReader::new(file)),
            buf: Vec::with_capacity(256),
            error: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count records with an independent handle; the iteration cursor is untouched.
    pub fn count_records(&self) -> Result<u64> {
        let unavailable = |source| SearchError::SourceUnavailable {
            path: self.path.clone(),
            source,
        };

        let mut reader = BufReader::new(File::open(&self.path).map_err(unavailable)?);
        let mut buf = Vec::with_capacity(256);
        let mut records = 0u64;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(unavailable)?;
            if read == 0 {
                return Ok(records);
            }
            records += 1;
        }
    }

    /// Take the read error that ended iteration early, if there was one.
    pub fn take_error(&mut self) -> Option<SearchError> {
        self.error.take().map(|source| SearchError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })
    }
}

impl Iterator for DictionarySource {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let reader = self.reader.as_mut()?;
        self.buf.clear();

        match reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => Some(String::from_utf8_lossy(&self.buf).trim().to_string()),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "wordlist read failed");
                self.reader = None;
                self.error = Some(e);
                None
            }
        }
    }
}
