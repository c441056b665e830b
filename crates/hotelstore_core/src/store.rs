//! Whole-file load/save primitive shared by all repositories.
//!
//! # Responsibility
//! - Read every line of a backing file into memory.
//! - Replace a backing file with a full in-memory collection.
//!
//! # Invariants
//! - A missing file loads as an empty collection, never as an error.
//! - `save` truncates first; each line is written with exactly one `\n`.
//! - File handles are dropped on every exit path, including errors.
//! - No rollback: a failed `save` leaves whatever was already flushed.

use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// I/O failure while reading or writing a backing file.
#[derive(Debug)]
pub enum StoreError {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}

/// Line-oriented view of one backing file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all lines, with trailing whitespace stripped.
    ///
    /// # Errors
    /// - `StoreError::Read` when the file exists but cannot be opened or is
    ///   not valid UTF-8.
    pub fn load(&self) -> StoreResult<Vec<String>> {
        let started_at = Instant::now();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "event=store_load module=store status=ok lines=0 missing=true path={}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.read_failed(started_at, err)),
        };

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|err| self.read_failed(started_at, err))?;
            lines.push(line.trim_end().to_string());
        }

        debug!(
            "event=store_load module=store status=ok lines={} duration_ms={} path={}",
            lines.len(),
            started_at.elapsed().as_millis(),
            self.path.display()
        );
        Ok(lines)
    }

    /// Overwrites the file with `lines`, one per line.
    ///
    /// A trailing line terminator already present on an item is not doubled.
    ///
    /// # Errors
    /// - `StoreError::Write` when creating, writing or flushing fails.
    pub fn save<S: AsRef<str>>(&self, lines: &[S]) -> StoreResult<()> {
        let started_at = Instant::now();

        match self.write_all(lines) {
            Ok(()) => {
                debug!(
                    "event=store_save module=store status=ok lines={} duration_ms={} path={}",
                    lines.len(),
                    started_at.elapsed().as_millis(),
                    self.path.display()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error duration_ms={} error_code=write_failed path={} error={}",
                    started_at.elapsed().as_millis(),
                    self.path.display(),
                    err
                );
                Err(StoreError::Write {
                    path: self.path.clone(),
                    source: err,
                })
            }
        }
    }

    fn write_all<S: AsRef<str>>(&self, lines: &[S]) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for line in lines {
            writer.write_all(line.as_ref().trim_end_matches(['\n', '\r']).as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    fn read_failed(&self, started_at: Instant, err: io::Error) -> StoreError {
        error!(
            "event=store_load module=store status=error duration_ms={} error_code=read_failed path={} error={}",
            started_at.elapsed().as_millis(),
            self.path.display(),
            err
        );
        StoreError::Read {
            path: self.path.clone(),
            source: err,
        }
    }
}
