//! Snapshot pipeline shared by the file-backed repositories.
//!
//! # Invariants
//! - Snapshots are decoded from a fresh read on every call.
//! - Malformed and blank lines are skipped; the rest keep file order.
//! - A read failure degrades to an empty snapshot.
//! - `apply` persists only when the transform returns a new collection.

use crate::codec::{decode, encode, Record};
use crate::repo::{Outcome, RepoResult, Transition};
use crate::store::FileStore;
use log::{debug, error, info, warn};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

pub(crate) struct FlatFile<R> {
    store: FileStore,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> FlatFile<R> {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: FileStore::new(path),
            _record: PhantomData,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        self.store.path()
    }

    /// Loads and decodes all well-formed records.
    pub(crate) fn snapshot(&self) -> Vec<R> {
        let lines = match self.store.load() {
            Ok(lines) => lines,
            Err(err) => {
                error!(
                    "event=snapshot_load module=repo status=degraded entity={} error={}",
                    R::ENTITY.as_str(),
                    err
                );
                return Vec::new();
            }
        };

        let mut records = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            match decode::<R>(line) {
                Ok(record) => records.push(record),
                Err(err) => warn!(
                    "event=record_decode module=repo status=skipped entity={} line_no={} error={}",
                    R::ENTITY.as_str(),
                    index + 1,
                    err
                ),
            }
        }
        records
    }

    /// Rewrites the whole backing file from `records`.
    pub(crate) fn persist(&self, records: &[R]) -> RepoResult<()> {
        let lines: Vec<String> = records.iter().map(encode).collect();
        self.store.save(&lines)?;
        Ok(())
    }

    /// Runs one read → transform → write cycle.
    pub(crate) fn apply(
        &self,
        operation: &'static str,
        transform: impl FnOnce(Vec<R>) -> Transition<R>,
    ) -> RepoResult<Outcome> {
        let Transition { outcome, next } = transform(self.snapshot());

        match next {
            Some(records) => {
                self.persist(&records)?;
                info!(
                    "event=repo_mutation module=repo status=ok entity={} op={} outcome={} records={}",
                    R::ENTITY.as_str(),
                    operation,
                    outcome.as_str(),
                    records.len()
                );
            }
            None => debug!(
                "event=repo_mutation module=repo status=rejected entity={} op={} outcome={}",
                R::ENTITY.as_str(),
                operation,
                outcome.as_str()
            ),
        }

        Ok(outcome)
    }
}
