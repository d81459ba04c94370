use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::msb::{MsbRow, list_msbs};
use crate::utils::{is_date_label, is_time_slot_label};

use super::catalog::{Band, Choice, Instrument, QueryType};
use super::slot::resolve_time_slot;

/// What the operator is searching for
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Selection {
    pub(crate) date: String,
    pub(crate) band: Band,
    pub(crate) instrument: Instrument,
    pub(crate) query: QueryType,
}

/// Result of one search; `rows` is empty when nothing was found
#[derive(Debug)]
pub(crate) struct SearchOutcome {
    pub(crate) directory: PathBuf,
    pub(crate) time_slot: String,
    pub(crate) rows: Vec<MsbRow>,
}

/// Read-only view of a backup MSB directory
#[derive(Debug, Clone)]
pub(crate) struct SnapshotTree {
    root: PathBuf,
}

impl SnapshotTree {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    /// Date directories, oldest first
    pub(crate) fn dates(&self) -> Result<Vec<String>, AppError> {
        list_subdirs(&self.root, is_date_label)
    }

    /// Time-slot directories of `date`, earliest first
    pub(crate) fn time_slots(&self, date: &str) -> Result<Vec<String>, AppError> {
        list_subdirs(&self.root.join(date), is_time_slot_label)
    }

    pub(crate) fn msb_directory(&self, selection: &Selection, time_slot: &str) -> PathBuf {
        self.root
            .join(&selection.date)
            .join(time_slot)
            .join(selection.band.segment())
            .join(selection.instrument.segment())
            .join(selection.query.segment())
    }

    /// Resolve the time slot for `reference` and list the MSBs stored there.
    pub(crate) fn search(
        &self,
        selection: &Selection,
        reference: &str,
    ) -> Result<SearchOutcome, AppError> {
        let slots = self.time_slots(&selection.date)?;
        let time_slot = resolve_time_slot(&slots, reference);
        let directory = self.msb_directory(selection, &time_slot);
        tracing::debug!(
            "Reference {} resolved to slot {} among {} slot(s): {}",
            reference,
            time_slot,
            slots.len(),
            directory.display()
        );

        let rows = if directory.is_dir() {
            list_msbs(&directory)
        } else {
            Vec::new()
        };

        Ok(SearchOutcome {
            directory,
            time_slot,
            rows,
        })
    }
}

fn list_subdirs(dir: &Path, accept: fn(&str) -> bool) -> Result<Vec<String>, AppError> {
    let entries = fs::read_dir(dir).map_err(|source| AppError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| accept(name.as_str()))
        .collect();
    names.sort();
    Ok(names)
}
