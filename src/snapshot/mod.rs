//! Snapshot tree lookup
//!
//! Layout: `root/YYYY-MM-DD/HH-MM-SS/<band>/<instrument>/<query>/<name>.xml`

pub(crate) mod catalog;
pub(crate) mod slot;
pub(crate) mod tree;

pub(crate) use catalog::{Band, Choice, Instrument, QueryType};
pub(crate) use tree::{SearchOutcome, Selection, SnapshotTree};
