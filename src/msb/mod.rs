//! Backup MSB definitions and their metadata sidecars

pub(crate) mod info;
pub(crate) mod listing;

pub(crate) use info::MsbInfo;
pub(crate) use listing::{MsbRow, list_msbs};
