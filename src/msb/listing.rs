use std::path::{Path, PathBuf};

use crate::consts::{DEFINITION_EXT, SIDECAR_EXT};

use super::MsbInfo;
use super::info::BLANK_INFO;

/// One candidate observation, as displayed and as submitted
#[derive(Debug, Clone)]
pub(crate) struct MsbRow {
    /// 1-based row number used by `send`
    pub(crate) number: usize,
    pub(crate) definition: PathBuf,
    pub(crate) file_name: String,
    pub(crate) info: Option<MsbInfo>,
}

impl MsbRow {
    pub(crate) fn metadata(&self) -> &MsbInfo {
        self.info.as_ref().unwrap_or(&BLANK_INFO)
    }
}

/// Find MSB definitions directly inside `directory`, sorted by file name.
pub(crate) fn list_msbs(directory: &Path) -> Vec<MsbRow> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&directory.to_string_lossy()),
        DEFINITION_EXT
    );

    let mut definitions: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(entries) => entries.flatten().filter(|p| p.is_file()).collect(),
        Err(e) => {
            tracing::warn!("Bad search pattern {}: {}", pattern, e);
            Vec::new()
        }
    };
    definitions.sort();

    definitions
        .into_iter()
        .enumerate()
        .map(|(i, definition)| {
            let file_name = definition
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let sidecar = definition.with_extension(SIDECAR_EXT);
            let info = MsbInfo::load(&sidecar);
            if info.is_none() {
                tracing::debug!("No metadata for {}", file_name);
            }
            MsbRow {
                number: i + 1,
                definition,
                file_name,
                info,
            }
        })
        .collect()
}
