//! Forwarding an MSB to the observing queue
//!
//! Submission is two external calls: the translator turns a definition into
//! a manifest, then the queue tool appends that manifest to the queue.

pub(crate) mod tool;

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::consts::{QUEUE_ACTION, QUEUE_TASK};
use crate::error::{AppError, SubmitError};

pub(crate) use tool::ExternalTool;

/// Anything that can forward an MSB definition to the queue
pub(crate) trait QueueSubmitter {
    fn submit(&self, definition: &Path) -> Result<(), SubmitError>;
}

/// The telescope queue reached through the translator and `ditscmd`
#[derive(Debug, Clone)]
pub(crate) struct OcsQueue {
    translator: ExternalTool,
    queue: ExternalTool,
}

impl OcsQueue {
    pub(crate) fn new(translator: ExternalTool, queue: ExternalTool) -> Self {
        Self { translator, queue }
    }

    /// Both programs must answer before any interactive state exists.
    pub(crate) fn check(&self) -> Result<(), AppError> {
        self.translator.health_check()?;
        self.queue.health_check()
    }

    /// Translate a definition, returning the manifest path the translator printed.
    ///
    /// The path is kept as raw bytes so a non-UTF-8 name reaches the queue unchanged.
    pub(crate) fn translate(&self, definition: &Path) -> Result<OsString, SubmitError> {
        let stdout = self
            .translator
            .run([definition.as_os_str()])
            .map_err(SubmitError::Translate)?;
        Ok(manifest_path(stdout.trim_ascii()))
    }

    pub(crate) fn enqueue(&self, manifest: &OsStr) -> Result<(), SubmitError> {
        self.queue
            .run([OsStr::new(QUEUE_TASK), OsStr::new(QUEUE_ACTION), manifest])
            .map(|_| ())
            .map_err(SubmitError::Enqueue)
    }
}

impl QueueSubmitter for OcsQueue {
    fn submit(&self, definition: &Path) -> Result<(), SubmitError> {
        let manifest = self.translate(definition)?;
        tracing::info!(
            "Translated {} to {}",
            definition.display(),
            manifest.to_string_lossy()
        );
        self.enqueue(&manifest)
    }
}

#[cfg(unix)]
fn manifest_path(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes.to_vec())
}

#[cfg(not(unix))]
fn manifest_path(bytes: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(bytes).into_owned())
}
