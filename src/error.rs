use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid time \"{input}\" (expected HH-MM-SS)")]
    InvalidTime { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unknown {kind} \"{input}\" (choose from: {choices})")]
    UnknownChoice {
        kind: &'static str,
        input: String,
        choices: String,
    },

    #[error("Date {input} has no snapshot directory")]
    UnavailableDate { input: String },

    #[error("Could not read {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No snapshot dates found under {}", .root.display())]
    NoDates { root: PathBuf },

    #[error("Error testing {name}\n{source}")]
    ToolCheck {
        name: &'static str,
        source: ToolError,
    },

    #[error("{0}")]
    Tool(#[from] ToolError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single external program invocation
#[derive(Debug, Error)]
pub(crate) enum ToolError {
    #[error("Could not find {name} ({program})\n{hint}")]
    NotFound {
        name: &'static str,
        program: String,
        hint: String,
    },

    #[error("Could not launch {name} ({program})\n{source}")]
    Spawn {
        name: &'static str,
        program: String,
        source: std::io::Error,
    },

    #[error("Command {command} returned {status}{}", captured(.output))]
    Failed {
        command: String,
        status: ExitStatus,
        output: String,
    },
}

fn captured(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!("\n{output}")
    }
}

/// Failure of one of the two submission steps
#[derive(Debug, Error)]
pub(crate) enum SubmitError {
    #[error("Could not translate observation.\n{0}")]
    Translate(#[source] ToolError),

    #[error(
        "Could not add observation to queue.\n\n{0}\n\nPlease check terminal window for messages."
    )]
    Enqueue(#[source] ToolError),
}
