use std::ffi::OsStr;
use std::io::ErrorKind;
use std::process::{Command, Stdio};

use crate::error::{AppError, ToolError};

/// An external program the tool depends on
#[derive(Debug, Clone)]
pub(crate) struct ExternalTool {
    /// Human name used in diagnostics
    pub(crate) name: &'static str,
    pub(crate) program: String,
    health_args: &'static [&'static str],
    setup_hint: &'static str,
}

impl ExternalTool {
    pub(crate) fn translator(program: impl Into<String>) -> Self {
        Self {
            name: "the JCMT translator",
            program: program.into(),
            health_args: &["--version"],
            setup_hint: "Please source the JCMT setup scripts:\n    /jcmt_sw/etc/cshrc\n    /jcmt_sw/etc/login",
        }
    }

    pub(crate) fn queue(program: impl Into<String>) -> Self {
        Self {
            name: "ditscmd",
            program: program.into(),
            health_args: &["-h"],
            setup_hint: "Please source the ITS setup scripts:\n    /jac_sw/itsroot/etc/cshrc\n    /jac_sw/itsroot/etc/login",
        }
    }

    /// Run the program to completion and return its raw standard output.
    ///
    /// Only the exit status decides success. A non-zero status is an error
    /// carrying everything the program printed.
    pub(crate) fn run<I, S>(&self, args: I) -> Result<Vec<u8>, ToolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let rendered = render_command(&command);
        tracing::debug!("Running {}", rendered);

        let output = command.output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ToolError::NotFound {
                    name: self.name,
                    program: self.program.clone(),
                    hint: self.setup_hint.to_string(),
                }
            } else {
                ToolError::Spawn {
                    name: self.name,
                    program: self.program.clone(),
                    source: e,
                }
            }
        })?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(ToolError::Failed {
                command: rendered,
                status: output.status,
                output: combined_output(&output.stdout, &output.stderr),
            })
        }
    }

    /// Confirm the program can be launched and answers its help/version call.
    pub(crate) fn health_check(&self) -> Result<(), AppError> {
        match self.run(self.health_args) {
            Ok(_) => Ok(()),
            Err(e @ (ToolError::NotFound { .. } | ToolError::Spawn { .. })) => Err(e.into()),
            Err(source) => Err(AppError::ToolCheck {
                name: self.name,
                source,
            }),
        }
    }
}

/// Stdout then stderr, one line apart, for error messages
fn combined_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(stdout).into_owned();
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&String::from_utf8_lossy(stderr));
    text.trim().to_string()
}

fn render_command(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
