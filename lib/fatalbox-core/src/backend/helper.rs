use crate::backend::{DialogBackend, DialogError, DialogResult, DisplayRequest};
use log::{debug, trace};
use std::io;
use std::process::{Command, Stdio};

pub const DEFAULT_HELPER_PROGRAM: &str = "zenity";

/// Exit status a shell reports when the command could not be found.
const EXIT_NOT_FOUND: i32 = 127;

/// Shows the dialog by running an external program, zenity by default.
///
/// Only a missing program counts as a failure. Any exit status other than 127, including other
/// non-zero ones, is taken as "the user saw it".
#[derive(Debug, Clone)]
pub struct HelperBackend {
    program: String,
}

impl HelperBackend {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, request: &DisplayRequest) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("--error")
            .arg(format!("--title={}", request.caption()))
            .arg(format!("--text={}", request.message))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Default for HelperBackend {
    fn default() -> Self {
        Self::new(DEFAULT_HELPER_PROGRAM)
    }
}

impl DialogBackend for HelperBackend {
    fn name(&self) -> &'static str {
        "helper"
    }

    fn show_dialog(&self, request: &DisplayRequest) -> DialogResult<()> {
        trace!("Running '{}' to show the error dialog", self.program);
        let status = match self.command(request).status() {
            Ok(status) => status,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DialogError::HelperNotFound(self.program.clone()))
            }
            Err(e) => return Err(e.into()),
        };

        debug!("'{}' exited with {}", self.program, status);
        check_exit_code(&self.program, status.code())
    }
}

/// A process killed by a signal has no exit code and counts as shown.
fn check_exit_code(program: &str, code: Option<i32>) -> DialogResult<()> {
    match code {
        Some(EXIT_NOT_FOUND) => Err(DialogError::HelperNotFound(program.to_owned())),
        _ => Ok(()),
    }
}
