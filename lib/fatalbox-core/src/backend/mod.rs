pub use helper::*;
pub use toolkit::*;

mod helper;
mod toolkit;

use cfg_if::cfg_if;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

cfg_if! {
    if #[cfg(target_os = "windows")] {
        mod win32;
        pub use win32::WindowsBackend;
    }
}

/// One notification waiting to be shown. Lives only for the duration of a single show call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRequest<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

impl<'a> DisplayRequest<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }

    /// Window caption used by the native and helper dialogs.
    pub fn caption(&self) -> String {
        format!("{} Error", self.title)
    }
}

#[derive(Debug, Error)]
pub enum DialogError {
    #[error("helper program '{0}' was not found")]
    HelperNotFound(String),
    #[error("failed to run dialog: {0}")]
    Io(#[from] std::io::Error),
    #[error("dialog toolkit error: {0}")]
    Toolkit(String),
}

pub type DialogResult<T> = Result<T, DialogError>;

/// A mechanism able to put a modal error dialog in front of the user.
///
/// Returning an error only means the dialog could not be shown; the presenter then falls back
/// to the console.
pub trait DialogBackend {
    fn name(&self) -> &'static str;

    /// Should block until the dialog is dismissed.
    fn show_dialog(&self, request: &DisplayRequest) -> DialogResult<()>;
}

/// Which dialog mechanism to use. Selected once, when the presenter is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Pick the platform default
    #[default]
    Auto,
    /// No built-in dialog, the caller supplies its own backend
    Custom,
    /// Never show a dialog, always print to the console
    ConsoleOnly,
    /// Cross-platform toolkit message box
    Toolkit,
    /// The operating system's own message box (Windows)
    Native,
    /// Run an external helper program such as zenity
    Helper,
}

impl BackendKind {
    pub const ALL: [BackendKind; 6] = [
        BackendKind::Auto,
        BackendKind::Custom,
        BackendKind::ConsoleOnly,
        BackendKind::Toolkit,
        BackendKind::Native,
        BackendKind::Helper,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Auto => "auto",
            BackendKind::Custom => "custom",
            BackendKind::ConsoleOnly => "console-only",
            BackendKind::Toolkit => "toolkit",
            BackendKind::Native => "native",
            BackendKind::Helper => "helper",
        }
    }

    /// Resolves `Auto` to a concrete backend for the host platform. `no_hacky_fallback` turns the
    /// helper program off whether it was picked explicitly or by default. Other explicit choices
    /// are kept.
    pub fn resolve(self, no_hacky_fallback: bool) -> BackendKind {
        match self {
            BackendKind::Helper if no_hacky_fallback => return BackendKind::ConsoleOnly,
            BackendKind::Auto => {}
            kind => return kind,
        }

        if cfg!(target_os = "windows") {
            BackendKind::Native
        } else if cfg!(target_os = "linux") && !no_hacky_fallback {
            BackendKind::Helper
        } else {
            BackendKind::ConsoleOnly
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        BackendKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| format!("Unknown backend '{}'", s))
    }
}

/// Builds the dialog backend for an already resolved kind.
///
/// `None` means there is no dialog to try, and every notification goes to the console.
pub fn create_backend(kind: BackendKind, helper_program: &str) -> Option<Box<dyn DialogBackend>> {
    let backend: Option<Box<dyn DialogBackend>> = match kind {
        BackendKind::Auto => {
            warn!("Dialog backend was not resolved, using the console");
            None
        }
        BackendKind::Custom => {
            debug!("No built-in dialog backend selected, a custom backend must be supplied");
            None
        }
        BackendKind::ConsoleOnly => None,
        BackendKind::Toolkit => Some(Box::new(ToolkitBackend::new())),
        BackendKind::Helper => Some(Box::new(HelperBackend::new(helper_program))),
        BackendKind::Native => native_backend(),
    };

    if let Some(backend) = &backend {
        debug!("Using '{}' dialog backend", backend.name());
    }
    backend
}

cfg_if! {
    if #[cfg(target_os = "windows")] {
        fn native_backend() -> Option<Box<dyn DialogBackend>> {
            Some(Box::new(WindowsBackend))
        }
    } else {
        fn native_backend() -> Option<Box<dyn DialogBackend>> {
            warn!("No native dialog on this platform, using the console");
            None
        }
    }
}
