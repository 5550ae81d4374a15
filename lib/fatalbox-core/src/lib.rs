//! Shows fatal errors to the user. A dialog is tried first and the console is the fallback.

pub mod backend;
pub mod config;
pub mod console;
pub mod error;
pub mod paths;
pub mod presenter;
mod report;

pub use backend::{BackendKind, DialogBackend, DialogError, DialogResult, DisplayRequest};
pub use config::Config;
pub use console::Console;
pub use error::{ErrorKind, FatalError, FatalResult, TitledError, UntitledError, DEFAULT_TITLE};
pub use presenter::{Notification, Presenter, StdioPresenter};
pub use report::{install_panic_hook, install_panic_hook_with, report, PANIC_TITLE};

pub fn version() -> &'static str {
    option_env!("VERSION").unwrap_or("v0.0.0-dev")
}
