use crate::backend::{create_backend, DialogBackend, DisplayRequest};
use crate::config::Config;
use crate::console::Console;
use crate::error::{TitledError, UntitledError};
use log::{debug, trace, warn};
use std::io::{Read, Stdin, Stdout, Write};

/// Which path ended up showing a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Dialog,
    Console,
}

/// Shows fatal errors to the user. Tries the dialog backend first and falls back to the console
/// when there is none or it fails. Every show call completes exactly one of the two.
pub struct Presenter<R, W> {
    backend: Option<Box<dyn DialogBackend>>,
    console: Console<R, W>,
}

pub type StdioPresenter = Presenter<Stdin, Stdout>;

impl StdioPresenter {
    /// Builds the backend the config selects and attaches the process console.
    pub fn from_config(config: &Config) -> Self {
        let kind = config.resolved_backend();
        debug!("Dialog backend resolved to '{}'", kind);
        Presenter::new(
            create_backend(kind, &config.helper_program),
            Console::stdio(),
        )
    }

    /// Uses a caller supplied dialog with the process console.
    pub fn with_backend(backend: Box<dyn DialogBackend>) -> Self {
        Presenter::new(Some(backend), Console::stdio())
    }
}

impl<R: Read, W: Write> Presenter<R, W> {
    pub fn new(backend: Option<Box<dyn DialogBackend>>, console: Console<R, W>) -> Self {
        Self { backend, console }
    }

    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|b| b.name())
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Prints the notification and blocks until the user presses enter.
    pub fn show_console(&mut self, title: &str, message: &str) {
        self.console.show(title, message);
    }

    /// Tries to show a dialog. Without a backend this prints to the console instead and still
    /// reports success.
    pub fn show_gui(&mut self, title: &str, message: &str) -> bool {
        self.try_gui(&DisplayRequest::new(title, message)).is_some()
    }

    pub fn show(&mut self, error: &dyn TitledError) -> Notification {
        self.show_request(&DisplayRequest::new(error.title(), error.message()))
    }

    /// Shows an error from outside the taxonomy. The title defaults to "None".
    pub fn show_untitled(
        &mut self,
        error: &dyn std::error::Error,
        title: Option<&str>,
    ) -> Notification {
        self.show(&UntitledError::new(error, title))
    }

    pub fn show_request(&mut self, request: &DisplayRequest) -> Notification {
        if let Some(notification) = self.try_gui(request) {
            return notification;
        }

        trace!("Falling back to the console");
        self.console.show(request.title, request.message);
        Notification::Console
    }

    fn try_gui(&mut self, request: &DisplayRequest) -> Option<Notification> {
        let Some(backend) = &self.backend else {
            self.console.show(request.title, request.message);
            return Some(Notification::Console);
        };

        trace!("Showing '{}' error with the {} backend", request.title, backend.name());
        match backend.show_dialog(request) {
            Ok(()) => Some(Notification::Dialog),
            Err(e) => {
                warn!("Could not show error dialog: {e}");
                None
            }
        }
    }
}
