use crate::backend::DisplayRequest;
use crate::config::Config;
use crate::error::FatalResult;
use crate::presenter::{Presenter, StdioPresenter};
use log::error;
use std::any::Any;
use std::io::{Read, Write};
use std::panic::{self, PanicHookInfo};

/// Title used for panics shown by the hook.
pub const PANIC_TITLE: &str = "Panic";

/// Unwraps a result at the top-level boundary, showing the error when there is one.
///
/// Whether to keep going or exit afterwards is up to the caller.
pub fn report<T, R: Read, W: Write>(
    result: FatalResult<T>,
    presenter: &mut Presenter<R, W>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("{}", e);
            presenter.show(&e);
            None
        }
    }
}

/// Replaces the panic hook so a panic is also shown with the configured presenter. The previous
/// hook still runs first, so the usual message and backtrace end up on stderr.
pub fn install_panic_hook(config: Config) {
    install_panic_hook_with(move || StdioPresenter::from_config(&config));
}

/// Like [`install_panic_hook`], with a fresh presenter from `make_presenter` for every panic.
pub fn install_panic_hook_with<F, R, W>(make_presenter: F)
where
    F: Fn() -> Presenter<R, W> + Send + Sync + 'static,
    R: Read,
    W: Write,
{
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        previous(info);
        let message = panic_message(info);
        make_presenter().show_request(&DisplayRequest::new(PANIC_TITLE, &message));
    }));
}

fn panic_message(info: &PanicHookInfo) -> String {
    let payload = payload_text(info.payload());
    match info.location() {
        Some(location) => format!("{} ({})", payload, location),
        None => payload,
    }
}

fn payload_text(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use crate::error::FatalError;
    use std::io::{self, Cursor};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn console_presenter() -> Presenter<Cursor<Vec<u8>>, Vec<u8>> {
        Presenter::new(None, Console::new(Cursor::new(b"\n".to_vec()), Vec::new()))
    }

    #[test]
    fn test_report_passes_value_through() {
        let mut presenter = console_presenter();
        assert_eq!(report(Ok(7), &mut presenter), Some(7));
        assert!(presenter.console().writer().is_empty());
    }

    #[test]
    fn test_report_shows_error() {
        let mut presenter = console_presenter();
        let result: FatalResult<()> = Err(FatalError::opengl("context lost"));
        assert_eq!(report(result, &mut presenter), None);

        let output = String::from_utf8(presenter.console().writer().clone()).unwrap();
        assert!(output.contains("[OpenGL Error]: context lost"));
    }

    #[test]
    fn test_payload_text() {
        let static_str: Box<dyn Any + Send> = Box::new("bad state");
        assert_eq!(payload_text(static_str.as_ref()), "bad state");

        let owned: Box<dyn Any + Send> = Box::new(String::from("index 3 out of range"));
        assert_eq!(payload_text(owned.as_ref()), "index 3 out of range");

        let other: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(payload_text(other.as_ref()), "Unknown panic");
    }

    #[test]
    fn test_panic_hook_shows_one_notification() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        install_panic_hook_with(move || {
            Presenter::new(
                None,
                Console::new(Cursor::new(b"\n".to_vec()), writer.clone()),
            )
        });

        let result = panic::catch_unwind(|| -> () { panic!("worker died") });
        // Back to the default hook
        let _ = panic::take_hook();
        assert!(result.is_err());

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("An error has occurred!").count(), 1);
        assert!(output.contains("[Panic Error]: worker died ("));
        assert!(output.contains("report.rs:"));
        assert!(output.ends_with(")\n\n\nPress ENTER to continue..."));
    }
}
