use log::warn;
use std::io::{self, Read, Stdin, Stdout, Write};

pub const PROMPT: &str = "Press ENTER to continue...";

/// Renders the console notification block, without the acknowledgment read.
pub fn format_notification(title: &str, message: &str) -> String {
    format!(
        "An error has occurred!\n[{} Error]: {}\n\n\n{}",
        title, message, PROMPT
    )
}

/// The console fallback. Writes the notification and blocks until the user presses enter.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

/// Holds the stdin handle, not its lock. The lock is only taken while reading the acknowledgment,
/// so several stdio consoles can exist at once.
pub type StdioConsole = Console<Stdin, Stdout>;

impl StdioConsole {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: Read, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Never fails. Write and read errors are logged and otherwise ignored, and end of input
    /// counts as an acknowledgment.
    pub fn show(&mut self, title: &str, message: &str) {
        let block = format_notification(title, message);
        if let Err(e) = self
            .writer
            .write_all(block.as_bytes())
            .and_then(|_| self.writer.flush())
        {
            warn!("Failed to write error notification to console: {e}");
        }

        if let Err(e) = read_acknowledgment(&mut self.reader) {
            warn!("Failed to read acknowledgment from console: {e}");
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// Reads up to and including the next newline. Goes byte by byte so input after the line stays
/// unread.
fn read_acknowledgment<R: Read>(reader: &mut R) -> io::Result<()> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(()),
            Ok(_) if byte[0] == b'\n' => return Ok(()),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, Cursor};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_exact_format() {
        let mut console = Console::new(Cursor::new(b"\n".to_vec()), Vec::new());
        console.show("Networking", "connection refused");
        assert_eq!(
            String::from_utf8(console.writer().clone()).unwrap(),
            "An error has occurred!\n[Networking Error]: connection refused\n\n\nPress ENTER to continue..."
        );
    }

    #[test]
    fn test_consumes_exactly_one_line() {
        let mut console = Console::new(Cursor::new(b"first\nsecond\n".to_vec()), Vec::new());
        console.show("Init", "boom");

        let (mut reader, _) = console.into_parts();
        let mut rest = String::new();
        reader.read_line(&mut rest).unwrap();
        assert_eq!(rest, "second\n");
    }

    #[test]
    fn test_end_of_input_acknowledges() {
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        console.show("Render", "");
        assert!(String::from_utf8(console.writer().clone())
            .unwrap()
            .contains("[Render Error]: \n"));
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_stdio_consoles_do_not_hold_stdin() {
        let _held = Console::stdio();

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _second = Console::stdio();
            let _ = tx.send(());
        });

        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut console = Console::new(Cursor::new(b"\n".to_vec()), BrokenWriter);
        console.show("Vulkan", "no device");
    }
}
