use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use thiserror::Error;

/// The one notice shown for any copy failure.
pub const COPY_FAILED_NOTICE: &str = "Copy failed, please try again later.";

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard is reachable from this host.
    #[error("Clipboard unavailable")]
    Unavailable,
    /// The write was attempted and rejected.
    #[error("Clipboard write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Host services the page relies on but does not implement.
pub trait Platform {
    /// Start the native print flow. Nothing is returned.
    fn print(&mut self);
    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;
    /// Blocking user-visible notice.
    fn notify(&mut self, message: &str);
}

/// Platform for the command-line shell.
///
/// - print opens the written page in the system browser
/// - the clipboard is reached with an OSC 52 escape sequence when stdout is a terminal
/// - notices go to stderr
#[derive(Debug, Default)]
pub struct TerminalPlatform {
    page: Option<PathBuf>,
}

impl TerminalPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page file handed to the browser by [`Platform::print`].
    pub fn set_page(&mut self, page: PathBuf) {
        self.page = Some(page);
    }
}

/// OSC 52 "set clipboard" sequence carrying `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl Platform for TerminalPlatform {
    fn print(&mut self) {
        let Some(page) = self.page.clone() else {
            self.notify("Nothing to print: write the page to a file with --out first.");
            return;
        };
        if let Err(e) = open::that(&page) {
            tracing::warn!(path = %page.display(), error = %e, "Failed to open page for printing");
            eprintln!("Could not open {} for printing: {}", page.display(), e);
        }
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(ClipboardError::Unavailable);
        }
        stdout.write_all(osc52_sequence(text).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}
