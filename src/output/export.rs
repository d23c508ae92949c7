//! Destinations for share text
//!
//! Exporting is a side effect only; a failure is reported to the player and
//! never touches the session.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Somewhere share text can be sent
pub trait ExportSink {
    /// Short description for user-facing messages
    fn describe(&self) -> String;

    /// # Errors
    /// Returns an error if the text could not be delivered.
    fn export(&mut self, text: &str) -> io::Result<()>;
}

/// Print to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ExportSink for StdoutSink {
    fn describe(&self) -> String {
        "stdout".to_string()
    }

    fn export(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}

/// Write to a file, replacing its contents
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExportSink for FileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn export(&mut self, text: &str) -> io::Result<()> {
        fs::write(&self.path, text)
    }
}

/// Copy to the terminal's clipboard with an OSC 52 escape sequence
///
/// Terminals that do not support OSC 52 silently ignore the sequence.
#[derive(Debug)]
pub struct Osc52Sink<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Sink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Osc52Sink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

/// The OSC 52 "set clipboard" sequence for `text`
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> ExportSink for Osc52Sink<W> {
    fn describe(&self) -> String {
        "clipboard".to_string()
    }

    fn export(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(osc52_sequence(text).as_bytes())?;
        self.writer.flush()
    }
}
