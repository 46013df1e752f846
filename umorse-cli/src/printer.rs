//! Console output device
//!
//! Prints `.` for a dit and `_` for a dah. Pauses print as nothing, a
//! space, ` / ` or a newline depending on their length, and the printer
//! sleeps in real time unless the no-delay flag is set.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use umorse_core::{MorseOutput, OutputFlags, Spacing, Timing};

/// [`MorseOutput`] that writes Morse code as text
pub struct ConsolePrinter<W: Write> {
    writer: W,
    timing: Timing,
    error: Option<io::Error>,
}

impl<W: Write> ConsolePrinter<W> {
    /// Create a printer writing to `writer`
    pub fn new(writer: W, timing: Timing) -> Self {
        Self {
            writer,
            timing,
            error: None,
        }
    }

    /// Flush and return the writer, or the first write error seen
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn emit(&mut self, text: &str, flags: OutputFlags) {
        if self.error.is_some() || text.is_empty() {
            return;
        }
        let mut result = self.writer.write_all(text.as_bytes());
        if result.is_ok() && !flags.no_delay() {
            result = self.writer.flush();
        }
        if let Err(err) = result {
            self.error = Some(err);
        }
    }

    fn pause(&self, duration: Duration, flags: OutputFlags) {
        if !flags.no_delay() && !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

impl<W: Write> MorseOutput for ConsolePrinter<W> {
    fn dit(&mut self, flags: OutputFlags) {
        self.emit(".", flags);
        self.pause(self.timing.dit, flags);
    }

    fn dah(&mut self, flags: OutputFlags) {
        self.emit("_", flags);
        self.pause(self.timing.dah(), flags);
    }

    fn silence(&mut self, flags: OutputFlags) {
        let text = match flags.spacing() {
            Spacing::Stop => "\n",
            Spacing::Word => " / ",
            Spacing::Character => " ",
            Spacing::Symbol | Spacing::None => "",
        };
        self.emit(text, flags);
        self.pause(self.timing.pause_for_count(flags.count()), flags);
    }
}
