//! Replaying encoded Morse code through an output device
//!
//! [`output`] walks a code buffer two bits at a time and drives a
//! [`MorseOutput`] implementation. Runs of `END_CHAR` symbols are folded
//! into a single [`Spacing`] class carried in the low nibble of the flags;
//! the caller's upper flag bits pass through to every event unchanged.

use crate::constants::{OutputFlags, Spacing};
use crate::types::{symbols_of, Event, Symbol};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

/// A device that can render Morse events
///
/// Implementors own whatever state they need (a writer, a GPIO pin, a
/// buzzer handle) and decide from `flags` whether and how long to pause.
pub trait MorseOutput {
    /// Render a short sound
    fn dit(&mut self, flags: OutputFlags);

    /// Render a long sound
    fn dah(&mut self, flags: OutputFlags);

    /// Render a pause; the spacing class is in `flags.spacing()`
    fn silence(&mut self, flags: OutputFlags);
}

impl<T: MorseOutput + ?Sized> MorseOutput for &mut T {
    fn dit(&mut self, flags: OutputFlags) {
        (**self).dit(flags)
    }

    fn dah(&mut self, flags: OutputFlags) {
        (**self).dah(flags)
    }

    fn silence(&mut self, flags: OutputFlags) {
        (**self).silence(flags)
    }
}

/// Event counts of one [`output`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSummary {
    /// Number of dits emitted
    pub dits: usize,
    /// Number of dahs emitted
    pub dahs: usize,
    /// Number of silence events emitted
    pub silences: usize,
}

/// Replay `code` through `out`
///
/// The spacing nibble of `flags` is cleared before use.
pub fn output<O: MorseOutput + ?Sized>(
    out: &mut O,
    code: &[u8],
    flags: OutputFlags,
) -> OutputSummary {
    let flags = flags.without_count();
    let mut summary = OutputSummary::default();
    let mut run = 0usize;

    #[cfg(feature = "logging")]
    debug!("Replaying {} code bytes, flags={:#04x}", code.len(), flags.as_u8());

    for &byte in code {
        for symbol in symbols_of(byte) {
            match symbol {
                Symbol::EndChar => run += 1,
                Symbol::Nul => {}
                Symbol::Dit | Symbol::Dah => {
                    flush(out, run, flags, &mut summary);
                    run = 0;
                    if symbol == Symbol::Dit {
                        out.dit(flags);
                        summary.dits += 1;
                    } else {
                        out.dah(flags);
                        summary.dahs += 1;
                    }
                    out.silence(flags.with_spacing(Spacing::Symbol));
                    summary.silences += 1;
                }
            }
        }
    }
    flush(out, run, flags, &mut summary);

    summary
}

/// Emit the pause for a pending run of gap markers
fn flush<O: MorseOutput + ?Sized>(
    out: &mut O,
    run: usize,
    flags: OutputFlags,
    summary: &mut OutputSummary,
) {
    let spacing = Spacing::from_silence_run(run);
    if spacing != Spacing::None {
        out.silence(flags.with_spacing(spacing));
        summary.silences += 1;
    }
}

/// Output device that records every event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consume the log, returning the events
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl MorseOutput for EventLog {
    fn dit(&mut self, _flags: OutputFlags) {
        self.events.push(Event::Dit);
    }

    fn dah(&mut self, _flags: OutputFlags) {
        self.events.push(Event::Dah);
    }

    fn silence(&mut self, flags: OutputFlags) {
        self.events.push(Event::Silence(flags.spacing()));
    }
}

/// Replay `code` and collect the events
pub fn events(code: &[u8]) -> Vec<Event> {
    let mut log = EventLog::new();
    output(&mut log, code, OutputFlags::new(OutputFlags::NO_DELAY));
    log.into_events()
}
