//! Library entry for umorse-cli used by integration tests and embedding.

pub mod commands;
pub mod printer;

// Re-export commands for convenience
pub use commands::*;

use anyhow::Result;
use umorse_core::{Layout, OutputFlags, Timing};

/// Code layout selectable on the command line
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LayoutArg {
    /// Whole bytes per character, explicit gap bytes
    #[default]
    Aligned,
    /// Two bits per symbol, packed across bytes
    Compact,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Aligned => Layout::Aligned,
            LayoutArg::Compact => Layout::Compact,
        }
    }
}

/// Pacing options shared by play and send
#[derive(Clone, Copy, Debug, Default, clap::Args)]
pub struct PlayOptions {
    /// Print without real-time pauses
    #[arg(long)]
    pub no_delay: bool,

    /// Speed in words per minute
    #[arg(long, conflicts_with = "dit_ms")]
    pub wpm: Option<u32>,

    /// Length of a dit in milliseconds
    #[arg(long)]
    pub dit_ms: Option<u64>,
}

impl PlayOptions {
    /// Options for printing without pauses
    pub fn instant() -> Self {
        Self {
            no_delay: true,
            ..Self::default()
        }
    }

    /// Timing selected by the options, falling back to the default dit length
    pub fn timing(&self) -> Result<Timing> {
        let timing = match (self.wpm, self.dit_ms) {
            (Some(wpm), _) => Timing::from_wpm(wpm)?,
            (None, Some(ms)) => Timing::from_dit_millis(ms)?,
            (None, None) => Timing::default(),
        };
        Ok(timing)
    }

    /// Output flags selected by the options
    pub fn flags(&self) -> OutputFlags {
        if self.no_delay {
            OutputFlags::new(OutputFlags::NO_DELAY)
        } else {
            OutputFlags::default()
        }
    }
}
