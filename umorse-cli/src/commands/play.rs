use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::info;
use umorse_core::output::{output, OutputSummary};

use super::read_input;
use crate::printer::ConsolePrinter;
use crate::PlayOptions;

/// Replay a code buffer as text into `writer`
pub fn play_to<W: Write>(code: &[u8], options: &PlayOptions, writer: W) -> Result<(OutputSummary, W)> {
    let timing = options.timing()?;
    let mut printer = ConsolePrinter::new(writer, timing);
    let summary = output(&mut printer, code, options.flags());
    let writer = printer.finish().with_context(|| "Failed to write Morse output")?;
    Ok((summary, writer))
}

pub fn execute(input: &str, options: &PlayOptions) -> Result<()> {
    info!("Playing code from: {}", input);

    let code = read_input(input)?;
    info!("Code size: {} bytes", code.len());

    let (summary, _) = play_to(&code, options, io::stdout().lock())?;
    info!(
        "Played {} dits, {} dahs and {} pauses",
        summary.dits, summary.dahs, summary.silences
    );

    Ok(())
}
