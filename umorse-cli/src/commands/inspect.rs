use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fs;
use tracing::info;
use umorse_core::{
    constants::Spacing,
    output::{output, EventLog, OutputSummary},
    types::symbols_of,
    Event, OutputFlags, Symbol,
};

use super::read_input;

/// Symbol census of a code buffer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolCounts {
    pub nul: usize,
    pub dit: usize,
    pub dah: usize,
    pub end_char: usize,
}

/// Everything `inspect` reports about a code buffer
#[derive(Debug, Serialize)]
pub struct Inspection {
    pub bytes: usize,
    pub symbols: SymbolCounts,
    pub summary: OutputSummary,
    pub terminated: bool,
    pub events: Vec<Event>,
}

/// Analyse a code buffer without pacing
pub fn inspect(code: &[u8]) -> Inspection {
    let mut symbols = SymbolCounts::default();
    for symbol in code.iter().flat_map(|&byte| symbols_of(byte)) {
        match symbol {
            Symbol::Nul => symbols.nul += 1,
            Symbol::Dit => symbols.dit += 1,
            Symbol::Dah => symbols.dah += 1,
            Symbol::EndChar => symbols.end_char += 1,
        }
    }

    let mut log = EventLog::new();
    let summary = output(&mut log, code, OutputFlags::new(OutputFlags::NO_DELAY));
    let events = log.into_events();
    let terminated = events.last() == Some(&Event::Silence(Spacing::Stop));

    Inspection {
        bytes: code.len(),
        symbols,
        summary,
        terminated,
        events,
    }
}

pub fn execute(input: &str, output_path: Option<&str>) -> Result<()> {
    info!("Inspecting code: {}", input);

    let code = read_input(input)?;
    let report = inspect(&code);

    println!("\n=== Code Inspection ===");
    println!("Bytes:             {}", report.bytes);
    println!("Dit symbols:       {}", report.symbols.dit);
    println!("Dah symbols:       {}", report.symbols.dah);
    println!("Gap symbols:       {}", report.symbols.end_char);
    println!("Padding symbols:   {}", report.symbols.nul);
    println!("Pauses:            {}", report.summary.silences);
    println!();

    if report.terminated {
        println!("{}", "✓ Code ends with a stop".green().bold());
    } else {
        println!("{}", "✗ Code is not terminated".red().bold());
    }

    if let Some(output_path) = output_path {
        let json = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize inspection report")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Inspection report written to: {}", output_path);
    }

    Ok(())
}
