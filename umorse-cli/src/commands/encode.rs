use anyhow::{Context, Result};
use bytes::Bytes;
use std::fs;
use tracing::{info, warn};
use umorse_core::encoder::{EncodeSummary, MorseEncoder};

use super::read_input;
use crate::LayoutArg;

/// Encode text into a code buffer of the given capacity
pub fn encode_text(text: &[u8], layout: LayoutArg, capacity: usize) -> Result<(Bytes, EncodeSummary)> {
    let (code, summary) = MorseEncoder::new(layout.into())
        .capacity(capacity)
        .encode_with_summary(text)
        .with_context(|| format!("Failed to encode into {} bytes", capacity))?;

    if summary.truncated {
        warn!(
            "Input truncated: encoded {} of {} bytes, raise --capacity to fit the rest",
            summary.consumed,
            text.len()
        );
    }

    Ok((code, summary))
}

pub fn execute(input: &str, output: Option<&str>, layout: LayoutArg, capacity: usize) -> Result<()> {
    info!("Encoding text from: {}", input);

    let text = read_input(input)?;
    info!("Input size: {} bytes", text.len());

    let (code, summary) = encode_text(&text, layout, capacity)?;
    info!("Encoded {} bytes of text into {} bytes ({:?})", summary.consumed, summary.len, layout);

    match output {
        Some(output_path) => {
            fs::write(output_path, &code)
                .with_context(|| format!("Failed to write output file: {}", output_path))?;
            info!("Code written to: {}", output_path);
        }
        None => println!("{}", hex::encode(&code)),
    }

    Ok(())
}
