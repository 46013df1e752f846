use anyhow::{bail, Result};
use std::io;
use tracing::info;

use super::encode::encode_text;
use super::play::play_to;
use super::read_input;
use crate::{LayoutArg, PlayOptions};

/// Text to send, given inline or read from a file
pub fn message(text: Option<&str>, input: Option<&str>) -> Result<Vec<u8>> {
    match (text, input) {
        (Some(text), None) => Ok(text.as_bytes().to_vec()),
        (None, Some(input)) => read_input(input),
        (Some(_), Some(_)) => bail!("Give either --text or --input, not both"),
        (None, None) => bail!("Nothing to send: give --text or --input"),
    }
}

pub fn execute(
    text: Option<&str>,
    input: Option<&str>,
    layout: LayoutArg,
    capacity: usize,
    options: &PlayOptions,
) -> Result<()> {
    let message = message(text, input)?;
    let (code, summary) = encode_text(&message, layout, capacity)?;
    info!("Sending {} bytes as {} bytes of code", summary.consumed, summary.len);

    play_to(&code, options, io::stdout().lock())?;

    Ok(())
}
