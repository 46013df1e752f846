pub mod encode;
pub mod inspect;
pub mod play;
pub mod send;

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;

/// Read a whole input file, or stdin when the path is `-`
pub(crate) fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .with_context(|| "Failed to read from stdin")?;
        Ok(data)
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}
