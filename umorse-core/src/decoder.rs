//! Morse code to text decoding (not implemented)
//!
//! The code format loses information that a decoder would need: letter
//! case, the difference between tab and space, and the exact control
//! character of a stop. Compact mode also packs adjacent codes without
//! boundaries beyond their gap markers. [`decode`] is kept for API
//! completeness and consumes nothing.

use crate::error::MorseError;

#[cfg(feature = "logging")]
use tracing::debug;

/// Decode `code` into `text`
///
/// Always returns `Ok(0)` and leaves `text` untouched. A zero result does
/// not mean the code decodes to empty text.
pub fn decode(code: &[u8], text: &mut [u8]) -> Result<usize, MorseError> {
    #[cfg(feature = "logging")]
    debug!(
        "decode is not implemented ({} code bytes, {} text bytes)",
        code.len(),
        text.len()
    );

    let _ = (code, text);
    Ok(0)
}
