//! Text to Morse code encoding
//!
//! Text is encoded into a caller-owned code buffer under one of two layouts:
//!
//! - [`Layout::Aligned`]: every character code takes one or two whole bytes,
//!   followed by a separator byte holding `END_CHAR` unless the code already
//!   ends in a gap.
//! - [`Layout::Compact`]: character codes are packed two bits at a time,
//!   sharing bytes with their neighbours.
//!
//! The last [`THRESHOLD`] bytes of the buffer are kept free while the input
//! is encoded; the closing stop sequence always fits into them.

use crate::classify::char_code;
use crate::constants::{Layout, DEFAULT_CAPACITY, SHIFT, SLOTS_PER_BYTE, THRESHOLD};
use crate::error::MorseError;
use crate::types::{CharCode, Symbol};
use bytes::{Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Write position at 2-bit granularity
///
/// `slot` is always in `0..4`; filling the last slot of a byte moves the
/// cursor to slot 0 of the next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotCursor {
    byte: usize,
    slot: u8,
}

impl SlotCursor {
    /// Cursor at the start of a buffer
    pub const fn new() -> Self {
        Self { byte: 0, slot: 0 }
    }

    /// Cursor at slot 0 of `byte`
    pub const fn at(byte: usize) -> Self {
        Self { byte, slot: 0 }
    }

    /// Index of the byte the next symbol goes to
    pub const fn byte(&self) -> usize {
        self.byte
    }

    /// Slot within the current byte
    pub const fn slot(&self) -> u8 {
        self.slot
    }

    /// Bit shift of the current slot
    pub const fn shift(&self) -> u32 {
        self.slot as u32 * SHIFT
    }

    /// Number of bytes touched so far, counting a partly filled byte
    pub const fn occupied(&self) -> usize {
        self.byte + (self.slot > 0) as usize
    }

    /// Move to the next slot, wrapping to the next byte
    pub fn advance(&mut self) {
        self.slot += 1;
        if self.slot == SLOTS_PER_BYTE {
            self.byte += 1;
            self.slot = 0;
        }
    }

    /// Cursor position after `slots` more symbols
    pub const fn advanced_by(&self, slots: usize) -> Self {
        let total = self.slot as usize + slots;
        Self {
            byte: self.byte + total / SLOTS_PER_BYTE as usize,
            slot: (total % SLOTS_PER_BYTE as usize) as u8,
        }
    }
}

/// Append a character code in aligned layout, returning the next free byte
///
/// # Panics
///
/// Panics if the code does not fit into `code` starting at `pos`.
pub fn append_aligned(cc: CharCode, code: &mut [u8], pos: usize) -> usize {
    debug_assert!(pos < code.len());

    #[cfg(feature = "logging")]
    debug!("cc={:#06x}, pos={}", cc.as_u16(), pos);

    let mut pos = pos;
    let raw = cc.as_u16();
    code[pos] = (raw & 0xFF) as u8;
    pos += 1;
    if cc.is_wide() {
        code[pos] = (raw >> 8) as u8;
        pos += 1;
    }
    if !cc.ends_with_gap() {
        code[pos] = Symbol::EndChar.bits();
        pos += 1;
    }
    pos
}

/// Append a character code in compact layout, returning the advanced cursor
///
/// `code` must be zeroed beyond `cursor`; symbols are OR-ed into place.
///
/// # Panics
///
/// Panics if the code does not fit into `code` starting at `cursor`.
pub fn append_compact(cc: CharCode, code: &mut [u8], cursor: SlotCursor) -> SlotCursor {
    debug_assert!(cursor.byte() < code.len());

    #[cfg(feature = "logging")]
    debug!(
        "cc={:#06x}, pos={}, slot={}",
        cc.as_u16(),
        cursor.byte(),
        cursor.slot()
    );

    let mut cursor = cursor;
    for symbol in cc.symbols() {
        code[cursor.byte()] |= symbol.bits() << cursor.shift();
        cursor.advance();
    }
    if !cc.ends_with_gap() {
        code[cursor.byte()] |= Symbol::EndChar.bits() << cursor.shift();
        cursor.advance();
    }
    cursor
}

/// Number of 2-bit slots a character code takes, separator included
fn slots_needed(cc: CharCode) -> usize {
    cc.symbol_count() as usize + (!cc.ends_with_gap()) as usize
}

/// Number of bytes a character code takes in aligned layout
fn bytes_needed(cc: CharCode) -> usize {
    1 + cc.is_wide() as usize + (!cc.ends_with_gap()) as usize
}

/// Writes character codes into a code buffer under one layout
struct CodeWriter<'a> {
    code: &'a mut [u8],
    layout: Layout,
    cursor: SlotCursor,
}

impl<'a> CodeWriter<'a> {
    fn new(code: &'a mut [u8], layout: Layout) -> Self {
        Self {
            code,
            layout,
            cursor: SlotCursor::new(),
        }
    }

    /// Bytes occupied once `cc` has been appended
    fn occupied_after(&self, cc: CharCode) -> usize {
        match self.layout {
            Layout::Aligned => self.cursor.byte() + bytes_needed(cc),
            Layout::Compact => self.cursor.advanced_by(slots_needed(cc)).occupied(),
        }
    }

    fn append(&mut self, cc: CharCode) {
        self.cursor = match self.layout {
            Layout::Aligned => {
                SlotCursor::at(append_aligned(cc, self.code, self.cursor.byte()))
            }
            Layout::Compact => append_compact(cc, self.code, self.cursor),
        };
    }

    fn position(&self) -> usize {
        self.cursor.byte()
    }
}

/// Outcome of an encode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Length of the encoded code in bytes
    pub len: usize,
    /// Number of input bytes consumed (ignored bytes included)
    pub consumed: usize,
    /// True if input was dropped because the buffer was full
    pub truncated: bool,
}

/// Encode `text` into `code`, reporting how much of the input fit
///
/// The buffer is zeroed first. Input that does not fit is dropped; the
/// returned code is always closed by a stop sequence and never longer than
/// `code.len()`.
pub fn encode_detailed(
    text: &[u8],
    code: &mut [u8],
    layout: Layout,
) -> Result<EncodeSummary, MorseError> {
    if code.len() < THRESHOLD {
        return Err(MorseError::CapacityTooSmall {
            capacity: code.len(),
            required: THRESHOLD,
        });
    }

    code.fill(0);
    let limit = code.len() - THRESHOLD;
    let mut writer = CodeWriter::new(code, layout);
    let mut consumed = 0;
    let mut truncated = false;

    for &c in text {
        let Some(cc) = char_code(c) else {
            consumed += 1;
            continue;
        };
        if writer.occupied_after(cc) > limit {
            truncated = true;
            break;
        }
        writer.append(cc);
        consumed += 1;
    }

    #[cfg(feature = "logging")]
    {
        if truncated {
            warn!(
                "Code buffer full: encoded {} of {} input bytes",
                consumed,
                text.len()
            );
        }
    }

    writer.append(CharCode::TERMINATOR);

    Ok(EncodeSummary {
        len: writer.position() + 1,
        consumed,
        truncated,
    })
}

/// Encode `text` into `code` using `layout`, returning the encoded length
pub fn encode(text: &[u8], code: &mut [u8], layout: Layout) -> Result<usize, MorseError> {
    encode_detailed(text, code, layout).map(|summary| summary.len)
}

/// Encode `text` into `code` selecting the layout from a raw flag byte
pub fn encode_with_flag(text: &[u8], code: &mut [u8], flag: u8) -> Result<usize, MorseError> {
    encode(text, code, Layout::from_flag(flag))
}

/// Encode `text` into `code` in aligned layout
pub fn encode_aligned(text: &[u8], code: &mut [u8]) -> Result<usize, MorseError> {
    encode(text, code, Layout::Aligned)
}

/// Encode `text` into `code` in compact layout
pub fn encode_compact(text: &[u8], code: &mut [u8]) -> Result<usize, MorseError> {
    encode(text, code, Layout::Compact)
}

/// Builder for encoding text into an owned buffer
#[derive(Debug, Clone, Copy)]
pub struct MorseEncoder {
    layout: Layout,
    capacity: usize,
}

impl MorseEncoder {
    /// Create a new encoder for the given layout
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Set the code buffer capacity in bytes
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Encode `text`, returning the code and the encode summary
    pub fn encode_with_summary(&self, text: &[u8]) -> Result<(Bytes, EncodeSummary), MorseError> {
        let mut buf = BytesMut::zeroed(self.capacity);
        let summary = encode_detailed(text, &mut buf, self.layout)?;
        buf.truncate(summary.len);
        Ok((buf.freeze(), summary))
    }

    /// Encode `text` into a new buffer
    pub fn encode(&self, text: &[u8]) -> Result<Bytes, MorseError> {
        self.encode_with_summary(text).map(|(code, _)| code)
    }
}

impl Default for MorseEncoder {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}
