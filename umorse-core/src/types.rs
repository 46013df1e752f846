//! Core types for uMorse symbols and character codes

use crate::constants::{
    Spacing, DAH, DIT, END_CHAR, END_STOP, END_STOP_BYTE, END_WORD, MASK, MAX_SYMBOLS, NUL, SHIFT,
    SLOTS_PER_BYTE,
};
use serde::{Deserialize, Serialize};

/// A single 2-bit Morse symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    /// Empty slot (padding)
    Nul = NUL,
    /// Short sound
    Dit = DIT,
    /// Long sound
    Dah = DAH,
    /// Gap marker
    EndChar = END_CHAR,
}

impl Symbol {
    /// Decode the lowest two bits of `bits`
    pub const fn from_bits(bits: u8) -> Self {
        match bits & MASK {
            DIT => Symbol::Dit,
            DAH => Symbol::Dah,
            END_CHAR => Symbol::EndChar,
            _ => Symbol::Nul,
        }
    }

    /// Raw 2-bit value
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    /// Check if this symbol produces a sound
    pub const fn is_sound(&self) -> bool {
        matches!(self, Symbol::Dit | Symbol::Dah)
    }
}

/// Iterate the four symbol slots of a byte, lowest pair first
pub fn symbols_of(byte: u8) -> impl Iterator<Item = Symbol> {
    (0..SLOTS_PER_BYTE as u32).map(move |slot| Symbol::from_bits(byte >> (slot * SHIFT)))
}

/// The packed symbol sequence of one input character
///
/// Symbol `i` lives at bits `2*i..2*i+2`. Letters and digits use at most
/// five symbols; gap codes are runs of `END_CHAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharCode(u16);

impl CharCode {
    /// Gap between two words
    pub const END_WORD: CharCode = CharCode(END_WORD);

    /// End of a sentence or line inside the text
    pub const END_STOP: CharCode = CharCode(END_STOP);

    /// Truncated stop that closes every encoded stream
    pub const TERMINATOR: CharCode = CharCode(END_STOP_BYTE as u16);

    /// Wrap a raw 16-bit code
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Build a code from up to eight symbols, first symbol in the lowest bits
    pub const fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut raw = 0u16;
        let mut i = 0;
        while i < symbols.len() && i < MAX_SYMBOLS as usize {
            raw |= (symbols[i] as u16) << (i as u32 * SHIFT);
            i += 1;
        }
        Self(raw)
    }

    /// Raw 16-bit value
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Check if the code needs a second byte in aligned layout
    pub const fn is_wide(&self) -> bool {
        self.0 > 0xFF
    }

    /// Check if the lowest symbol is already a gap marker
    ///
    /// Such codes carry their own gap and get no separator appended.
    pub const fn ends_with_gap(&self) -> bool {
        (self.0 as u8 & MASK) == END_CHAR
    }

    /// Number of symbol groups up to the highest non-zero one
    pub const fn symbol_count(&self) -> u32 {
        let mut count = 0;
        while count < MAX_SYMBOLS && (self.0 >> (count * SHIFT)) != 0 {
            count += 1;
        }
        count
    }

    /// Iterate the symbols of this code, lowest group first
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> {
        let raw = self.0;
        (0..self.symbol_count()).map(move |i| Symbol::from_bits((raw >> (i * SHIFT)) as u8))
    }
}

/// A single event emitted by the output dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Short sound
    Dit,
    /// Long sound
    Dah,
    /// Pause of the given spacing class
    Silence(Spacing),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_symbols_of_byte() {
        let symbols: Vec<Symbol> = symbols_of(0b11_00_10_01).collect();
        assert_eq!(
            symbols,
            [Symbol::Dit, Symbol::Dah, Symbol::Nul, Symbol::EndChar]
        );
    }

    #[test]
    fn test_from_symbols() {
        let code = CharCode::from_symbols(&[Symbol::Dit, Symbol::Dah]);
        assert_eq!(code.as_u16(), 0x09);
        assert_eq!(code.symbol_count(), 2);
        assert!(!code.ends_with_gap());
    }

    #[test]
    fn test_gap_codes() {
        assert_eq!(CharCode::END_WORD.symbol_count(), 2);
        assert!(CharCode::END_WORD.ends_with_gap());
        assert!(!CharCode::END_WORD.is_wide());

        assert_eq!(CharCode::END_STOP.symbol_count(), 8);
        assert!(CharCode::END_STOP.is_wide());

        assert_eq!(CharCode::TERMINATOR.symbol_count(), 4);
        assert!(CharCode::TERMINATOR.ends_with_gap());
        assert!(CharCode::TERMINATOR
            .symbols()
            .all(|s| s == Symbol::EndChar));
    }

    #[test]
    fn test_five_symbol_code_is_wide() {
        let zero = CharCode::from_symbols(&[Symbol::Dah; 5]);
        assert_eq!(zero.as_u16(), 0x2AA);
        assert!(zero.is_wide());
        assert_eq!(zero.symbol_count(), 5);
    }
}
