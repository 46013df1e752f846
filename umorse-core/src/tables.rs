//! International Morse Code tables for letters and digits

use crate::constants::{LETTER_OFFSET, NUMBER_OFFSET};
use crate::types::CharCode;
use crate::types::Symbol::{Dah, Dit};

/// Codes for `A`..=`Z`, indexed by `c - b'A'`
pub const LETTERS: [CharCode; 26] = [
    CharCode::from_symbols(&[Dit, Dah]),                      // A  ._
    CharCode::from_symbols(&[Dah, Dit, Dit, Dit]),            // B  _...
    CharCode::from_symbols(&[Dah, Dit, Dah, Dit]),            // C  _._.
    CharCode::from_symbols(&[Dah, Dit, Dit]),                 // D  _..
    CharCode::from_symbols(&[Dit]),                           // E  .
    CharCode::from_symbols(&[Dit, Dit, Dah, Dit]),            // F  .._.
    CharCode::from_symbols(&[Dah, Dah, Dit]),                 // G  __.
    CharCode::from_symbols(&[Dit, Dit, Dit, Dit]),            // H  ....
    CharCode::from_symbols(&[Dit, Dit]),                      // I  ..
    CharCode::from_symbols(&[Dit, Dah, Dah, Dah]),            // J  .___
    CharCode::from_symbols(&[Dah, Dit, Dah]),                 // K  _._
    CharCode::from_symbols(&[Dit, Dah, Dit, Dit]),            // L  ._..
    CharCode::from_symbols(&[Dah, Dah]),                      // M  __
    CharCode::from_symbols(&[Dah, Dit]),                      // N  _.
    CharCode::from_symbols(&[Dah, Dah, Dah]),                 // O  ___
    CharCode::from_symbols(&[Dit, Dah, Dah, Dit]),            // P  .__.
    CharCode::from_symbols(&[Dah, Dah, Dit, Dah]),            // Q  __._
    CharCode::from_symbols(&[Dit, Dah, Dit]),                 // R  ._.
    CharCode::from_symbols(&[Dit, Dit, Dit]),                 // S  ...
    CharCode::from_symbols(&[Dah]),                           // T  _
    CharCode::from_symbols(&[Dit, Dit, Dah]),                 // U  .._
    CharCode::from_symbols(&[Dit, Dit, Dit, Dah]),            // V  ..._
    CharCode::from_symbols(&[Dit, Dah, Dah]),                 // W  .__
    CharCode::from_symbols(&[Dah, Dit, Dit, Dah]),            // X  _.._
    CharCode::from_symbols(&[Dah, Dit, Dah, Dah]),            // Y  _.__
    CharCode::from_symbols(&[Dah, Dah, Dit, Dit]),            // Z  __..
];

/// Codes for `0`..=`9`, indexed by `c - b'0'`
pub const NUMBERS: [CharCode; 10] = [
    CharCode::from_symbols(&[Dah, Dah, Dah, Dah, Dah]),       // 0  _____
    CharCode::from_symbols(&[Dit, Dah, Dah, Dah, Dah]),       // 1  .____
    CharCode::from_symbols(&[Dit, Dit, Dah, Dah, Dah]),       // 2  ..___
    CharCode::from_symbols(&[Dit, Dit, Dit, Dah, Dah]),       // 3  ...__
    CharCode::from_symbols(&[Dit, Dit, Dit, Dit, Dah]),       // 4  ...._
    CharCode::from_symbols(&[Dit, Dit, Dit, Dit, Dit]),       // 5  .....
    CharCode::from_symbols(&[Dah, Dit, Dit, Dit, Dit]),       // 6  _....
    CharCode::from_symbols(&[Dah, Dah, Dit, Dit, Dit]),       // 7  __...
    CharCode::from_symbols(&[Dah, Dah, Dah, Dit, Dit]),       // 8  ___..
    CharCode::from_symbols(&[Dah, Dah, Dah, Dah, Dit]),       // 9  ____.
];

/// Look up an upper-case letter
pub fn letter(c: u8) -> Option<CharCode> {
    if c.is_ascii_uppercase() {
        Some(LETTERS[(c - LETTER_OFFSET) as usize])
    } else {
        None
    }
}

/// Look up a decimal digit
pub fn number(c: u8) -> Option<CharCode> {
    if c.is_ascii_digit() {
        Some(NUMBERS[(c - NUMBER_OFFSET) as usize])
    } else {
        None
    }
}

/// Look up an upper-case letter or a digit
pub fn lookup(c: u8) -> Option<CharCode> {
    letter(c).or_else(|| number(c))
}
