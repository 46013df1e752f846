//! Input byte classification
//!
//! Every input byte falls into exactly one [`CharClass`]. Letters are
//! normalized to upper case, tab and space collapse to a word gap, and the
//! remaining control characters collapse to a stop.

use crate::tables;
use crate::types::CharCode;

/// Classification of a single input byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Upper-case letter `A`..=`Z`
    Letter(u8),
    /// Digit `0`..=`9`
    Number(u8),
    /// Word separator (tab or space)
    Space,
    /// Sentence stop (any other control character)
    Stop,
    /// Contributes nothing to the output
    Ignored,
}

impl CharClass {
    /// Character code this class encodes to, `None` for ignored bytes
    pub fn char_code(&self) -> Option<CharCode> {
        match *self {
            CharClass::Letter(c) => tables::letter(c),
            CharClass::Number(c) => tables::number(c),
            CharClass::Space => Some(CharCode::END_WORD),
            CharClass::Stop => Some(CharCode::END_STOP),
            CharClass::Ignored => None,
        }
    }
}

/// Convert a lower-case ASCII letter to upper case
///
/// Callers must pass a byte in `a`..=`z`.
#[inline]
pub fn to_upper(c: u8) -> u8 {
    debug_assert!(c.is_ascii_lowercase(), "to_upper expects a-z, got {:#04x}", c);
    c - 32
}

/// Returns the normalized upper-case letter if `c` is a letter
#[inline]
pub fn is_letter(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c),
        b'a'..=b'z' => Some(to_upper(c)),
        _ => None,
    }
}

/// Returns `c` if it is a decimal digit
#[inline]
pub fn is_number(c: u8) -> Option<u8> {
    c.is_ascii_digit().then_some(c)
}

/// Returns `b' '` for tab or space
#[inline]
pub fn is_space(c: u8) -> Option<u8> {
    matches!(c, b'\t' | b' ').then_some(b' ')
}

/// Returns `b'\n'` for control characters `0x01..=0x1F` other than tab
#[inline]
pub fn is_stop(c: u8) -> Option<u8> {
    (matches!(c, 0x01..=0x1F) && is_space(c).is_none()).then_some(b'\n')
}

/// Classify a single input byte
pub fn classify(c: u8) -> CharClass {
    if let Some(l) = is_letter(c) {
        CharClass::Letter(l)
    } else if let Some(n) = is_number(c) {
        CharClass::Number(n)
    } else if is_space(c).is_some() {
        CharClass::Space
    } else if is_stop(c).is_some() {
        CharClass::Stop
    } else {
        CharClass::Ignored
    }
}

/// Character code for an input byte, `None` if the byte is ignored
pub fn char_code(c: u8) -> Option<CharCode> {
    classify(c).char_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_normalize_to_upper() {
        assert_eq!(classify(b'a'), CharClass::Letter(b'A'));
        assert_eq!(classify(b'z'), CharClass::Letter(b'Z'));
        assert_eq!(classify(b'Q'), CharClass::Letter(b'Q'));
        for (lower, upper) in (b'a'..=b'z').zip(b'A'..=b'Z') {
            assert_eq!(classify(lower), classify(upper));
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(classify(b'0'), CharClass::Number(b'0'));
        assert_eq!(classify(b'9'), CharClass::Number(b'9'));
    }

    #[test]
    fn test_space_and_tab() {
        assert_eq!(classify(b' '), CharClass::Space);
        assert_eq!(classify(b'\t'), CharClass::Space);
        assert_eq!(is_space(b'\t'), Some(b' '));
    }

    #[test]
    fn test_control_characters_are_stops() {
        assert_eq!(classify(b'\n'), CharClass::Stop);
        assert_eq!(classify(b'\r'), CharClass::Stop);
        assert_eq!(classify(0x01), CharClass::Stop);
        assert_eq!(classify(0x1F), CharClass::Stop);
        assert_eq!(is_stop(b'\n'), Some(b'\n'));
    }

    #[test]
    fn test_ignored() {
        for c in [0x00u8, b'!', b'.', b'@', b'[', b'`', b'{', 0x7F, 0x80, 0xFF] {
            assert_eq!(classify(c), CharClass::Ignored, "byte {:#04x}", c);
        }
    }

    #[test]
    fn test_char_code() {
        assert_eq!(char_code(b' '), Some(CharCode::END_WORD));
        assert_eq!(char_code(b'\n'), Some(CharCode::END_STOP));
        assert_eq!(char_code(b's'), tables::letter(b'S'));
        assert_eq!(char_code(b'?'), None);
    }
}
