//! Constants, layout policies and output flags for the uMorse code format

use serde::{Deserialize, Serialize};

/// Empty slot / padding (`00`)
pub const NUL: u8 = 0x0;

/// Short Morse sound (`01`)
pub const DIT: u8 = 0x1;

/// Long Morse sound (`10`)
pub const DAH: u8 = 0x2;

/// Gap between two characters (`11`)
pub const END_CHAR: u8 = 0x3;

/// Gap between two words (`11 11`)
pub const END_WORD: u16 = 0x0F;

/// End of a sentence or line (`11 11 11 11 11 11 11 11`)
pub const END_STOP: u16 = 0xFFFF;

/// `END_STOP` truncated to a single byte; closes every encoded stream
pub const END_STOP_BYTE: u8 = 0xFF;

/// Bit width of a single symbol
pub const SHIFT: u32 = 2;

/// Mask selecting one symbol
pub const MASK: u8 = 0x3;

/// Mask selecting the spacing count in the low nibble of output flags
pub const MASK_COUNT: u8 = 0x0F;

/// Number of symbol slots in one byte
pub const SLOTS_PER_BYTE: u8 = 4;

/// Maximum number of symbols in a character code
pub const MAX_SYMBOLS: u32 = 8;

/// Table offset for letters (`'A'`)
pub const LETTER_OFFSET: u8 = b'A';

/// Table offset for numbers (`'0'`)
pub const NUMBER_OFFSET: u8 = b'0';

/// Output flag: suppress real-time pacing
pub const FLAG_NODELAY: u8 = 0x80;

/// Bytes at the end of a code buffer reserved for the closing stop sequence
pub const THRESHOLD: usize = 2;

/// Layout flag for byte-aligned encoding
pub const CODE_ALIGNED: u8 = 0x0;

/// Layout flag for bit-packed encoding
pub const CODE_COMPACT: u8 = 0x1;

/// Default length of a dit in milliseconds (20 WPM)
pub const DEFAULT_DIT_MS: u64 = 60;

/// Default code buffer capacity used by [`crate::encoder::MorseEncoder`]
pub const DEFAULT_CAPACITY: usize = 128;

/// Packing policy for character codes in a code buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layout {
    /// Each character code occupies whole bytes, followed by a gap byte
    #[default]
    Aligned,
    /// Character codes are packed at 2-bit granularity across byte boundaries
    Compact,
}

impl Layout {
    /// Select a layout from a raw flag byte (bit 0 set means compact)
    pub const fn from_flag(flag: u8) -> Self {
        if flag & CODE_COMPACT != 0 {
            Layout::Compact
        } else {
            Layout::Aligned
        }
    }

    /// Raw flag byte for this layout
    pub const fn flag(&self) -> u8 {
        match self {
            Layout::Aligned => CODE_ALIGNED,
            Layout::Compact => CODE_COMPACT,
        }
    }
}

/// Spacing class carried in the low nibble of [`OutputFlags`]
///
/// The discriminant is the pause length in dit units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Spacing {
    /// No pause
    None = 0x0,
    /// Rest between two symbols of one character
    Symbol = 0x1,
    /// Gap between two characters
    Character = 0x3,
    /// Gap between two words
    Word = 0x7,
    /// Gap after a sentence or line
    Stop = 0xF,
}

impl Spacing {
    /// Interpret a raw spacing count the way an output device does
    pub const fn from_count(count: u8) -> Self {
        let count = count & MASK_COUNT;
        if count > 7 {
            Spacing::Stop
        } else if count > 3 {
            Spacing::Word
        } else if count > 1 {
            Spacing::Character
        } else if count > 0 {
            Spacing::Symbol
        } else {
            Spacing::None
        }
    }

    /// Map a run of consecutive `END_CHAR` symbols to a spacing class
    pub const fn from_silence_run(run: usize) -> Self {
        match run {
            0 => Spacing::None,
            1 => Spacing::Character,
            2 | 3 => Spacing::Word,
            _ => Spacing::Stop,
        }
    }

    /// Pause length in dit units
    pub const fn count(&self) -> u8 {
        *self as u8
    }
}

/// Flags passed to every output event (stored as a single byte)
///
/// Bits 0-3 hold the spacing count, bits 4-7 are caller flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFlags(u8);

impl OutputFlags {
    /// No flags set
    pub const NONE: u8 = 0b0000_0000;

    /// Suppress real-time pacing
    pub const NO_DELAY: u8 = FLAG_NODELAY;

    /// Create new flags from raw byte
    pub const fn new(flags: u8) -> Self {
        Self(flags)
    }

    /// Get raw flags byte
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Check if real-time pacing should be suppressed
    pub const fn no_delay(&self) -> bool {
        (self.0 & Self::NO_DELAY) != 0
    }

    /// Raw spacing count in the low nibble
    pub const fn count(&self) -> u8 {
        self.0 & MASK_COUNT
    }

    /// Spacing class derived from the low nibble
    pub const fn spacing(&self) -> Spacing {
        Spacing::from_count(self.count())
    }

    /// Caller flags with the spacing count cleared
    pub const fn without_count(&self) -> Self {
        Self(self.0 & !MASK_COUNT)
    }

    /// Caller flags with the given spacing class in the low nibble
    pub const fn with_spacing(&self, spacing: Spacing) -> Self {
        Self((self.0 & !MASK_COUNT) | spacing.count())
    }
}

impl Default for OutputFlags {
    fn default() -> Self {
        Self(Self::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_flag() {
        assert_eq!(Layout::from_flag(CODE_ALIGNED), Layout::Aligned);
        assert_eq!(Layout::from_flag(CODE_COMPACT), Layout::Compact);
        assert_eq!(Layout::from_flag(0xFF), Layout::Compact);
        assert_eq!(Layout::from_flag(0xFE), Layout::Aligned);
        assert_eq!(Layout::Compact.flag(), CODE_COMPACT);
    }

    #[test]
    fn test_spacing_from_count() {
        assert_eq!(Spacing::from_count(0), Spacing::None);
        assert_eq!(Spacing::from_count(1), Spacing::Symbol);
        assert_eq!(Spacing::from_count(3), Spacing::Character);
        assert_eq!(Spacing::from_count(7), Spacing::Word);
        assert_eq!(Spacing::from_count(8), Spacing::Stop);
        assert_eq!(Spacing::from_count(0x8F), Spacing::Stop);
    }

    #[test]
    fn test_spacing_from_silence_run() {
        assert_eq!(Spacing::from_silence_run(0), Spacing::None);
        assert_eq!(Spacing::from_silence_run(1), Spacing::Character);
        assert_eq!(Spacing::from_silence_run(3), Spacing::Word);
        assert_eq!(Spacing::from_silence_run(4), Spacing::Stop);
        assert_eq!(Spacing::from_silence_run(9), Spacing::Stop);
    }

    #[test]
    fn test_output_flags_keep_upper_bits() {
        let flags = OutputFlags::new(OutputFlags::NO_DELAY | 0x05);
        assert!(flags.no_delay());
        assert_eq!(flags.count(), 0x05);
        assert_eq!(flags.without_count().as_u8(), 0x80);
        assert_eq!(flags.with_spacing(Spacing::Word).as_u8(), 0x87);
        assert_eq!(flags.with_spacing(Spacing::Word).spacing(), Spacing::Word);
    }
}
