//! Real-time pacing parameters for output devices
//!
//! All durations derive from the length of one dit. A dah is three dits,
//! and a pause lasts as many dits as its spacing count.

use crate::constants::{Spacing, DEFAULT_DIT_MS};
use crate::error::MorseError;
use alloc::format;
use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Dit length used to pace output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Length of a single dit
    pub dit: Duration,
}

impl Timing {
    /// Create timing from a dit length in milliseconds
    pub fn from_dit_millis(millis: u64) -> Result<Self, MorseError> {
        if millis == 0 {
            return Err(MorseError::InvalidTiming(
                "dit length must be at least 1 ms".into(),
            ));
        }
        Ok(Self {
            dit: Duration::from_millis(millis),
        })
    }

    /// Create timing from a speed in words per minute (PARIS standard)
    pub fn from_wpm(wpm: u32) -> Result<Self, MorseError> {
        if wpm == 0 || wpm > 1200 {
            return Err(MorseError::InvalidTiming(format!(
                "speed must be between 1 and 1200 WPM, got {}",
                wpm
            )));
        }
        Self::from_dit_millis(1200 / wpm as u64)
    }

    /// Length of a dah
    pub fn dah(&self) -> Duration {
        self.dit * 3
    }

    /// Length of a pause of the given spacing class
    pub fn pause(&self, spacing: Spacing) -> Duration {
        self.dit * spacing.count() as u32
    }

    /// Length of a pause for a raw spacing count
    pub fn pause_for_count(&self, count: u8) -> Duration {
        self.dit * count as u32
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            dit: Duration::from_millis(DEFAULT_DIT_MS),
        }
    }
}
