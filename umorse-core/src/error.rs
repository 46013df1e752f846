//! Error types for uMorse operations

use alloc::string::String;

/// Errors that can occur during uMorse operations
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq)]
pub enum MorseError {
    /// Code buffer cannot hold even the closing stop sequence
    #[cfg_attr(
        feature = "std",
        error("Code buffer too small: capacity {capacity}, need at least {required}")
    )]
    CapacityTooSmall {
        /// The capacity of the buffer handed in.
        capacity: usize,
        /// The minimum capacity required.
        required: usize,
    },

    /// Timing parameters out of range
    #[cfg_attr(feature = "std", error("Invalid timing: {0}"))]
    InvalidTiming(String),

    /// IO error during read/write
    #[cfg_attr(feature = "std", error("IO error: {0}"))]
    Io(String),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for MorseError {
    fn from(err: std::io::Error) -> Self {
        MorseError::Io(err.to_string())
    }
}
