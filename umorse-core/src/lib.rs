//! # uMorse Core
//!
//! Slim Morse code encoding, packing and output.
//!
//! Text is translated into 2-bit Morse symbols, packed into a caller-owned
//! buffer under an aligned or compact layout, and replayed through any
//! [`MorseOutput`] device.
//!
//! ## Modules
//!
//! - `constants`: Symbol values, layout policies and output flags
//! - `types`: Core types (Symbol, CharCode, Event)
//! - `tables`: International Morse Code tables
//! - `classify`: Input byte classification
//! - `encoder`: Text to code encoding
//! - `output`: Code replay through an output device
//! - `decoder`: Code to text decoding (interface only)
//! - `timing`: Real-time pacing parameters

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod classify;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod output;
pub mod tables;
pub mod timing;
pub mod types;

// Re-export commonly used types
pub use constants::{Layout, OutputFlags, Spacing};
pub use decoder::decode;
pub use encoder::{encode, encode_aligned, encode_compact, MorseEncoder};
pub use error::MorseError;
pub use output::{output, EventLog, MorseOutput};
pub use timing::Timing;
pub use types::{CharCode, Event, Symbol};

/// Result type alias for uMorse operations
pub type Result<T> = core::result::Result<T, MorseError>;
