//! Fuzzing entry points for umorse-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_encode

use umorse_core::{encoder::encode_detailed, output::events, Layout};

/// Encode arbitrary text into a buffer sized by the first input byte
pub fn fuzz_encode(data: &[u8]) {
    let Some((&size, text)) = data.split_first() else {
        return;
    };

    for layout in [Layout::Aligned, Layout::Compact] {
        let mut code = vec![0u8; size as usize];
        // Undersized buffers are rejected, never panic
        if let Ok(summary) = encode_detailed(text, &mut code, layout) {
            assert!(summary.len <= code.len());
            let _ = events(&code[..summary.len]);
        }
    }
}

/// Replay arbitrary bytes as code - should never panic
pub fn fuzz_output(data: &[u8]) {
    let _ = events(data);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_encode_empty() {
        fuzz_encode(&[]);
        fuzz_encode(&[0]);
    }

    #[test]
    fn test_fuzz_encode_random() {
        fuzz_encode(&[0x08, b'S', b'O', b'S', 0xFF, b'\n', b' ', 0x00]);
        fuzz_encode(&[0x02; 512]);
    }

    #[test]
    fn test_fuzz_output_empty() {
        fuzz_output(&[]);
    }

    #[test]
    fn test_fuzz_output_random() {
        fuzz_output(&[0xFF; 1024]);
        fuzz_output(&[0x12, 0x34, 0x56, 0x78]);
    }
}
