//! Bit-exact test vectors for both code layouts
//!
//! Each vector pins the exact bytes produced for a short text. Changing any
//! of them changes the wire format.

use umorse_core::{encoder::encode_detailed, output::events, Event, Layout};

struct Vector {
    name: &'static str,
    text: &'static str,
    layout: Layout,
    hex: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector { name: "empty aligned", text: "", layout: Layout::Aligned, hex: "ff00" },
    Vector { name: "empty compact", text: "", layout: Layout::Compact, hex: "ff00" },
    Vector { name: "E aligned", text: "E", layout: Layout::Aligned, hex: "0103ff00" },
    Vector { name: "E compact", text: "E", layout: Layout::Compact, hex: "fd0f" },
    Vector { name: "SOS aligned", text: "SOS", layout: Layout::Aligned, hex: "15032a031503ff00" },
    Vector { name: "SOS compact", text: "SOS", layout: Layout::Compact, hex: "d5ead5ff00" },
    Vector { name: "HI aligned", text: "HI", layout: Layout::Aligned, hex: "55030503ff00" },
    Vector { name: "HI compact", text: "hi", layout: Layout::Compact, hex: "55d7ff00" },
    Vector { name: "word gap aligned", text: "A B", layout: Layout::Aligned, hex: "09030f5603ff00" },
    Vector { name: "word gap compact", text: "A B", layout: Layout::Compact, hex: "f95bfd0f" },
    Vector { name: "digit aligned", text: "0", layout: Layout::Aligned, hex: "aa0203ff00" },
    Vector { name: "digit compact", text: "0", layout: Layout::Compact, hex: "aafe0f" },
    Vector { name: "stop aligned", text: "E\nE", layout: Layout::Aligned, hex: "0103ffff0103ff00" },
    Vector { name: "stop compact", text: "E\nE", layout: Layout::Compact, hex: "fdffdfff00" },
];

fn encode_vector(v: &Vector, capacity: usize) -> (Vec<u8>, bool) {
    let mut code = vec![0u8; capacity];
    let summary = encode_detailed(v.text.as_bytes(), &mut code, v.layout).unwrap();
    code.truncate(summary.len);
    (code, summary.truncated)
}

#[test]
fn test_vectors_match() {
    for v in VECTORS {
        let (code, truncated) = encode_vector(v, 64);
        assert!(!truncated, "{}", v.name);
        assert_eq!(hex::encode(&code), v.hex, "{}", v.name);
    }
}

#[test]
fn test_vectors_fit_tight_capacity() {
    // One byte beyond the encoded length is always enough
    for v in VECTORS {
        let expected = hex::decode(v.hex).unwrap();
        let (code, truncated) = encode_vector(v, expected.len() + 1);
        assert!(!truncated, "{}", v.name);
        assert_eq!(code, expected, "{}", v.name);
    }
}

#[test]
fn test_vectors_end_with_stop() {
    for v in VECTORS {
        let code = hex::decode(v.hex).unwrap();
        let events = events(&code);
        assert_eq!(
            events.last(),
            Some(&Event::Silence(umorse_core::Spacing::Stop)),
            "{}",
            v.name
        );
    }
}

#[test]
fn test_layout_pairs_replay_identically() {
    for pair in VECTORS.chunks(2) {
        let aligned = hex::decode(pair[0].hex).unwrap();
        let compact = hex::decode(pair[1].hex).unwrap();
        assert_eq!(pair[0].layout, Layout::Aligned);
        assert_eq!(pair[1].layout, Layout::Compact);
        assert!(compact.len() <= aligned.len(), "{}", pair[1].name);
        assert_eq!(events(&aligned), events(&compact), "{}", pair[1].name);
    }
}
