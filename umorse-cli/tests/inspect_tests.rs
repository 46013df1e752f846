use std::fs;
use tempfile::tempdir;

use umorse_cli::commands::inspect;
use umorse_core::{Event, Spacing};

const SOS_ALIGNED: [u8; 8] = [0x15, 0x03, 0x2A, 0x03, 0x15, 0x03, 0xFF, 0x00];

#[test]
fn test_inspect_counts_symbols() {
    let report = inspect::inspect(&SOS_ALIGNED);
    assert_eq!(report.bytes, 8);
    assert_eq!(report.symbols.dit, 6);
    assert_eq!(report.symbols.dah, 3);
    assert_eq!(report.symbols.end_char, 7);
    assert_eq!(report.symbols.nul, 16);
    assert_eq!(report.summary.silences, 12);
    assert!(report.terminated);
    assert_eq!(report.events.last(), Some(&Event::Silence(Spacing::Stop)));
}

#[test]
fn test_inspect_unterminated_code() {
    let report = inspect::inspect(&[0x15]);
    assert!(!report.terminated);
    assert_eq!(report.summary.dits, 3);
}

#[test]
fn test_inspect_writes_json_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sos.morse");
    let output = dir.path().join("report.json");
    fs::write(&input, SOS_ALIGNED).unwrap();

    inspect::execute(input.to_str().unwrap(), Some(output.to_str().unwrap())).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["bytes"], 8);
    assert_eq!(json["terminated"], true);
    assert_eq!(json["summary"]["dahs"], 3);
    assert_eq!(json["events"].as_array().unwrap().len(), 21);
}
