//! Integration tests for the polyline codec and its text formats

extern crate std;

use std::fs;

use polylinekit::{decode, decode_to_text, encode, encode_text};
use polylinekit::{Coordinate, CoordinateList, PolylineError, PolylineKit};

const REFERENCE_TEXT: &str = "[(38.5,-120.2),(40.7,-120.95),(43.252,-126.453)]";
const REFERENCE_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

#[test]
fn test_complete_text_workflow() {
    // Text list -> polyline -> text list
    let encoded = encode_text(REFERENCE_TEXT).unwrap();
    std::assert_eq!(encoded, REFERENCE_POLYLINE);

    let decoded = decode_to_text(&encoded).unwrap();
    std::assert_eq!(decoded, REFERENCE_TEXT);
}

#[test]
fn test_list_codec_round_trip() {
    let mut path = CoordinateList::new();
    path.add(Coordinate::new(52.52001, 13.40495).unwrap());
    path.add(Coordinate::new(48.85661, 2.35222).unwrap());
    path.add(Coordinate::new(-22.90685, -43.17290).unwrap());
    path.add(Coordinate::new(52.52001, 13.40495).unwrap());

    let encoded = encode(path.as_slice());
    std::assert!(encoded.bytes().all(|b| (63..=126).contains(&b)));

    let decoded = CoordinateList::from(decode(&encoded).unwrap());
    std::assert_eq!(decoded, path);
    std::assert_eq!(decoded.to_string(), path.to_string());
}

#[test]
fn test_empty_inputs() {
    std::assert_eq!(encode(&[]), "");
    std::assert!(decode("").unwrap().is_empty());
    std::assert_eq!(decode_to_text("").unwrap(), "[]");
    std::assert_eq!(encode_text("[]").unwrap(), "");
}

#[test]
fn test_corrupt_polyline_is_rejected_atomically() {
    // A valid prefix followed by a dangling continuation chunk
    let corrupt = format!("{}_", REFERENCE_POLYLINE);
    std::assert!(matches!(decode(&corrupt), Err(PolylineError::Format(_))));
}

#[test]
fn test_facade_operations() {
    let log_path = std::env::temp_dir().join(format!("polylinekit-facade-{}.log", std::process::id()));
    let kit = PolylineKit::new(Some(log_path.to_str().unwrap())).unwrap();

    std::assert_eq!(kit.encode_text(REFERENCE_TEXT).unwrap(), REFERENCE_POLYLINE);
    std::assert_eq!(kit.decode_to_text(REFERENCE_POLYLINE).unwrap(), REFERENCE_TEXT);
    std::assert_eq!(kit.decode(REFERENCE_POLYLINE).unwrap().len(), 3);

    let summary = kit.inspect("(40.7,-120.95)").unwrap();
    std::assert!(summary.contains("Points: 1"));
    std::assert!(summary.contains("Canonical: [(40.7,-120.95)]"));

    std::assert!(matches!(kit.encode_text(""), Err(PolylineError::NullInput(_))));
    std::assert!(matches!(kit.inspect("(91,0)"), Err(PolylineError::OutOfRange { .. })));

    let log = fs::read_to_string(&log_path).unwrap();
    std::assert!(log.contains("Decoded '_p~iF~ps|U_ulLnnqC_mqNvxq`@' (3 points):"));
    let _ = fs::remove_file(log_path);
}

#[test]
fn test_facade_without_log_file() {
    let kit = PolylineKit::new(None).unwrap();
    std::assert_eq!(kit.encode(&[Coordinate::new(0.0, 0.0).unwrap()]).unwrap(), "??");
}
