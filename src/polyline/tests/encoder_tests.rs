//! Tests for the polyline encoder

use crate::coordinate::Coordinate;
use crate::polyline::encoder::encode_value;
use crate::polyline::{encode, encode_text, PolylineError};

fn coords(pairs: &[(f64, f64)]) -> Vec<Coordinate> {
    pairs.iter()
        .map(|&(lat, lon)| Coordinate::new(lat, lon).unwrap())
        .collect()
}

#[test]
fn test_encode_reference_path() {
    let path = coords(&[(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)]);
    assert_eq!(encode(&path), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
}

#[test]
fn test_encode_empty_path() {
    assert_eq!(encode(&[]), "");
}

#[test]
fn test_encode_origin() {
    // A zero delta is a single '?' per axis
    let path = coords(&[(0.0, 0.0)]);
    assert_eq!(encode(&path), "??");
}

#[test]
fn test_encode_repeated_point_emits_zero_deltas() {
    let path = coords(&[(38.5, -120.2), (38.5, -120.2)]);
    assert_eq!(encode(&path), "_p~iF~ps|U??");
}

#[test]
fn test_encode_value_negative() {
    let mut out = String::new();
    encode_value(-17998321, &mut out);
    assert_eq!(out, "`~oia@");
}

#[test]
fn test_encode_value_small_magnitudes() {
    // Zigzag keeps -1 and 1 adjacent to 0
    let mut out = String::new();
    encode_value(-1, &mut out);
    encode_value(1, &mut out);
    assert_eq!(out, "@A");
}

#[test]
fn test_encode_value_stays_printable() {
    for value in [i32::MIN as i64, -18_000_000, -1, 0, 31, 32, 18_000_000, i32::MAX as i64] {
        let mut out = String::new();
        encode_value(value, &mut out);
        assert!(out.bytes().all(|b| (63..=126).contains(&b)), "{} -> {:?}", value, out);
    }
}

#[test]
fn test_encode_text() {
    let encoded = encode_text("[(38.5,-120.2),(40.7,-120.95),(43.252,-126.453)]").unwrap();
    assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
}

#[test]
fn test_encode_text_rejects_bad_list() {
    assert!(matches!(encode_text("[(1.0,2.0,3.0)]"), Err(PolylineError::Format(_))));
    assert!(matches!(encode_text("[(95.0,2.0)]"), Err(PolylineError::OutOfRange { .. })));
    for text in ["", "[", "]"] {
        assert!(matches!(encode_text(text), Err(PolylineError::Format(_))), "{:?}", text);
    }
}
