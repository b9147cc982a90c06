//! Google Encoded Polyline encoder
//!
//! Each coordinate is scaled to an integer at 1e-5 degree precision and
//! written as the delta from the previous coordinate. Deltas are zigzag
//! encoded and emitted in 5-bit little-endian chunks, each offset by 63 to
//! land in printable ASCII.

use log::debug;

use crate::coordinate::{Coordinate, CoordinateList};
use crate::polyline::errors::PolylineResult;
use super::constants::{CHAR_OFFSET, CHUNK_MASK, CONTINUATION_BIT, PRECISION};

/// Encode a sequence of coordinates into a polyline string
///
/// # Arguments
/// * `coordinates` - The path to encode, in order
///
/// # Returns
/// The encoded polyline; an empty path gives an empty string
pub fn encode(coordinates: &[Coordinate]) -> String {
    let mut result = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for coordinate in coordinates {
        let lat5 = scale(coordinate.latitude());
        let lng5 = scale(coordinate.longitude());

        encode_value(lat5 - prev_lat, &mut result);
        encode_value(lng5 - prev_lng, &mut result);

        prev_lat = lat5;
        prev_lng = lng5;
    }

    debug!("Encoded {} coordinates into {} characters", coordinates.len(), result.len());
    result
}

/// Parse a `[(lat,lon),...]` list and encode it
pub fn encode_text(list_text: &str) -> PolylineResult<String> {
    let coordinates = CoordinateList::parse(list_text)?;
    Ok(encode(coordinates.as_slice()))
}

fn scale(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

/// Append the zigzag, 5-bit chunked form of `value` to `result`
pub(crate) fn encode_value(value: i64, result: &mut String) {
    let mut zigzag = value << 1;
    if value < 0 {
        zigzag = !zigzag;
    }
    // Non-negative after the transform
    let mut remaining = zigzag as u64;

    while remaining >= CONTINUATION_BIT {
        let chunk = (CONTINUATION_BIT | (remaining & CHUNK_MASK)) as u8;
        result.push((chunk + CHAR_OFFSET) as char);
        remaining >>= 5;
    }

    result.push((remaining as u8 + CHAR_OFFSET) as char);
}
