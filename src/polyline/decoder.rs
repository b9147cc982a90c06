//! Google Encoded Polyline decoder

use log::debug;

use crate::coordinate::{Coordinate, CoordinateList};
use crate::polyline::errors::{PolylineError, PolylineResult};
use super::constants::{CHAR_OFFSET, CHUNK_MASK, CONTINUATION_BIT, MAX_CHAR, MAX_SHIFT, PRECISION};

/// Decode a polyline string into its coordinates
///
/// # Arguments
/// * `encoded` - Polyline text produced by [`super::encode`] or any
///   compatible encoder
///
/// # Returns
/// The decoded path. Fails with `PolylineError::Format` if the text ends in
/// the middle of a value or holds characters outside '?'..='~', and with
/// `PolylineError::OutOfRange` if a decoded point is not a valid coordinate.
/// Nothing is returned on failure.
pub fn decode(encoded: &str) -> PolylineResult<Vec<Coordinate>> {
    let bytes = encoded.as_bytes();
    let mut coordinates = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat = accumulate(lat, decode_value(bytes, &mut index)?)?;
        lng = accumulate(lng, decode_value(bytes, &mut index)?)?;

        // Exact multiples of 1e-5 such as 90.0 must not drift past the bounds
        coordinates.push(Coordinate::new(lat as f64 / PRECISION, lng as f64 / PRECISION)?);
    }

    debug!("Decoded {} characters into {} coordinates", bytes.len(), coordinates.len());
    Ok(coordinates)
}

/// Decode a polyline and render it as `[(lat,lon),...]` text
pub fn decode_to_text(encoded: &str) -> PolylineResult<String> {
    let coordinates = CoordinateList::from(decode(encoded)?);
    Ok(coordinates.to_string())
}

fn accumulate(total: i64, delta: i64) -> PolylineResult<i64> {
    total.checked_add(delta)
        .ok_or_else(|| PolylineError::Format("Decoded value overflows".to_string()))
}

/// Read one zigzag-encoded value starting at `index`, advancing it past the value
pub(crate) fn decode_value(bytes: &[u8], index: &mut usize) -> PolylineResult<i64> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes.get(*index).ok_or_else(|| PolylineError::Format(format!(
            "Polyline ends in the middle of a value at position {}", *index
        )))?;
        if !(CHAR_OFFSET..=MAX_CHAR).contains(&byte) {
            return Err(PolylineError::Format(format!(
                "Invalid polyline byte 0x{:02x} at position {}", byte, *index
            )));
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::Format(format!(
                "Value starting before position {} is too long", *index
            )));
        }
        *index += 1;

        let chunk = (byte - CHAR_OFFSET) as u64;
        let payload = chunk & CHUNK_MASK;
        if shift == MAX_SHIFT && payload >> (u64::BITS - MAX_SHIFT) != 0 {
            return Err(PolylineError::Format(format!(
                "Value ending at position {} needs more than 64 bits", *index - 1
            )));
        }
        value |= payload << shift;
        shift += 5;

        if chunk < CONTINUATION_BIT {
            break;
        }
    }

    let half = (value >> 1) as i64;
    Ok(if value & 1 != 0 { !half } else { half })
}
