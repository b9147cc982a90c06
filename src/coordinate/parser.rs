//! Text parsing for coordinates and coordinate lists
//!
//! Two notations are handled here: the strict single-coordinate form
//! `(lat,lon)` and the bracketed list form `[(lat1,lon1),(lat2,lon2),...]`.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::polyline::errors::{PolylineError, PolylineResult};
use crate::utils::string_utils::{strip_one_prefix, strip_one_suffix};

/// Separator between coordinates inside a list
const LIST_SEPARATOR: &str = "),(";
/// The only text that parses as a list without coordinates
const EMPTY_LIST: &str = "[]";

lazy_static! {
    static ref COORDINATE_FORMAT: Regex = Regex::new(
        r"^\((?P<latitude>-?\d{1,3}(?:\.\d{1,6})?),(?P<longitude>-?\d{1,3}(?:\.\d{1,6})?)\)$"
    ).expect("coordinate pattern is valid");
}

/// Parse a `(lat,lon)` string into its latitude and longitude values
///
/// Only the textual shape is checked here; range validation is left to
/// the caller.
pub(crate) fn parse_coordinate_pair(text: &str) -> PolylineResult<(f64, f64)> {
    let captures = COORDINATE_FORMAT.captures(text)
        .ok_or_else(|| PolylineError::Format(format!("Invalid coordinate format: '{}'", text)))?;

    let latitude = parse_component(&captures["latitude"])?;
    let longitude = parse_component(&captures["longitude"])?;

    Ok((latitude, longitude))
}

/// Split a bracketed list into `(latitude, longitude)` pairs
///
/// # Arguments
/// * `text` - List text such as `[(1.5,2.5),(3.25,-4.75)]`
///
/// # Returns
/// The pairs in list order. An empty list (`[]`) yields no pairs.
pub(crate) fn parse_list_pairs(text: &str) -> PolylineResult<Vec<(f64, f64)>> {
    if text == EMPTY_LIST {
        debug!("Empty coordinate list");
        return Ok(Vec::new());
    }

    let body = strip_one_suffix(strip_one_prefix(text, '['), ']');

    let mut pairs = Vec::new();
    for chunk in body.split(LIST_SEPARATOR) {
        let inner = strip_one_suffix(strip_one_prefix(chunk, '('), ')');
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 2 {
            return Err(PolylineError::Format(format!(
                "Coordinate '{}' must have exactly 2 comma-separated values, found {}",
                chunk, parts.len()
            )));
        }

        let latitude = parse_component(parts[0])?;
        let longitude = parse_component(parts[1])?;
        pairs.push((latitude, longitude));
    }

    debug!("Parsed {} coordinate pairs", pairs.len());
    Ok(pairs)
}

fn parse_component(value: &str) -> PolylineResult<f64> {
    value.trim().parse::<f64>()
        .map_err(|_| PolylineError::Format(format!("Invalid coordinate value: '{}'", value)))
}
