//! Coordinate utility functions
//!
//! Helpers shared by the library facade and the CLI for reading free-form
//! coordinate text and describing a parsed path.

use log::debug;

use crate::coordinate::{Coordinate, CoordinateList};
use crate::polyline;
use crate::polyline::errors::PolylineResult;

/// Parse either a bracketed list `[(lat,lon),...]` or a single `(lat,lon)`
///
/// # Arguments
/// * `text` - Coordinate text; a leading '[' selects list parsing
///
/// # Returns
/// The coordinates as a list (one element for a single coordinate)
pub fn parse_coordinate_text(text: &str) -> PolylineResult<CoordinateList> {
    if text.starts_with('[') {
        CoordinateList::parse(text)
    } else {
        debug!("Parsing single coordinate '{}'", text);
        Ok(CoordinateList::from(vec![Coordinate::parse_single(text)?]))
    }
}

/// Build a human-readable summary of a path
///
/// # Arguments
/// * `coordinates` - The path to describe
/// * `list_points` - Whether to add one line per coordinate
pub fn summarize(coordinates: &CoordinateList, list_points: bool) -> String {
    let mut result = "Coordinate Summary:\n".to_string();
    result.push_str(&format!("  Points: {}\n", coordinates.len()));
    result.push_str(&format!("  Canonical: {}\n", coordinates));
    result.push_str(&format!("  Polyline: {}", polyline::encode(coordinates.as_slice())));

    if list_points {
        for (i, coordinate) in coordinates.iter().enumerate() {
            result.push_str(&format!("\n  #{}: {}", i, coordinate));
        }
    }

    result
}
