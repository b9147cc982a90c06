//! Coordinate handling for polyline paths
//!
//! This module provides the validated latitude/longitude value type,
//! the ordered list that holds a path, and their text notations.

mod point;
mod list;
pub(crate) mod parser;
mod tests;

// Re-export key types
pub use self::point::{Coordinate, LATITUDE_RANGE, LONGITUDE_RANGE, TOLERANCE};
pub use self::list::CoordinateList;
