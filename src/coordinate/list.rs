//! Ordered list of coordinates describing a path

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::polyline::errors::{PolylineError, PolylineResult};
use super::parser;
use super::point::Coordinate;

/// An ordered sequence of coordinates
///
/// Order is the path order of the polyline and duplicates are kept, so a
/// path that revisits a point is represented faithfully.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateList {
    coordinates: Vec<Coordinate>,
}

impl CoordinateList {
    /// Create an empty list
    pub fn new() -> Self {
        CoordinateList { coordinates: Vec::new() }
    }

    /// Parse a list in the form `[(lat1,lon1),(lat2,lon2),...]`
    ///
    /// # Returns
    /// The parsed list, `PolylineError::Format` for malformed text or
    /// `PolylineError::OutOfRange` for a coordinate outside the valid bounds
    pub fn parse(text: &str) -> PolylineResult<Self> {
        parser::parse_list_pairs(text)?
            .into_iter()
            .map(|(latitude, longitude)| Coordinate::new(latitude, longitude))
            .collect()
    }

    /// Append a coordinate
    pub fn add(&mut self, coordinate: Coordinate) {
        self.coordinates.push(coordinate);
    }

    /// Append every coordinate of `coordinates`
    pub fn add_range<I: IntoIterator<Item = Coordinate>>(&mut self, coordinates: I) {
        self.coordinates.extend(coordinates);
    }

    /// Get the coordinate at `index`
    pub fn get(&self, index: usize) -> Option<&Coordinate> {
        self.coordinates.get(index)
    }

    /// Replace the coordinate at `index`
    pub fn set(&mut self, index: usize, coordinate: Coordinate) -> PolylineResult<()> {
        let len = self.coordinates.len();
        match self.coordinates.get_mut(index) {
            Some(slot) => {
                *slot = coordinate;
                Ok(())
            },
            None => Err(PolylineError::IndexOutOfBounds { index, len }),
        }
    }

    /// Check whether an equal coordinate (within tolerance) is in the list
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.coordinates.contains(coordinate)
    }

    /// Remove the first coordinate equal to `coordinate`
    ///
    /// # Returns
    /// `true` if a coordinate was removed
    pub fn remove(&mut self, coordinate: &Coordinate) -> bool {
        match self.coordinates.iter().position(|c| c == coordinate) {
            Some(pos) => {
                self.coordinates.remove(pos);
                true
            },
            None => false,
        }
    }

    /// Remove every coordinate
    pub fn clear(&mut self) {
        self.coordinates.clear();
    }

    /// Number of coordinates
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether the list holds no coordinates
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Lazily yield the coordinates matching `predicate`
    pub fn find<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Coordinate> + 'a
    where
        P: Fn(&Coordinate) -> bool + 'a,
    {
        self.coordinates.iter().filter(move |c| predicate(*c))
    }

    /// Iterate over the coordinates in path order
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    /// View the coordinates as a slice
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coordinates
    }
}

impl fmt::Display for CoordinateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", coordinate)?;
        }
        write!(f, "]")
    }
}

impl FromStr for CoordinateList {
    type Err = PolylineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoordinateList::parse(s)
    }
}

impl From<Vec<Coordinate>> for CoordinateList {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        CoordinateList { coordinates }
    }
}

impl FromIterator<Coordinate> for CoordinateList {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        CoordinateList { coordinates: iter.into_iter().collect() }
    }
}

impl Extend<Coordinate> for CoordinateList {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.coordinates.extend(iter);
    }
}

impl Index<usize> for CoordinateList {
    type Output = Coordinate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl IndexMut<usize> for CoordinateList {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.coordinates[index]
    }
}

impl IntoIterator for CoordinateList {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.into_iter()
    }
}

impl<'a> IntoIterator for &'a CoordinateList {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}
