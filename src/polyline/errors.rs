//! Custom error types for coordinate and polyline processing

use std::fmt;
use std::io;

/// Errors raised while building coordinates or encoding/decoding polylines
#[derive(Debug)]
pub enum PolylineError {
    /// I/O error
    IoError(io::Error),
    /// Latitude or longitude outside its valid range
    OutOfRange {
        /// Name of the offending component ("latitude" or "longitude")
        field: &'static str,
        /// The rejected value
        value: f64,
    },
    /// Malformed coordinate text or polyline string
    Format(String),
    /// A required input was not supplied
    NullInput(&'static str),
    /// Index past the end of a coordinate list
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the list
        len: usize,
    },
    /// Invalid configuration
    ConfigError(String),
}

impl fmt::Display for PolylineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolylineError::IoError(e) => write!(f, "I/O error: {}", e),
            PolylineError::OutOfRange { field, value } => {
                let (min, max) = if *field == "latitude" { (-90, 90) } else { (-180, 180) };
                write!(f, "{} {} is out of range, must be between {} and {}", field, value, min, max)
            },
            PolylineError::Format(msg) => write!(f, "Format error: {}", msg),
            PolylineError::NullInput(name) => write!(f, "Missing required input: {}", name),
            PolylineError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for list of length {}", index, len)
            },
            PolylineError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PolylineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PolylineError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PolylineError {
    fn from(error: io::Error) -> Self {
        PolylineError::IoError(error)
    }
}

/// Result type for coordinate and polyline operations
pub type PolylineResult<T> = Result<T, PolylineError>;
