//! Command input/output utilities
//!
//! Helpers for resolving the text a command operates on and for
//! delivering its result to stdout or a file.

use std::fs;
use std::io::{self, Write};
use log::debug;

use crate::polyline::errors::{PolylineError, PolylineResult};

/// Resolve command input text
///
/// # Arguments
/// * `input` - Literal input text, or a path when `from_file` is set
/// * `from_file` - Whether `input` names a file to read
///
/// # Returns
/// The trimmed input text. Empty input is reported as
/// `PolylineError::NullInput` so commands never run on nothing.
pub fn read_input(input: &str, from_file: bool) -> PolylineResult<String> {
    let text = if from_file {
        debug!("Reading input from file {}", input);
        fs::read_to_string(input)?
    } else {
        input.to_string()
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(PolylineError::NullInput("input"));
    }
    Ok(text.to_string())
}

/// Write a command result followed by a newline
///
/// # Arguments
/// * `result` - Text to write
/// * `output_file` - Destination file, or `None` for stdout
pub fn write_output(result: &str, output_file: Option<&str>) -> PolylineResult<()> {
    match output_file {
        Some(path) => {
            debug!("Writing result to {}", path);
            fs::write(path, format!("{}\n", result))?;
        },
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", result)?;
        },
    }
    Ok(())
}
