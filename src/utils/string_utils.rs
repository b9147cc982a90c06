//! String utility functions
//!
//! Utilities for working with strings and text data.

/// Removes a single leading `c` from `text`, if present
pub fn strip_one_prefix(text: &str, c: char) -> &str {
    text.strip_prefix(c).unwrap_or(text)
}

/// Removes a single trailing `c` from `text`, if present
pub fn strip_one_suffix(text: &str, c: char) -> &str {
    text.strip_suffix(c).unwrap_or(text)
}
