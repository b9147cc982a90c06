//! Google Encoded Polyline Algorithm Format
//!
//! This module converts between coordinate paths and the compact polyline
//! text used by mapping APIs. Both directions are pure functions.

pub mod errors;
pub(crate) mod constants;
mod encoder;
mod decoder;
mod tests;

pub use errors::{PolylineError, PolylineResult};
pub use encoder::{encode, encode_text};
pub use decoder::{decode, decode_to_text};
