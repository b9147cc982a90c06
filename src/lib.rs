pub mod polyline;
pub mod coordinate;
pub mod utils;
pub mod config;
pub mod commands;
pub mod api;

pub use crate::api::PolylineKit;

pub use polyline::{decode, decode_to_text, encode, encode_text, PolylineError, PolylineResult};
pub use coordinate::{Coordinate, CoordinateList};
pub use config::PolylineConfig;
