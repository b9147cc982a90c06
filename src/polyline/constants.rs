//! Constants of the Encoded Polyline Algorithm Format

/// Degrees are multiplied by this before rounding to integers
pub const PRECISION: f64 = 1e5;

/// Added to every 6-bit chunk to reach printable ASCII
pub const CHAR_OFFSET: u8 = 63;

/// Highest character a polyline may contain ('~')
pub const MAX_CHAR: u8 = 126;

/// Set on a chunk when more chunks follow for the same value
pub const CONTINUATION_BIT: u64 = 0x20;

/// Payload bits of a chunk
pub const CHUNK_MASK: u64 = 0x1f;

/// Shift of the last chunk a 64-bit value can hold; only its low 4 bits fit
pub const MAX_SHIFT: u32 = 60;
