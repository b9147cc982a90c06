//! Unit tests for the polyline codec

#[cfg(test)]
mod encoder_tests;
