//! Unit tests for coordinates and coordinate lists
