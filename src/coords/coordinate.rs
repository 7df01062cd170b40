// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coordinate type for dimension indices.
//!
//! Coordinates are 0-indexed: the first appended dimension is coordinate 0.

use crate::coords::constants::MAX_COORDS;
use std::fmt;

/// A coordinate (dimension index) in the range 0..MAX_COORDS.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// coordinates with point indices or vector lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate(u16);

impl Coordinate {
    /// Create a new coordinate, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= MAX_COORDS`.
    pub fn new(value: usize) -> Self {
        assert!(value < MAX_COORDS, "Coordinate out of range: {}", value);
        Self(value as u16)
    }

    /// Try to create a new coordinate, returning None if out of range.
    pub fn try_new(value: usize) -> Option<Self> {
        if value < MAX_COORDS {
            Some(Self(value as u16))
        } else {
            None
        }
    }

    /// Get the coordinate as a usize (for indexing the generator history).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
