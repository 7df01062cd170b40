// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Projection type for representing sets of coordinates as bitsets.
//!
//! A Projection is a compact, copyable representation of a set of coordinates,
//! where bit i represents the presence of coordinate i. It is the key of the
//! projection merit cache.
//!
//! # Examples
//!
//! ```
//! use coord_uniform::coords::{Coordinate, Projection};
//!
//! let mut proj = Projection::empty();
//! proj.insert(Coordinate::new(0));
//! proj.insert(Coordinate::new(3));
//!
//! assert_eq!(proj.len(), 2);
//! assert_eq!(proj.max_coord(), Some(Coordinate::new(3)));
//! assert_eq!(format!("{}", proj), "{0,3}");
//! assert_eq!(format!("{}", proj.without_max()), "{0}");
//! ```

use crate::coords::constants::{ProjectionWord, MAX_COORDS};
use crate::coords::Coordinate;
use crate::errors::MeritError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A set of coordinates represented as a bitset.
///
/// Bit i (counting from LSB) is set if coordinate i is in the set.
/// Insert, remove, contains and max are all O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Projection(ProjectionWord);

impl Projection {
    /// Create the empty projection.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a projection from a slice of coordinates.
    pub fn from_coords(coords: &[Coordinate]) -> Self {
        let mut proj = Self::empty();
        for &coord in coords {
            proj.insert(coord);
        }
        proj
    }

    /// Create a projection from raw coordinate indices.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= MAX_COORDS`.
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut proj = Self::empty();
        for &index in indices {
            proj.insert(Coordinate::new(index));
        }
        proj
    }

    /// Create a projection from a raw bit value.
    pub const fn from_bits(bits: ProjectionWord) -> Self {
        Self(bits)
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> ProjectionWord {
        self.0
    }

    /// Check if the projection contains a specific coordinate.
    pub fn contains(self, coord: Coordinate) -> bool {
        (self.0 >> coord.as_usize()) & 1 != 0
    }

    /// Insert a coordinate into the projection.
    pub fn insert(&mut self, coord: Coordinate) {
        self.0 |= 1 << coord.as_usize();
    }

    /// Remove a coordinate from the projection.
    pub fn remove(&mut self, coord: Coordinate) {
        self.0 &= !(1 << coord.as_usize());
    }

    /// Number of coordinates in the projection (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the projection is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Largest coordinate in the projection, or None for the empty projection.
    pub fn max_coord(self) -> Option<Coordinate> {
        if self.0 == 0 {
            None
        } else {
            Some(Coordinate::new(MAX_COORDS - 1 - self.0.leading_zeros() as usize))
        }
    }

    /// The projection with its largest coordinate removed.
    ///
    /// The empty projection maps to itself.
    pub fn without_max(self) -> Self {
        match self.max_coord() {
            Some(top) => {
                let mut base = self;
                base.remove(top);
                base
            }
            None => self,
        }
    }

    /// Check if every coordinate of `self` is also in `other`.
    pub fn is_subset_of(self, other: Projection) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate over all coordinates in the projection.
    ///
    /// Coordinates are yielded in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Coordinate> {
        ProjectionIter { bits: self.0 }
    }
}

/// Iterator over coordinates in a Projection.
struct ProjectionIter {
    bits: ProjectionWord,
}

impl Iterator for ProjectionIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Coordinate::new(index))
    }
}

/// Projections order by size first, then colexicographically.
///
/// This is the order in which a bottom-up construction can build them:
/// every projection sorts after the projection obtained by dropping its
/// largest coordinate.
impl Ord for Projection {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Projection {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Projection {
    /// Format a projection as "{0,2,5}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, coord) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", coord)?;
        }
        write!(f, "}}")
    }
}

impl FromStr for Projection {
    type Err = MeritError;

    /// Parse "{0,2,5}" or "0,2,5". Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(trimmed);

        let mut proj = Self::empty();
        for part in inner.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let index: usize = part
                .parse()
                .map_err(|_| MeritError::Parse(format!("invalid coordinate '{}' in '{}'", part, s)))?;
            let coord = Coordinate::try_new(index).ok_or(MeritError::CoordinateOutOfRange {
                coordinate: index,
                max: MAX_COORDS,
            })?;
            proj.insert(coord);
        }
        Ok(proj)
    }
}

impl From<&[Coordinate]> for Projection {
    fn from(coords: &[Coordinate]) -> Self {
        Self::from_coords(coords)
    }
}
