// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate generator values per coordinate.

use crate::coords::Coordinate;
use crate::errors::Result;
use crate::net::{ExplicitConstruction, GeneratingMatrix};

/// Enumerates candidate generator values for one coordinate.
///
/// Families whose space is intractably large fail with
/// `MeritError::SpaceTooLarge` instead of enumerating.
pub trait GeneratorSpace {
    type GenValue;

    fn space_for_coordinate(&self, coord: Coordinate) -> Result<Vec<Self::GenValue>>;
}

/// Generating-vector components of an n-point rank-1 lattice.
///
/// The first component is fixed to 1; later components range over the
/// units modulo n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinarySpace {
    num_points: u64,
}

impl OrdinarySpace {
    pub fn new(num_points: u64) -> Self {
        Self { num_points }
    }
}

impl GeneratorSpace for OrdinarySpace {
    type GenValue = u64;

    fn space_for_coordinate(&self, coord: Coordinate) -> Result<Vec<u64>> {
        if coord.as_usize() == 0 {
            return Ok(vec![1]);
        }
        let n = self.num_points;
        Ok((1..n.max(2)).filter(|&a| gcd(a, n) == 1).collect())
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Explicit generating matrices: never enumerable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitSpace {
    construction: ExplicitConstruction,
}

impl ExplicitSpace {
    pub fn new(construction: ExplicitConstruction) -> Self {
        Self { construction }
    }
}

impl GeneratorSpace for ExplicitSpace {
    type GenValue = GeneratingMatrix;

    fn space_for_coordinate(&self, coord: Coordinate) -> Result<Vec<GeneratingMatrix>> {
        self.construction.gen_value_space_coord(coord.as_usize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_first_coordinate() {
        let space = OrdinarySpace::new(8);
        assert_eq!(space.space_for_coordinate(Coordinate::new(0)).unwrap(), vec![1]);
    }

    #[test]
    fn test_ordinary_units() {
        let space = OrdinarySpace::new(8);
        assert_eq!(
            space.space_for_coordinate(Coordinate::new(1)).unwrap(),
            vec![1, 3, 5, 7]
        );
        let prime = OrdinarySpace::new(5);
        assert_eq!(
            prime.space_for_coordinate(Coordinate::new(3)).unwrap(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_ordinary_single_point() {
        let space = OrdinarySpace::new(1);
        assert_eq!(space.space_for_coordinate(Coordinate::new(2)).unwrap(), vec![1]);
    }

    #[test]
    fn test_explicit_is_unsupported() {
        let space = ExplicitSpace::new(ExplicitConstruction::new(3, 3));
        assert!(space
            .space_for_coordinate(Coordinate::new(0))
            .unwrap_err()
            .is_unsupported());
    }
}
