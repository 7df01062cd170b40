// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Storage for rank-1 ordinary lattice rules.
//!
//! Point i of an n-point lattice has coordinate j equal to `i * a_j / n mod 1`,
//! so kernel values indexed by `k / n` are strided by `k = i * a_j mod n`.

use crate::config::{Compress, LatticeType};
use crate::storage::Storage;
use crate::vector::MeritVector;

/// Storage of per-point values for an ordinary lattice with `num_points` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinaryStorage {
    num_points: u64,
    compress: Compress,
}

impl OrdinaryStorage {
    /// # Panics
    ///
    /// Panics if `num_points` is zero.
    pub fn new(num_points: u64, compress: Compress) -> Self {
        assert!(num_points > 0, "Lattice must have at least one point");
        Self {
            num_points,
            compress,
        }
    }

    pub fn num_points(&self) -> u64 {
        self.num_points
    }

    pub fn compress(&self) -> Compress {
        self.compress
    }

    /// Storage index of point index `k` (0..n).
    fn unpermuted(&self, k: u64) -> usize {
        match self.compress {
            Compress::None => k as usize,
            Compress::Symmetric => k.min(self.num_points - k) as usize,
        }
    }

    /// Number of points sharing storage entry `index`.
    fn multiplicity(&self, index: u64) -> u64 {
        match self.compress {
            Compress::None => 1,
            Compress::Symmetric if index == 0 || 2 * index == self.num_points => 1,
            Compress::Symmetric => 2,
        }
    }
}

impl Storage for OrdinaryStorage {
    type GenValue = u64;

    fn lattice_type(&self) -> LatticeType {
        LatticeType::Ordinary
    }

    fn size(&self) -> usize {
        match self.compress {
            Compress::None => self.num_points as usize,
            Compress::Symmetric => (self.num_points / 2 + 1) as usize,
        }
    }

    fn strided(&self, values: &[f64], gen: &u64) -> MeritVector {
        assert_eq!(values.len(), self.size(), "Vector length mismatch");
        let n = self.num_points as u128;
        let a = *gen as u128 % n;
        (0..self.size() as u128)
            .map(|i| values[self.unpermuted(((i * a) % n) as u64)])
            .collect()
    }

    fn point_sum(&self, values: &[f64]) -> f64 {
        values
            .iter()
            .enumerate()
            .map(|(index, v)| self.multiplicity(index as u64) as f64 * v)
            .sum()
    }
}
