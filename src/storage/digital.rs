// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Storage for base-2 digital nets with 2^m points.
//!
//! Point i has coordinate j given by the binary fraction whose digits are
//! `C_j * digits(i)`. Kernel values are indexed by the m-digit value of
//! that fraction.

use crate::config::LatticeType;
use crate::net::GeneratingMatrix;
use crate::storage::Storage;
use crate::vector::MeritVector;

/// Storage of per-point values for a digital net in base 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitalStorage {
    m: usize,
}

impl DigitalStorage {
    /// # Panics
    ///
    /// Panics if `m >= 32`.
    pub fn new(m: usize) -> Self {
        assert!(m < 32, "Too many digits for digital storage: {}", m);
        Self { m }
    }

    pub fn digits(&self) -> usize {
        self.m
    }

    /// Storage index of the output digits `y` (bit r = digit r + 1 after the point).
    fn index(&self, y: u64) -> usize {
        (0..self.m)
            .filter(|&r| (y >> r) & 1 == 1)
            .fold(0usize, |acc, r| acc | (1 << (self.m - 1 - r)))
    }
}

impl Storage for DigitalStorage {
    type GenValue = GeneratingMatrix;

    fn lattice_type(&self) -> LatticeType {
        LatticeType::Digital
    }

    fn size(&self) -> usize {
        1 << self.m
    }

    fn strided(&self, values: &[f64], gen: &GeneratingMatrix) -> MeritVector {
        assert_eq!(values.len(), self.size(), "Vector length mismatch");
        (0..self.size() as u64)
            .map(|i| values[self.index(gen.apply(i))])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        assert_eq!(DigitalStorage::new(3).size(), 8);
        assert_eq!(DigitalStorage::new(0).size(), 1);
        assert_eq!(DigitalStorage::new(3).lattice_type(), LatticeType::Digital);
    }

    #[test]
    fn test_identity_is_van_der_corput() {
        let storage = DigitalStorage::new(2);
        let v = [0.0, 1.0, 2.0, 3.0];
        // radical inverse of 0, 1, 2, 3 in base 2 (times 4): 0, 2, 1, 3
        assert_eq!(
            storage.strided(&v, &GeneratingMatrix::identity(2)).as_slice(),
            &[0.0, 2.0, 1.0, 3.0]
        );
    }

    #[test]
    fn test_reversal_matrix() {
        let storage = DigitalStorage::new(2);
        let anti = GeneratingMatrix::from_rows(&[&[0, 1], &[1, 0]]);
        let v = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(storage.strided(&v, &anti).as_slice(), &v);
    }

    #[test]
    fn test_strided_is_permutation_for_invertible_matrix() {
        let storage = DigitalStorage::new(3);
        let gen = GeneratingMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 1]]);
        let v: Vec<f64> = (0..8).map(f64::from).collect();
        let mut strided = storage.strided(&v, &gen).into_vec();
        strided.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(strided, v);
    }
}
