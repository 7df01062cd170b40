// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense real vectors holding per-point merit values.

use std::ops::Deref;

/// A dense vector of per-point values, one entry per storage index.
///
/// Cached vectors are handed out by shared reference only; all arithmetic
/// either allocates a new vector or mutates an accumulator the caller owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeritVector(Vec<f64>);

impl MeritVector {
    /// The all-ones vector of length `n` (the merit of the empty projection).
    pub fn ones(n: usize) -> Self {
        Self(vec![1.0; n])
    }

    /// The all-zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self(vec![0.0; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Elementwise product.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn hadamard(&self, other: &[f64]) -> Self {
        assert_eq!(self.len(), other.len(), "Vector length mismatch");
        Self(self.0.iter().zip(other).map(|(a, b)| a * b).collect())
    }

    /// In-place `self += weight * other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn add_scaled(&mut self, weight: f64, other: &[f64]) {
        assert_eq!(self.len(), other.len(), "Vector length mismatch");
        for (acc, x) in self.0.iter_mut().zip(other) {
            *acc += weight * x;
        }
    }

    /// Sum of all entries, reduced left to right.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Deref for MeritVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for MeritVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for MeritVector {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for MeritVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
