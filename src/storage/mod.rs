// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point-set storage: vector length and per-coordinate reindexing.
//!
//! A storage knows how many per-point values a merit vector holds and how a
//! generator value permutes kernel values onto the points of the set. The
//! projection cache is generic over it, so one cache implementation serves
//! every lattice family and compression scheme.

pub mod digital;
pub mod ordinary;

pub use digital::DigitalStorage;
pub use ordinary::OrdinaryStorage;

use crate::config::LatticeType;
use crate::vector::MeritVector;
use std::fmt::Debug;

/// Storage adapter consumed by the projection merit cache.
pub trait Storage: Debug {
    /// Per-coordinate construction parameter.
    type GenValue: Clone + Debug;

    /// Family of point sets this storage indexes.
    fn lattice_type(&self) -> LatticeType;

    /// Length of every merit vector. Fixed for the lifetime of the storage.
    fn size(&self) -> usize;

    /// Reindex `values` according to how coordinate generator `gen` maps points.
    ///
    /// Pure: the output has the same length as the input.
    fn strided(&self, values: &[f64], gen: &Self::GenValue) -> MeritVector;

    /// Sum of per-point values over every point of the set.
    ///
    /// Differs from a plain sum when one entry stands for several points.
    fn point_sum(&self, values: &[f64]) -> f64 {
        values.iter().sum()
    }
}
