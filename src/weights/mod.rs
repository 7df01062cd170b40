// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weight adapters: which projections carry a weight, grouped by largest coordinate.

pub mod projection_dependent;

pub use projection_dependent::ProjectionDependentWeights;

use crate::coords::{Coordinate, Projection};
use crate::errors::Result;

/// Weight adapter consumed by the projection merit cache.
///
/// Implementations must be deterministic: two calls with the same coordinate
/// return the same pairs in the same order. Summation order in
/// `weighted_merit` follows this order exactly.
pub trait WeightAdapter {
    /// Every (projection, weight) pair with a nonzero weight whose largest
    /// coordinate is `coordinate`.
    ///
    /// May fail with `MeritError::SpaceTooLarge` for weight families that
    /// cannot enumerate their projections.
    fn weights_for_largest_index(&self, coordinate: Coordinate) -> Result<Vec<(Projection, f64)>>;
}
