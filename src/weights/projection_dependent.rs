// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Projection-dependent weights: an explicit weight per projection.
//!
//! # Text format
//!
//! Whitespace-separated `projection:weight` pairs:
//!
//! ```
//! use coord_uniform::coords::Projection;
//! use coord_uniform::weights::ProjectionDependentWeights;
//!
//! let weights: ProjectionDependentWeights = "{0}:1.0 {0,1}:0.5 {2}:0.25".parse().unwrap();
//! assert_eq!(weights.weight(&Projection::from_indices(&[0, 1])), 0.5);
//! assert_eq!(weights.weight(&Projection::from_indices(&[1])), 0.0);
//! ```

use crate::coords::{Coordinate, Projection};
use crate::errors::{MeritError, Result};
use crate::weights::WeightAdapter;
use std::str::FromStr;

/// Explicit weights for arbitrary, non-separable projections.
///
/// Pairs are kept per largest coordinate, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ProjectionDependentWeights {
    by_largest: Vec<Vec<(Projection, f64)>>,
}

impl ProjectionDependentWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of a projection.
    ///
    /// A zero weight removes the projection. Updating an existing projection
    /// keeps its position in the iteration order.
    ///
    /// # Panics
    ///
    /// Panics if `projection` is empty: the empty projection has no largest
    /// coordinate and never carries a weight.
    pub fn set_weight(&mut self, projection: Projection, weight: f64) {
        let Some(top) = projection.max_coord() else {
            panic!("Empty projection cannot carry a weight");
        };
        let index = top.as_usize();
        if index >= self.by_largest.len() {
            if weight == 0.0 {
                return;
            }
            self.by_largest.resize_with(index + 1, Vec::new);
        }
        let bucket = &mut self.by_largest[index];
        match bucket.iter().position(|(p, _)| *p == projection) {
            Some(pos) if weight == 0.0 => {
                bucket.remove(pos);
            }
            Some(pos) => bucket[pos].1 = weight,
            None if weight != 0.0 => bucket.push((projection, weight)),
            None => {}
        }
    }

    /// Weight of a projection; 0.0 when unset.
    pub fn weight(&self, projection: &Projection) -> f64 {
        projection
            .max_coord()
            .and_then(|top| self.by_largest.get(top.as_usize()))
            .and_then(|bucket| bucket.iter().find(|(p, _)| p == projection))
            .map_or(0.0, |(_, w)| *w)
    }

    /// Number of projections with a nonzero weight.
    pub fn len(&self) -> usize {
        self.by_largest.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One past the largest coordinate that carries any weight.
    pub fn dimension(&self) -> usize {
        self.by_largest
            .iter()
            .rposition(|bucket| !bucket.is_empty())
            .map_or(0, |i| i + 1)
    }
}

impl WeightAdapter for ProjectionDependentWeights {
    fn weights_for_largest_index(&self, coordinate: Coordinate) -> Result<Vec<(Projection, f64)>> {
        Ok(self
            .by_largest
            .get(coordinate.as_usize())
            .cloned()
            .unwrap_or_default())
    }
}

impl FromStr for ProjectionDependentWeights {
    type Err = MeritError;

    fn from_str(s: &str) -> Result<Self> {
        let mut weights = Self::new();
        for item in s.split_whitespace() {
            let (proj, weight) = item
                .rsplit_once(':')
                .ok_or_else(|| MeritError::Parse(format!("expected projection:weight, got '{}'", item)))?;
            let projection: Projection = proj.parse()?;
            if projection.is_empty() {
                return Err(MeritError::Parse(format!(
                    "empty projection cannot carry a weight in '{}'",
                    item
                )));
            }
            let weight: f64 = weight
                .parse()
                .map_err(|_| MeritError::Parse(format!("invalid weight '{}' in '{}'", weight, item)))?;
            if !weight.is_finite() {
                return Err(MeritError::Parse(format!("non-finite weight in '{}'", item)));
            }
            weights.set_weight(projection, weight);
        }
        Ok(weights)
    }
}
