// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The reference harness recomputes cached products from the kernel values
//! recorded per appended dimension, without any memoization.

#![allow(dead_code)]

use coord_uniform::coords::{Coordinate, Projection};
use coord_uniform::storage::Storage;
use coord_uniform::weights::{ProjectionDependentWeights, WeightAdapter};
use coord_uniform::MeritVector;

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn proj(indices: &[usize]) -> Projection {
    Projection::from_indices(indices)
}

pub fn weights(pairs: &[(&[usize], f64)]) -> ProjectionDependentWeights {
    let mut weights = ProjectionDependentWeights::new();
    for (indices, w) in pairs {
        weights.set_weight(proj(indices), *w);
    }
    weights
}

/// Kernel values and generator value recorded for each appended dimension.
pub struct Recorded<G> {
    pub kernels: Vec<Vec<f64>>,
    pub gens: Vec<G>,
}

impl<G> Recorded<G> {
    pub fn new() -> Self {
        Self {
            kernels: Vec::new(),
            gens: Vec::new(),
        }
    }

    pub fn push(&mut self, kernel: Vec<f64>, gen: G) {
        self.kernels.push(kernel);
        self.gens.push(gen);
    }

    /// Product of strided kernels over the projection, ascending coordinates.
    pub fn state<S: Storage<GenValue = G>>(&self, storage: &S, projection: Projection) -> MeritVector {
        projection
            .iter()
            .fold(MeritVector::ones(storage.size()), |acc, coord| {
                let k = coord.as_usize();
                acc.hadamard(&storage.strided(&self.kernels[k], &self.gens[k]))
            })
    }

    /// Weighted state for the next coordinate, from scratch.
    pub fn weighted<S: Storage<GenValue = G>>(
        &self,
        storage: &S,
        weights: &ProjectionDependentWeights,
    ) -> MeritVector {
        let mut acc = MeritVector::zeros(storage.size());
        let next = Coordinate::new(self.gens.len());
        for (projection, w) in weights.weights_for_largest_index(next).unwrap() {
            acc.add_scaled(w, &self.state(storage, projection.without_max()));
        }
        acc
    }
}

/// Merit of a full ordinary lattice straight from the definition:
/// sum over weighted projections u of w_u * sum_i prod_{k in u} ω[i a_k mod n].
pub fn brute_force_merit(
    n: u64,
    kernel: &[f64],
    gens: &[u64],
    weights: &ProjectionDependentWeights,
) -> f64 {
    let mut total = 0.0;
    for j in 0..gens.len() {
        for (projection, w) in weights.weights_for_largest_index(Coordinate::new(j)).unwrap() {
            let mut sum = 0.0;
            for i in 0..n {
                let product: f64 = projection
                    .iter()
                    .map(|c| kernel[((i * gens[c.as_usize()]) % n) as usize])
                    .product();
                sum += product;
            }
            total += w * sum;
        }
    }
    total
}
