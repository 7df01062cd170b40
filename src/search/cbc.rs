// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Component-by-component construction driven by the projection merit cache.
//!
//! For each coordinate in turn, every candidate generator value a is scored by
//! `sum(strided(ω, a) ⊙ weighted_merit())`, the smallest score wins (the
//! first candidate on ties), the cache is extended with the winner and the
//! score is added to the running merit. Scores are unnormalized sums over the
//! points of the set; a compressed storage entry counts once per point it
//! stands for.

use crate::config::KernelPolicy;
use crate::coords::{Coordinate, MAX_COORDS};
use crate::errors::{MeritError, Result};
use crate::search::GeneratorSpace;
use crate::state::ProjectionMeritCache;
use crate::storage::Storage;
use crate::weights::WeightAdapter;
use tracing::{debug, info};

/// Outcome of a component-by-component search.
#[derive(Debug, Clone, PartialEq)]
pub struct CbcResult<G> {
    /// Selected generator value per coordinate.
    pub generators: Vec<G>,
    /// Cumulative merit after each coordinate.
    pub merits: Vec<f64>,
}

impl<G> CbcResult<G> {
    /// Merit of the full construction (0.0 for dimension 0).
    pub fn merit(&self) -> f64 {
        self.merits.last().copied().unwrap_or(0.0)
    }
}

/// Component-by-component search over a generator space.
#[derive(Debug)]
pub struct CbcSearch<S: Storage, W, G> {
    cache: ProjectionMeritCache<S, W>,
    space: G,
}

impl<S, W, G> CbcSearch<S, W, G>
where
    S: Storage,
    W: WeightAdapter,
    G: GeneratorSpace<GenValue = S::GenValue>,
{
    /// Take ownership of `cache` for the search.
    ///
    /// The search supplies one set of kernel values for every coordinate, so
    /// the cache is switched to [`KernelPolicy::Shared`].
    pub fn new(mut cache: ProjectionMeritCache<S, W>, space: G) -> Self {
        cache.set_kernel_policy(KernelPolicy::Shared);
        Self { cache, space }
    }

    pub fn cache(&self) -> &ProjectionMeritCache<S, W> {
        &self.cache
    }

    /// Score every candidate of one coordinate against a weighted state.
    pub fn scores(&self, kernel_values: &[f64], candidates: &[S::GenValue]) -> Result<Vec<f64>> {
        let weighted = self.cache.weighted_merit()?;
        let storage = self.cache.storage();
        Ok(candidates
            .iter()
            .map(|gen| {
                storage.point_sum(&storage.strided(kernel_values, gen).hadamard(&weighted))
            })
            .collect())
    }

    /// Choose generator values for coordinates `0..dimension`.
    ///
    /// The same kernel values are used for every coordinate. The cache is
    /// reset first and left holding the selected construction.
    pub fn run(&mut self, kernel_values: &[f64], dimension: usize) -> Result<CbcResult<S::GenValue>> {
        if dimension > MAX_COORDS {
            return Err(MeritError::CoordinateOutOfRange {
                coordinate: dimension - 1,
                max: MAX_COORDS,
            });
        }
        self.cache.reset();

        let mut merits = Vec::with_capacity(dimension);
        let mut total = 0.0;
        for j in 0..dimension {
            let candidates = self.space.space_for_coordinate(Coordinate::new(j))?;
            let scores = self.scores(kernel_values, &candidates)?;

            let mut best: Option<(usize, f64)> = None;
            for (i, &score) in scores.iter().enumerate() {
                if best.map_or(true, |(_, s)| score < s) {
                    best = Some((i, score));
                }
            }
            let (index, score) = best.ok_or(MeritError::EmptySpace { coordinate: j })?;
            let gen = candidates[index].clone();
            debug!(
                coordinate = j,
                candidates = candidates.len(),
                score,
                generator = ?gen,
                "selected generator"
            );

            total += score;
            merits.push(total);
            self.cache.extend(kernel_values, gen)?;
        }

        info!(
            lattice = %self.cache.storage().lattice_type(),
            dimension,
            merit = total,
            "component-by-component search finished"
        );
        Ok(CbcResult {
            generators: self.cache.generators().to_vec(),
            merits,
        })
    }
}
