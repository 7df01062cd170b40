// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental coordinate-uniform state for projection-dependent weights.
//!
//! # Recurrence
//!
//! For every projection u reachable from a weighted projection by repeatedly
//! dropping the largest coordinate, the cache holds
//!
//! ```text
//! state[{}] = 1
//! state[u]  = strided(ω_k, a_k) ⊙ state[u \ {k}]     where k = max u
//! ```
//!
//! After coordinates 0..d have been appended, the weighted state for the next
//! coordinate d is
//!
//! ```text
//! Σ over u with max u = d of  γ_u · state[u \ {d}]
//! ```
//!
//! A search driver multiplies it elementwise with `strided(ω_d, a)` to score
//! a candidate generator a for coordinate d.
//!
//! # Call order
//!
//! `reset`, then alternately `weighted_merit` (any number of times) and
//! `extend`. `extend` for coordinate d prepares every reduced projection the
//! weighted state of coordinate d + 1 reads. Its fresh constructions use the
//! kernel values supplied with it, so they are only valid for entries whose
//! largest coordinate is d; see [`KernelPolicy`].

use crate::config::{CacheConfig, KernelPolicy};
use crate::coords::{Coordinate, Projection};
use crate::errors::{MeritError, Result};
use crate::state::statistics::{Counters, Statistics};
use crate::state::DimensionTracker;
use crate::storage::Storage;
use crate::vector::MeritVector;
use crate::weights::WeightAdapter;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Memoized per-projection merit vectors for a growing set of dimensions.
///
/// Owns its cache and generator history exclusively. Parallel searches over
/// different candidates each need their own instance.
#[derive(Debug)]
pub struct ProjectionMeritCache<S: Storage, W> {
    storage: S,
    weights: W,
    config: CacheConfig,
    tracker: DimensionTracker<S::GenValue>,
    cache: HashMap<Projection, MeritVector>,
    /// Dimension whose weighted state is ready; None while an extend is incomplete.
    prepared: Option<usize>,
    statistics: Statistics,
}

impl<S: Storage, W: WeightAdapter> ProjectionMeritCache<S, W> {
    /// Create a cache in the reset state (dimension 0).
    pub fn new(storage: S, weights: W) -> Self {
        Self::with_config(storage, weights, CacheConfig::default())
    }

    pub fn with_config(storage: S, weights: W, config: CacheConfig) -> Self {
        let mut cache = Self {
            storage,
            weights,
            config,
            tracker: DimensionTracker::new(),
            cache: HashMap::new(),
            prepared: None,
            statistics: Statistics::new(),
        };
        cache.reset();
        cache
    }

    /// Forget every appended dimension and cached entry.
    ///
    /// Afterwards the cache holds only the empty projection, mapped to the
    /// all-ones vector.
    pub fn reset(&mut self) {
        self.tracker.clear();
        self.cache.clear();
        self.cache
            .insert(Projection::empty(), MeritVector::ones(self.storage.size()));
        self.prepared = Some(0);
        self.statistics.increment_counter(Counters::Resets);
        debug!(
            lattice = %self.storage.lattice_type(),
            size = self.storage.size(),
            "projection merit cache reset"
        );
    }

    /// Append one dimension with its kernel values and generator value.
    ///
    /// Builds every reduced projection needed by the weighted state of the
    /// next coordinate. On error the dimension stays appended but
    /// `weighted_merit` refuses to run until the next `reset`.
    pub fn extend(&mut self, kernel_values: &[f64], gen: S::GenValue) -> Result<()> {
        let result = self.try_extend(kernel_values, gen);
        if let Err(failure) = &result {
            self.statistics.record_failure(failure);
        }
        result
    }

    fn try_extend(&mut self, kernel_values: &[f64], gen: S::GenValue) -> Result<()> {
        let size = self.storage.size();
        if kernel_values.len() != size {
            return Err(MeritError::KernelLength {
                expected: size,
                actual: kernel_values.len(),
            });
        }
        let appended = self.tracker.dimension();
        if Coordinate::try_new(appended).is_none() {
            return Err(MeritError::CoordinateOutOfRange {
                coordinate: appended,
                max: crate::coords::MAX_COORDS,
            });
        }

        self.prepared = None;
        self.tracker.push(gen);
        self.statistics.increment_counter(Counters::Extends);

        let next = self.tracker.dimension();
        let before = self.cache.len();
        if let Some(next_coord) = Coordinate::try_new(next) {
            let mut strided = HashMap::new();
            for (projection, _) in self.weights.weights_for_largest_index(next_coord)? {
                self.resolve(projection.without_max(), kernel_values, &mut strided)?;
            }
        }
        self.prepared = Some(next);

        debug!(
            coordinate = appended,
            new_entries = self.cache.len() - before,
            cached = self.cache.len(),
            "extended projection merit cache"
        );
        Ok(())
    }

    /// Make sure `projection` is cached, building it and any missing bases.
    ///
    /// Missing entries are built bottom-up from the deepest cached base.
    /// `strided` memoizes strided kernel values per top coordinate for the
    /// duration of one `extend`.
    fn resolve(
        &mut self,
        projection: Projection,
        kernel_values: &[f64],
        strided: &mut HashMap<Coordinate, MeritVector>,
    ) -> Result<&MeritVector> {
        let mut pending = Vec::new();
        let mut cursor = projection;
        while !self.cache.contains_key(&cursor) {
            pending.push(cursor);
            cursor = cursor.without_max();
        }
        if pending.is_empty() {
            self.statistics.increment_counter(Counters::CacheHits);
        }

        let current = self.tracker.dimension() - 1;
        while let Some(proj) = pending.pop() {
            // The empty projection is always cached, so proj has a top coordinate.
            let Some(top) = proj.max_coord() else { break };
            let gen = self
                .tracker
                .generator(top)
                .ok_or(MeritError::CoordinateOutOfRange {
                    coordinate: top.as_usize(),
                    max: current,
                })?;
            if self.config.kernel_policy == KernelPolicy::Strict && top.as_usize() != current {
                return Err(MeritError::StaleKernel {
                    coordinate: top.as_usize(),
                    current,
                });
            }

            let storage = &self.storage;
            let kernel = strided
                .entry(top)
                .or_insert_with(|| storage.strided(kernel_values, gen));
            let value = self.cache[&proj.without_max()].hadamard(kernel.as_slice());
            trace!(projection = %proj, "built projection state");
            self.cache.insert(proj, value);
            self.statistics
                .increment_counter(Counters::FreshConstructions);
        }

        Ok(&self.cache[&projection])
    }

    /// Weighted state for the next coordinate (index `dimension()`).
    ///
    /// Sums `weight * state[projection \ {max}]` over the weight adapter's
    /// pairs for that coordinate, in the adapter's order. Does not mutate.
    ///
    /// Fails with `ProjectionNotCached` if a reduced projection is missing,
    /// which means the adapter changed since the matching `extend`, and with
    /// `IncompleteExtension` if that `extend` failed.
    pub fn weighted_merit(&self) -> Result<MeritVector> {
        let result = self.try_weighted_merit();
        match &result {
            Ok(_) => self.statistics.increment_counter(Counters::WeightedPasses),
            Err(failure) => self.statistics.record_failure(failure),
        }
        result
    }

    fn try_weighted_merit(&self) -> Result<MeritVector> {
        let dimension = self.tracker.dimension();
        if self.prepared != Some(dimension) {
            return Err(MeritError::IncompleteExtension { dimension });
        }

        let mut weighted = MeritVector::zeros(self.storage.size());
        let Some(next_coord) = Coordinate::try_new(dimension) else {
            return Ok(weighted);
        };
        for (projection, weight) in self.weights.weights_for_largest_index(next_coord)? {
            let reduced = projection.without_max();
            let state = self
                .cache
                .get(&reduced)
                .ok_or(MeritError::ProjectionNotCached {
                    projection: reduced,
                    coordinate: dimension,
                })?;
            weighted.add_scaled(weight, state);
        }
        Ok(weighted)
    }

    /// Number of appended dimensions.
    pub fn dimension(&self) -> usize {
        self.tracker.dimension()
    }

    /// Generator values of the appended dimensions, in order.
    pub fn generators(&self) -> &[S::GenValue] {
        self.tracker.generators()
    }

    /// Cached state of a projection, if built.
    pub fn cached(&self, projection: &Projection) -> Option<&MeritVector> {
        self.cache.get(projection)
    }

    /// All cached projections, smallest first.
    pub fn cached_projections(&self) -> Vec<Projection> {
        let mut projections: Vec<Projection> = self.cache.keys().copied().collect();
        projections.sort();
        projections
    }

    /// Number of cached projections (at least 1: the empty projection).
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Change how fresh constructions treat kernel values of earlier coordinates.
    ///
    /// Takes effect from the next `extend`; entries already cached are kept.
    pub fn set_kernel_policy(&mut self, kernel_policy: KernelPolicy) {
        self.config.kernel_policy = kernel_policy;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn weights(&self) -> &W {
        &self.weights
    }

    /// Mutable access to the weights.
    ///
    /// Changing the weights of the next coordinate between `extend` and
    /// `weighted_merit` can make `weighted_merit` fail with `ProjectionNotCached`.
    pub fn weights_mut(&mut self) -> &mut W {
        &mut self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Compress;
    use crate::storage::OrdinaryStorage;
    use crate::weights::ProjectionDependentWeights;

    fn proj(indices: &[usize]) -> Projection {
        Projection::from_indices(indices)
    }

    fn weights(pairs: &[(&[usize], f64)]) -> ProjectionDependentWeights {
        let mut weights = ProjectionDependentWeights::new();
        for (indices, w) in pairs {
            weights.set_weight(proj(indices), *w);
        }
        weights
    }

    fn cache(
        n: u64,
        pairs: &[(&[usize], f64)],
    ) -> ProjectionMeritCache<OrdinaryStorage, ProjectionDependentWeights> {
        ProjectionMeritCache::new(OrdinaryStorage::new(n, Compress::None), weights(pairs))
    }

    #[test]
    fn test_reset_seeds_empty_projection() {
        let cache = cache(4, &[]);
        assert_eq!(cache.dimension(), 0);
        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.cached(&Projection::empty()).unwrap().as_slice(),
            &[1.0; 4]
        );
        assert_eq!(cache.statistics().get(Counters::Resets), 1);
    }

    #[test]
    fn test_weighted_merit_at_dimension_zero() {
        let empty = cache(4, &[]);
        assert_eq!(empty.weighted_merit().unwrap().as_slice(), &[0.0; 4]);

        let single = cache(4, &[(&[0], 2.0)]);
        assert_eq!(single.weighted_merit().unwrap().as_slice(), &[2.0; 4]);
    }

    #[test]
    fn test_extend_builds_reduced_projection() {
        let mut cache = cache(4, &[(&[0, 1], 0.5)]);
        cache.extend(&[1.0, 2.0, 3.0, 4.0], 3).unwrap();

        // i * 3 mod 4 = 0, 3, 2, 1
        let expected = [1.0, 4.0, 3.0, 2.0];
        assert_eq!(cache.cached(&proj(&[0])).unwrap().as_slice(), &expected);
        assert_eq!(
            cache.weighted_merit().unwrap().as_slice(),
            &[0.5, 2.0, 1.5, 1.0]
        );
        assert_eq!(cache.statistics().get(Counters::FreshConstructions), 1);
    }

    #[test]
    fn test_singleton_weight_reads_empty_projection() {
        let mut cache = cache(4, &[(&[1], 0.5)]);
        cache.extend(&[1.0, 2.0, 3.0, 4.0], 1).unwrap();
        assert_eq!(cache.weighted_merit().unwrap().as_slice(), &[0.5; 4]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_kernel_length_checked() {
        let mut cache = cache(4, &[(&[0, 1], 1.0)]);
        let err = cache.extend(&[1.0, 2.0], 1).unwrap_err();
        assert_eq!(err, MeritError::KernelLength { expected: 4, actual: 2 });
        // Nothing was appended
        assert_eq!(cache.dimension(), 0);
        assert!(cache.weighted_merit().is_ok());
        assert_eq!(cache.statistics().failures(&err), 1);
    }

    #[test]
    fn test_strict_policy_rejects_stale_kernel() {
        // {0,2} needs state[{0}] when coordinate 1 is appended
        let mut cache = cache(4, &[(&[0, 2], 1.0)]);
        cache.extend(&[1.0; 4], 1).unwrap();
        let err = cache.extend(&[2.0; 4], 1).unwrap_err();
        assert_eq!(err, MeritError::StaleKernel { coordinate: 0, current: 1 });
        assert!(err.is_protocol_violation());
        assert_eq!(
            cache.weighted_merit().unwrap_err(),
            MeritError::IncompleteExtension { dimension: 2 }
        );
    }

    #[test]
    fn test_shared_policy_builds_lower_coordinates() {
        let mut cache = ProjectionMeritCache::with_config(
            OrdinaryStorage::new(4, Compress::None),
            weights(&[(&[0, 2], 1.0)]),
            CacheConfig::new().with_kernel_policy(KernelPolicy::Shared),
        );
        let kernel = [1.0, 2.0, 3.0, 4.0];
        cache.extend(&kernel, 1).unwrap();
        cache.extend(&kernel, 3).unwrap();
        assert_eq!(cache.cached(&proj(&[0])).unwrap().as_slice(), &kernel);
        assert_eq!(cache.weighted_merit().unwrap().as_slice(), &kernel);
    }

    #[test]
    fn test_changed_weights_are_detected() {
        let mut cache = cache(4, &[(&[1], 1.0)]);
        cache.extend(&[1.0; 4], 1).unwrap();
        cache.weights_mut().set_weight(proj(&[0, 1]), 1.0);
        let err = cache.weighted_merit().unwrap_err();
        assert_eq!(
            err,
            MeritError::ProjectionNotCached {
                projection: proj(&[0]),
                coordinate: 1
            }
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut cache = cache(4, &[(&[0, 1], 1.0)]);
        cache.extend(&[1.0, 2.0, 3.0, 4.0], 1).unwrap();
        assert_eq!(cache.len(), 2);
        cache.reset();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.dimension(), 0);
        assert!(cache.generators().is_empty());
        assert_eq!(cache.cached_projections(), vec![Projection::empty()]);
    }

    #[test]
    fn test_reset_recovers_from_failed_extend() {
        let mut cache = cache(4, &[(&[0, 2], 1.0)]);
        cache.extend(&[1.0; 4], 1).unwrap();
        assert!(cache.extend(&[1.0; 4], 1).is_err());
        cache.reset();
        assert!(cache.weighted_merit().is_ok());
    }

    #[test]
    fn test_cache_hits_counted() {
        let mut cache = cache(4, &[(&[0, 1], 1.0), (&[1], 1.0)]);
        cache.extend(&[1.0; 4], 1).unwrap();
        // {0} built fresh, {} already cached
        assert_eq!(cache.statistics().get(Counters::FreshConstructions), 1);
        assert_eq!(cache.statistics().get(Counters::CacheHits), 1);
    }

    #[test]
    fn test_weighted_passes_counted() {
        let mut cache = cache(4, &[(&[0, 1], 1.0)]);
        cache.extend(&[1.0; 4], 1).unwrap();
        cache.weighted_merit().unwrap();
        cache.weighted_merit().unwrap();
        assert_eq!(cache.statistics().get(Counters::WeightedPasses), 2);

        cache.reset();
        assert!(cache.weighted_merit().is_ok());
        assert_eq!(cache.statistics().get(Counters::WeightedPasses), 3);
    }

    #[test]
    fn test_weighted_merit_failures_counted() {
        let mut cache = cache(4, &[(&[0, 2], 1.0)]);
        cache.extend(&[1.0; 4], 1).unwrap();
        assert!(cache.extend(&[1.0; 4], 1).is_err());
        assert!(cache.weighted_merit().is_err());
        let stats = cache.statistics();
        assert_eq!(stats.failures_of(crate::errors::MeritErrorKind::StaleKernel), 1);
        assert_eq!(
            stats.failures_of(crate::errors::MeritErrorKind::IncompleteExtension),
            1
        );
        assert_eq!(stats.get(Counters::WeightedPasses), 0);
    }

    #[test]
    fn test_set_kernel_policy_applies_to_next_extend() {
        let mut cache = cache(4, &[(&[0, 2], 1.0)]);
        cache.extend(&[1.0, 2.0, 3.0, 4.0], 1).unwrap();
        cache.set_kernel_policy(KernelPolicy::Shared);
        cache.extend(&[1.0, 2.0, 3.0, 4.0], 1).unwrap();
        assert_eq!(cache.config().kernel_policy, KernelPolicy::Shared);
        assert_eq!(
            cache.cached(&proj(&[0])).unwrap().as_slice(),
            &[1.0, 2.0, 3.0, 4.0]
        );
    }
}
