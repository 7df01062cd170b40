// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental evaluation of coordinate-uniform figures of merit.
//!
//! Lattice rules and digital nets are built one coordinate at a time. A
//! coordinate-uniform figure of merit is a weighted sum over projections
//! (subsets of coordinates) of products of per-coordinate kernel values, so
//! appending a coordinate only needs the products already computed for the
//! projections below it.
//!
//! # Architecture
//!
//! ## Adapters
//!
//! - [`Storage`](storage::Storage): vector length and how a generator value
//!   reindexes kernel values (ordinary lattices, base-2 digital nets)
//! - [`WeightAdapter`](weights::WeightAdapter): weighted projections grouped
//!   by largest coordinate
//! - [`GeneratorSpace`](search::GeneratorSpace): candidate generator values
//!
//! ## State
//!
//! [`ProjectionMeritCache`] memoizes one vector per projection, keyed by a
//! [`Projection`] bitset. `extend` appends a coordinate and builds the entries
//! the next coordinate needs; `weighted_merit` combines them with the weights.
//!
//! ## Drivers
//!
//! [`CbcSearch`](search::CbcSearch) runs a component-by-component search on
//! top of the cache.
//!
//! # Example
//!
//! ```
//! use coord_uniform::config::Compress;
//! use coord_uniform::coords::Projection;
//! use coord_uniform::storage::OrdinaryStorage;
//! use coord_uniform::weights::ProjectionDependentWeights;
//! use coord_uniform::ProjectionMeritCache;
//!
//! let mut weights = ProjectionDependentWeights::new();
//! weights.set_weight(Projection::from_indices(&[0, 1]), 0.5);
//!
//! let storage = OrdinaryStorage::new(4, Compress::None);
//! let mut cache = ProjectionMeritCache::new(storage, weights);
//! cache.extend(&[1.0, 2.0, 3.0, 4.0], 1).unwrap();
//!
//! let weighted = cache.weighted_merit().unwrap();
//! assert_eq!(weighted.as_slice(), &[0.5, 1.0, 1.5, 2.0]);
//! ```
//!
//! # References
//!
//! - L'Ecuyer, P., Munger, D. (2016). "Algorithm 958: Lattice Builder: A General
//!   Software Tool for Constructing Rank-1 Lattice Rules." ACM TOMS 42(2).

pub mod config;
pub mod coords;
pub mod errors;
pub mod net;
pub mod search;
pub mod state;
pub mod storage;
pub mod vector;
pub mod weights;

// Re-export commonly used types
pub use coords::{Coordinate, Projection};
pub use errors::{MeritError, MeritErrorKind};
pub use state::ProjectionMeritCache;
pub use vector::MeritVector;
