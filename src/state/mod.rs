// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coordinate-uniform state: mutable, grows one dimension at a time.
//!
//! - DimensionTracker: appended dimensions and their generator values
//! - ProjectionMeritCache: memoized per-projection merit vectors
//! - Statistics: counters kept by the cache

pub mod dimension;
pub mod projection_cache;
pub mod statistics;

pub use dimension::DimensionTracker;
pub use projection_cache::ProjectionMeritCache;
pub use statistics::{Counters, Statistics};
