// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for coordinate sets.
//!
//! The width of the projection bitset is configurable via cargo features.
//!
//! # Example
//!
//! ```bash
//! # Default: 64 coordinates
//! cargo build
//!
//! # 128 coordinates
//! cargo build --features wide_projections
//! ```

/// Word backing a [`Projection`](super::Projection) bitset.
#[cfg(not(projection_word_128))]
pub type ProjectionWord = u64;

#[cfg(projection_word_128)]
pub type ProjectionWord = u128;

/// Maximum number of coordinates (dimensions) a projection can address.
///
/// Equals the bit width of [`ProjectionWord`]:
/// - default → 64
/// - `wide_projections` → 128
pub const MAX_COORDS: usize = ProjectionWord::BITS as usize;
