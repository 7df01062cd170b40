// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coordinate types for projection-indexed merit.
//!
//! - Coordinate: Dimension index (0..MAX_COORDS-1)
//! - Projection: Bitset of coordinates, the key of the merit cache

pub mod constants;
pub mod coordinate;
pub mod projection;

pub use constants::*;
pub use coordinate::Coordinate;
pub use projection::Projection;
