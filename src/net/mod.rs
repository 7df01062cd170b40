// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Base-2 digital nets.
//!
//! - GeneratingMatrix: per-coordinate matrix over F2
//! - ExplicitConstruction: validation, conversion and formatting of explicit nets

pub mod explicit;
pub mod generating_matrix;

pub use explicit::ExplicitConstruction;
pub use generating_matrix::GeneratingMatrix;
