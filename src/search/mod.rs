// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search drivers built on the projection merit cache.

pub mod cbc;
pub mod space;

pub use cbc::{CbcResult, CbcSearch};
pub use space::{ExplicitSpace, GeneratorSpace, OrdinarySpace};
