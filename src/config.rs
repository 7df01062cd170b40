// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Runtime configuration tags.
//!
//! Compile-time configuration (the projection word width) lives in
//! [`crate::coords::constants`]. Everything here is a small orthogonal tag
//! consumed by a single generic implementation, parseable from text.

use strum_macros::{Display, EnumIter, EnumString};

/// Family of point sets whose generators are being searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LatticeType {
    /// Rank-1 ordinary lattice rules; generator values are integers.
    Ordinary,
    /// Base-2 digital nets; generator values are generating matrices.
    Digital,
}

/// Compression of the per-point storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Compress {
    /// One entry per point.
    #[default]
    None,
    /// Kernels symmetric about 1/2: points i and n-i share an entry.
    Symmetric,
}

/// Output style for generator formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Human,
    Machine,
}

/// How the cache treats a fresh construction below the coordinate being appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum KernelPolicy {
    /// Kernel values may differ per coordinate. Building an entry whose top
    /// coordinate is not the one being appended fails with `StaleKernel`.
    #[default]
    Strict,
    /// The same kernel values are supplied for every coordinate, so any
    /// missing entry can be built from the current ones.
    Shared,
}

/// Configuration of a [`ProjectionMeritCache`](crate::state::ProjectionMeritCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheConfig {
    pub kernel_policy: KernelPolicy,
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kernel_policy(mut self, kernel_policy: KernelPolicy) -> Self {
        self.kernel_policy = kernel_policy;
        self
    }
}
