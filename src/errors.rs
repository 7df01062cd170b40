// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for merit evaluation.
//!
//! Two families matter to callers:
//! - protocol violations: the driver called the cache out of order, or its
//!   adapters disagree between paired calls. Retrying cannot help.
//! - unsupported operations: an adapter refuses to enumerate a space that
//!   is far too large.

use crate::coords::Projection;
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants, EnumIter};
use thiserror::Error;

/// Errors that can occur while building or reading the projection cache.
///
/// [`MeritErrorKind`] names each variant without its fields.
#[derive(Debug, Clone, PartialEq, Error, EnumCountMacro, EnumDiscriminants)]
#[strum_discriminants(name(MeritErrorKind), derive(Hash, EnumIter))]
pub enum MeritError {
    /// A reduced projection needed by `weighted_merit` is missing.
    #[error("projection {projection} was not cached (next coordinate {coordinate})")]
    ProjectionNotCached {
        projection: Projection,
        coordinate: usize,
    },

    /// A fresh construction would multiply by the kernel of the wrong coordinate.
    #[error(
        "projection with top coordinate {coordinate} is missing while appending coordinate {current}; \
         its kernel values are no longer available"
    )]
    StaleKernel { coordinate: usize, current: usize },

    /// A previous `extend` failed before preparing the cache for this dimension.
    #[error("extension to dimension {dimension} did not complete")]
    IncompleteExtension { dimension: usize },

    /// Kernel values do not match the storage size.
    #[error("kernel values have length {actual}, storage size is {expected}")]
    KernelLength { expected: usize, actual: usize },

    /// A coordinate beyond the projection word width.
    #[error("coordinate {coordinate} out of range (max {max})")]
    CoordinateOutOfRange { coordinate: usize, max: usize },

    /// The adapter will not enumerate this space.
    #[error("the space of {what} is far too big to be exhaustively explored")]
    SpaceTooLarge { what: String },

    /// A generator space with no candidates for a coordinate.
    #[error("no candidate generator values for coordinate {coordinate}")]
    EmptySpace { coordinate: usize },

    /// Malformed textual input (projections, weights, configuration tags).
    #[error("parse error: {0}")]
    Parse(String),
}

impl MeritError {
    /// True for errors caused by calling the cache out of order or with
    /// inconsistent adapters.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            MeritError::ProjectionNotCached { .. }
                | MeritError::StaleKernel { .. }
                | MeritError::IncompleteExtension { .. }
        )
    }

    /// The variant of this error, without its fields.
    pub fn kind(&self) -> MeritErrorKind {
        MeritErrorKind::from(self)
    }

    /// True when an adapter refused an intractable enumeration.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, MeritError::SpaceTooLarge { .. })
    }
}

pub type Result<T, E = MeritError> = std::result::Result<T, E>;
