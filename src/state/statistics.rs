// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the projection merit cache: how often it was reset,
//! extended and read, how its entries were obtained, and which failures
//! occurred. Counters are cells so that read-only passes can be counted.

use crate::errors::{MeritError, MeritErrorKind};
use std::cell::Cell;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    Resets,
    Extends,
    /// Resolutions satisfied without building anything.
    CacheHits,
    /// Entries built by multiplying a base entry with strided kernel values.
    FreshConstructions,
    /// Successful `weighted_merit` calls.
    WeightedPasses,
}

const COUNT: usize = Counters::COUNT + MeritError::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [Cell<u64>; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&self, counter: Counters) {
        self.bump(counter as usize);
    }

    /// Record one failure of the kind of `failure`.
    pub(crate) fn record_failure(&self, failure: &MeritError) {
        self.bump(Counters::COUNT + failure.kind() as usize);
    }

    fn bump(&self, index: usize) {
        let cell = &self.stats[index];
        cell.set(cell.get() + 1);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize].get()
    }

    /// Number of recorded failures of the given kind.
    pub fn failures_of(&self, kind: MeritErrorKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize].get()
    }

    /// Number of recorded failures of the same kind as `failure`.
    pub fn failures(&self, failure: &MeritError) -> u64 {
        self.failures_of(failure.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = Statistics::new();
        stats.increment_counter(Counters::Extends);
        stats.increment_counter(Counters::Extends);
        stats.increment_counter(Counters::CacheHits);
        assert_eq!(stats.get(Counters::Extends), 2);
        assert_eq!(stats.get(Counters::CacheHits), 1);
        assert_eq!(stats.get(Counters::Resets), 0);
    }

    #[test]
    fn test_failures_by_kind() {
        let stats = Statistics::new();
        stats.record_failure(&MeritError::StaleKernel { coordinate: 0, current: 2 });
        stats.record_failure(&MeritError::StaleKernel { coordinate: 1, current: 3 });
        assert_eq!(
            stats.failures(&MeritError::StaleKernel { coordinate: 9, current: 9 }),
            2
        );
        assert_eq!(stats.failures(&MeritError::KernelLength { expected: 1, actual: 2 }), 0);
        assert_eq!(stats.get(Counters::FreshConstructions), 0);
        assert_eq!(stats.failures_of(MeritErrorKind::StaleKernel), 2);
    }

    #[test]
    fn test_every_failure_kind_has_its_own_counter() {
        use strum::IntoEnumIterator;
        let stats = Statistics::new();
        stats.record_failure(&MeritError::Parse("x".into()));
        for kind in MeritErrorKind::iter() {
            let expected = if kind == MeritErrorKind::Parse { 1 } else { 0 };
            assert_eq!(stats.failures_of(kind), expected, "{:?}", kind);
        }
        for counter in [
            Counters::Resets,
            Counters::Extends,
            Counters::CacheHits,
            Counters::FreshConstructions,
            Counters::WeightedPasses,
        ] {
            assert_eq!(stats.get(counter), 0);
        }
    }
}
