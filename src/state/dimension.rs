// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dimension bookkeeping shared by coordinate-uniform states.

use crate::coords::Coordinate;

/// Number of appended dimensions and the generator value of each.
///
/// Append-only between calls to [`clear`](DimensionTracker::clear).
#[derive(Debug, Clone)]
pub struct DimensionTracker<G> {
    generators: Vec<G>,
}

impl<G> DimensionTracker<G> {
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Number of dimensions appended so far; also the index of the next coordinate.
    pub fn dimension(&self) -> usize {
        self.generators.len()
    }

    /// Append one dimension, returning its coordinate index.
    pub fn push(&mut self, gen: G) -> usize {
        self.generators.push(gen);
        self.generators.len() - 1
    }

    pub fn generators(&self) -> &[G] {
        &self.generators
    }

    pub fn generator(&self, coord: Coordinate) -> Option<&G> {
        self.generators.get(coord.as_usize())
    }

    pub fn clear(&mut self) {
        self.generators.clear();
    }
}

impl<G> Default for DimensionTracker<G> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_lookup() {
        let mut tracker = DimensionTracker::new();
        assert_eq!(tracker.dimension(), 0);
        assert_eq!(tracker.push(5u64), 0);
        assert_eq!(tracker.push(7u64), 1);
        assert_eq!(tracker.dimension(), 2);
        assert_eq!(tracker.generator(Coordinate::new(1)), Some(&7));
        assert_eq!(tracker.generator(Coordinate::new(2)), None);
        assert_eq!(tracker.generators(), &[5, 7]);
    }

    #[test]
    fn test_clear() {
        let mut tracker = DimensionTracker::new();
        tracker.push("a");
        tracker.clear();
        assert_eq!(tracker.dimension(), 0);
        assert!(tracker.generators().is_empty());
    }
}
