// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generating matrices over F2 for base-2 digital nets.

use std::fmt;

/// Maximum number of columns (one bit per column in a row word).
pub const MAX_COLS: usize = 64;

/// A rows × cols matrix over F2.
///
/// Each row is stored as a word, bit c holding entry (row, c).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratingMatrix {
    rows: Vec<u64>,
    n_cols: usize,
}

impl GeneratingMatrix {
    /// The zero matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n_cols > MAX_COLS`.
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        assert!(n_cols <= MAX_COLS, "Too many columns: {}", n_cols);
        Self {
            rows: vec![0; n_rows],
            n_cols,
        }
    }

    /// The m × m identity matrix.
    pub fn identity(m: usize) -> Self {
        let mut matrix = Self::new(m, m);
        for i in 0..m {
            matrix.set(i, i, true);
        }
        matrix
    }

    /// Build from rows of 0/1 entries. All rows must have the same length.
    ///
    /// # Panics
    ///
    /// Panics on ragged rows.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut matrix = Self::new(rows.len(), n_cols);
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), n_cols, "Ragged generating matrix row {}", r);
            for (c, &bit) in row.iter().enumerate() {
                matrix.set(r, c, bit & 1 == 1);
            }
        }
        matrix
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(col < self.n_cols, "Column out of range: {}", col);
        (self.rows[row] >> col) & 1 == 1
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(col < self.n_cols, "Column out of range: {}", col);
        if value {
            self.rows[row] |= 1 << col;
        } else {
            self.rows[row] &= !(1 << col);
        }
    }

    /// Resize in place, truncating or padding with zeros.
    pub fn resize(&mut self, n_rows: usize, n_cols: usize) {
        assert!(n_cols <= MAX_COLS, "Too many columns: {}", n_cols);
        self.rows.resize(n_rows, 0);
        if n_cols < self.n_cols {
            let mask = column_mask(n_cols);
            for row in &mut self.rows {
                *row &= mask;
            }
        }
        self.n_cols = n_cols;
    }

    /// Matrix-vector product over F2.
    ///
    /// Bit c of `digits` is input digit c; bit r of the result is output digit r.
    pub fn apply(&self, digits: u64) -> u64 {
        let digits = digits & column_mask(self.n_cols);
        self.rows
            .iter()
            .enumerate()
            .fold(0u64, |acc, (r, row)| acc | ((((row & digits).count_ones() & 1) as u64) << r))
    }
}

fn column_mask(n_cols: usize) -> u64 {
    if n_cols >= 64 {
        u64::MAX
    } else {
        (1u64 << n_cols) - 1
    }
}

impl fmt::Display for GeneratingMatrix {
    /// One row per line, entries separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n_rows() {
            for c in 0..self.n_cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(r, c) as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
