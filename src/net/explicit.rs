// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Explicit digital nets: generator values are the generating matrices themselves.
//!
//! The generator space of this construction is every rows × cols matrix over
//! F2, so it cannot be enumerated; only validation, conversion and output
//! formatting are available.

use crate::config::OutputFormat;
use crate::errors::{MeritError, Result};
use crate::net::generating_matrix::MAX_COLS;
use crate::net::GeneratingMatrix;

/// Number of binary digits in a machine-format generating vector entry.
pub const OUTPUT_DIGITS: usize = 31;

/// Explicit construction for a given size parameter (rows, cols).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitConstruction {
    n_rows: usize,
    n_cols: usize,
}

impl ExplicitConstruction {
    pub const NAME: &'static str = "Explicit";

    /// # Panics
    ///
    /// Panics if `n_cols > MAX_COLS`.
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        assert!(n_cols <= MAX_COLS, "Too many columns: {}", n_cols);
        Self { n_rows, n_cols }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// A generator value is valid when its shape matches the size parameter.
    pub fn check_gen_value(&self, gen: &GeneratingMatrix) -> bool {
        gen.n_rows() == self.n_rows && gen.n_cols() == self.n_cols
    }

    /// The generating matrix of one coordinate, resized to the size parameter.
    pub fn create_generating_matrix(&self, gen: &GeneratingMatrix) -> GeneratingMatrix {
        let mut matrix = gen.clone();
        matrix.resize(self.n_rows, self.n_cols);
        matrix
    }

    /// Columns of the generating matrix as 31-digit binary fractions.
    ///
    /// Entry c is `sum over r of C[r][c] * 2^(30 - r)` for `r < min(rows, cols)`.
    /// Rows at or past the column count do not affect the points of a
    /// `2^cols`-point net and are dropped, as are rows past the 31st.
    pub fn generating_vector(&self, gen: &GeneratingMatrix) -> Vec<u32> {
        let matrix = self.create_generating_matrix(gen);
        let rows = matrix.n_rows().min(self.n_cols).min(OUTPUT_DIGITS);
        (0..matrix.n_cols())
            .map(|c| {
                (0..rows)
                    .filter(|&r| matrix.get(r, c))
                    .fold(0u32, |acc, r| acc | (1 << (OUTPUT_DIGITS - 1 - r)))
            })
            .collect()
    }

    /// Candidate generator values for one coordinate. Always unsupported.
    pub fn gen_value_space_coord(&self, _coord: usize) -> Result<Vec<GeneratingMatrix>> {
        Err(Self::space_too_large())
    }

    /// Candidate generator values for every coordinate. Always unsupported.
    pub fn gen_value_space(&self, _dimension: usize) -> Result<Vec<Vec<GeneratingMatrix>>> {
        Err(Self::space_too_large())
    }

    fn space_too_large() -> MeritError {
        MeritError::SpaceTooLarge {
            what: "all generating matrices".to_string(),
        }
    }

    /// Format the net described by `gen_values`.
    ///
    /// Machine output is the base-2 digital net parameter file; the dimension
    /// count is divided by `interlacing`.
    pub fn format(
        &self,
        gen_values: &[GeneratingMatrix],
        output_format: OutputFormat,
        interlacing: usize,
    ) -> String {
        match output_format {
            OutputFormat::Human => format!(
                "{} Digital Net - Matrix size = {}x{}\n",
                Self::NAME,
                self.n_rows,
                self.n_cols
            ),
            OutputFormat::Machine => {
                let m = self.n_cols;
                let dimension = gen_values.len() / interlacing.max(1);
                let lines: Vec<String> = gen_values
                    .iter()
                    .map(|gen| {
                        self.generating_vector(gen)
                            .iter()
                            .map(|c| format!("{} ", c))
                            .collect::<String>()
                    })
                    .collect();
                format!(
                    "# Parameters for a digital net in base 2\n\
                     {dimension}    # {dimension} dimensions\n\
                     {m}   # k = {m}, n = 2^{m} = {points} points\n\
                     {digits}   # r = {digits} digits\n\
                     # The next row gives the columns of C_1, the first gen. matrix\n\
                     {body}",
                    points = 1u128 << m,
                    digits = OUTPUT_DIGITS,
                    body = lines.join("\n"),
                )
            }
        }
    }
}
