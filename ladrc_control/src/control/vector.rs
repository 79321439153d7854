//! Fixed-capacity vectors and matrices for the RT loop.
//!
//! Dimensions are chosen at construction (`n = nx + 1`) and never change.
//! Capacity is bounded by `MAX_EXTENDED_ORDER`, so nothing here allocates.

use ladrc_common::consts::{MAX_EXTENDED_ORDER, MAX_PROCESS_ORDER};

/// Extended state, observer gains and other `n`-length columns.
pub type StateVector = heapless::Vec<f64, MAX_EXTENDED_ORDER>;

/// Controller feedback gains (`nx` entries).
pub type GainVector = heapless::Vec<f64, MAX_PROCESS_ORDER>;

/// Zero vector of length `dim` (`dim <= MAX_EXTENDED_ORDER`).
#[inline]
pub fn zeros(dim: usize) -> StateVector {
    (0..dim.min(MAX_EXTENDED_ORDER)).map(|_| 0.0).collect()
}

/// Inner product over the common length of `a` and `b`.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Square matrix of runtime dimension stored in a fixed array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateMatrix {
    dim: usize,
    rows: [[f64; MAX_EXTENDED_ORDER]; MAX_EXTENDED_ORDER],
}

impl StateMatrix {
    /// `dim × dim` zero matrix (`dim` is clamped to capacity).
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim: dim.min(MAX_EXTENDED_ORDER),
            rows: [[0.0; MAX_EXTENDED_ORDER]; MAX_EXTENDED_ORDER],
        }
    }

    /// Companion shift matrix: ones on the superdiagonal, zero elsewhere.
    pub fn shift(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 1..m.dim {
            m.rows[i - 1][i] = 1.0;
        }
        m
    }

    /// Matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at (`row`, `col`); zero outside the active block.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row < self.dim && col < self.dim {
            self.rows[row][col]
        } else {
            0.0
        }
    }

    /// Active part of one row.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row][..self.dim]
    }

    /// `M · v`. The result always has `dim` entries.
    #[inline]
    pub fn mul_vec(&self, v: &[f64]) -> StateVector {
        (0..self.dim).map(|i| dot(self.row(i), v)).collect()
    }
}
