//! Error types for the Tessel engine.
//!
//! The taxonomy is narrow: grid construction can fail with bad
//! dimensions, and cell edits can be rejected while the simulation runs.
//! Rule computations are total and never fail.

use std::error::Error;
use std::fmt;

/// Errors from grid construction and strict (non-wrapping) access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A dimension is zero, or `rows * cols` overflows `usize`.
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A coordinate outside `[0, rows) x [0, cols)` was given to a
    /// strict accessor. Wrapping accessors never produce this.
    InvalidCoordinate {
        /// The offending row.
        row: i64,
        /// The offending column.
        col: i64,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },
    /// A flat buffer or literal rows do not match the requested shape.
    ShapeMismatch {
        /// Number of cells expected.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}")
            }
            Self::InvalidCoordinate {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "coordinate ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})"
            ),
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from interactive cell edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditError {
    /// Cells may only be edited while the simulation is paused.
    SimulationRunning,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SimulationRunning => write!(f, "cells can only be edited while paused"),
        }
    }
}

impl Error for EditError {}
