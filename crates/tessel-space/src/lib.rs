//! Toroidal grid storage for Tessel simulations.
//!
//! This crate owns the spatial side of the engine:
//!
//! - [`Grid`]: a `rows x cols` row-major buffer of `f64` cells whose
//!   indices wrap at every edge (torus topology).
//! - [`torus`]: axis wrapping and the eight Moore offsets.
//! - [`moore_sum`]: the neighbour-aggregation kernel evaluated once per
//!   cell per step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod neighbourhood;
pub mod torus;

pub use grid::Grid;
pub use neighbourhood::moore_sum;
pub use tessel_core::{CellReader, GridError};
pub use torus::{moore_neighbours, wrap_axis, MOORE_OFFSETS};
