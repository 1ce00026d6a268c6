//! Update rules and seed patterns for Tessel simulations.
//!
//! Every variant implements the same [`UpdateRule`] contract: given a
//! cell's previous value and the Moore aggregate computed over the
//! previous grid, produce the cell's next value. The controller owns the
//! sweep; rules only supply the per-cell function plus their own
//! bookkeeping between sweeps.
//!
//! # Variants
//!
//! - [`HeatDiffusion`]: 3x3 averaging with an extra self-weight `cp`.
//! - [`TerrainGrowth`]: land/water majority growth until a fixed point,
//!   then a bounded number of smoothing passes.
//! - [`GameOfLife`]: Conway's B3/S23.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod heat;
pub mod life;
pub mod rule;
pub mod seed;
pub mod terrain;

pub use error::RuleError;
pub use heat::HeatDiffusion;
pub use life::GameOfLife;
pub use rule::{sweep, sweep_into, RuleEvent, UpdateRule};
pub use terrain::{TerrainGrowth, TerrainPhase};
