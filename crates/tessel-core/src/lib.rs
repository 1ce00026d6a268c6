//! Core types and traits for the Tessel cellular-automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error types, the step counter, the [`CellReader`] trait through
//! which rules and tests observe a grid, and the [`RenderSink`] contract
//! the external renderer implements.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::{EditError, GridError};
pub use id::StepId;
pub use traits::{CellReader, ColorScheme, RenderSink};
