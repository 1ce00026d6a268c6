//! Tessel: cellular automata on a toroidal grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessel sub-crates. For most users, adding `tessel` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // A horizontal blinker on a 5x5 torus.
//! let mut grid = Grid::new(5, 5, 0.0).unwrap();
//! for c in 1..4 {
//!     grid.set(2, c, 1.0);
//! }
//!
//! let config = SimulationConfig::new(grid, GameOfLife).paused(false);
//! let mut sim = SimulationController::new(config).unwrap();
//!
//! sim.tick().unwrap();
//! assert_eq!(sim.grid().get(1, 2), 1.0);
//! assert_eq!(sim.grid().get(2, 1), 0.0);
//! assert_eq!(sim.step_id(), StepId(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | IDs, errors, `CellReader`, render seam |
//! | [`space`] | `tessel-space` | `Grid`, toroidal wrap, Moore-sum kernel |
//! | [`rules`] | `tessel-rules` | `UpdateRule` and the three variants, seeds |
//! | [`engine`] | `tessel-engine` | Controller, input adapter, events, tick clock |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`tessel-core`).
///
/// Contains [`types::StepId`], the error types, and the read-only
/// [`types::CellReader`] view handed to renderers.
pub use tessel_core as types;

/// Grid storage and neighbourhood kernel (`tessel-space`).
///
/// Provides [`space::Grid`] and [`space::moore_sum`].
pub use tessel_space as space;

/// Update rules and seed patterns (`tessel-rules`).
///
/// The [`rules::UpdateRule`] trait is the extension point for new
/// automata; [`rules::seed`] builds the standard starting grids.
pub use tessel_rules as rules;

/// Simulation controller (`tessel-engine`).
///
/// [`engine::SimulationController`] owns the grid and steps it;
/// [`engine::handle_input`] maps user actions onto it.
pub use tessel_engine as engine;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
///
/// This imports the grid, the rule variants, the controller and its
/// config, and the render seam.
pub mod prelude {
    // Core types and traits
    pub use tessel_core::{CellReader, ColorScheme, RenderSink, StepId};

    // Errors
    pub use tessel_core::{EditError, GridError};
    pub use tessel_engine::ConfigError;
    pub use tessel_rules::RuleError;

    // Space
    pub use tessel_space::{moore_sum, Grid};

    // Rules
    pub use tessel_rules::{
        GameOfLife, HeatDiffusion, RuleEvent, TerrainGrowth, TerrainPhase, UpdateRule,
    };

    // Engine
    pub use tessel_engine::{
        handle_input, render_frame, InputEvent, InputResponse, SimEvent, SimulationConfig,
        SimulationController, StepMetrics, StepOutcome, TickClock,
    };
}
