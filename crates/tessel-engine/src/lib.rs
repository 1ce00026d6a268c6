//! Simulation controller driving Tessel grids.
//!
//! [`SimulationController`] owns the grid, the active rule, and the
//! play/pause flag. External collaborators talk to it through plain
//! method calls:
//!
//! - a timer source calls [`tick()`](SimulationController::tick) at a
//!   fixed period ([`clock::TickClock`] is a reference implementation);
//! - an input adapter translates key and pointer events through
//!   [`input::handle_input`];
//! - a renderer implements [`RenderSink`](tessel_core::RenderSink) and is
//!   fed by [`render::render_frame`];
//! - status listeners [`subscribe()`](SimulationController::subscribe) to
//!   [`SimEvent`]s.
//!
//! Everything runs on one thread; a step always completes before the
//! next tick or edit is handled.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod controller;
pub mod event;
pub mod input;
pub mod metrics;
pub mod render;

pub use clock::TickClock;
pub use config::{ConfigError, SimulationConfig};
pub use controller::{SimulationController, StepOutcome};
pub use event::SimEvent;
pub use input::{handle_input, InputEvent, InputResponse};
pub use metrics::StepMetrics;
pub use render::render_frame;
