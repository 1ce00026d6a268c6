//! Status notifications broadcast by the controller.

use tessel_core::StepId;
use tessel_rules::RuleEvent;

/// Something observable happened to a simulation.
///
/// Delivered to every receiver obtained from
/// [`SimulationController::subscribe`](crate::SimulationController::subscribe).
/// Advisory only; the controller never waits on listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimEvent {
    /// A step swept the grid.
    Stepped {
        /// Id of the step just completed.
        step: StepId,
        /// Cells that changed value.
        changed_cells: usize,
    },
    /// A cell was overwritten by an edit.
    Edited {
        /// Wrapped row.
        row: usize,
        /// Wrapped column.
        col: usize,
        /// Value written.
        value: f64,
    },
    /// The play/pause flag flipped.
    PauseToggled {
        /// New state.
        paused: bool,
    },
    /// The rule raised a lifecycle event (terrain formation stopped,
    /// smoothing finished).
    Rule(RuleEvent),
}
