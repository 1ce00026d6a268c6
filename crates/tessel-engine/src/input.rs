//! Input adapter contract.
//!
//! Windowing code translates raw key and pointer events into
//! [`InputEvent`]s and hands them to [`handle_input`], which maps each to
//! a controller call:
//!
//! | Event | Controller call | Gating |
//! |-------|-----------------|--------|
//! | `TogglePause` (space) | `toggle_pause()` | none |
//! | `Advance` (right arrow) | `step()` | none, runs even while paused |
//! | `Click { row, col }` | `edit_cell(row, col, active_value)` | paused only |
//! | `FlipClick { row, col }` | `toggle_cell(row, col)` | paused only |

use crate::controller::{SimulationController, StepOutcome};

/// A user action, already mapped to grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Play/pause key.
    TogglePause,
    /// Single-step key.
    Advance,
    /// Pointer click painting the variant's active value.
    Click {
        /// Grid row under the pointer (wrapped).
        row: i64,
        /// Grid column under the pointer (wrapped).
        col: i64,
    },
    /// Pointer click flipping a binary cell.
    FlipClick {
        /// Grid row under the pointer (wrapped).
        row: i64,
        /// Grid column under the pointer (wrapped).
        col: i64,
    },
}

/// What the adapter should do after an input was handled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputResponse {
    /// The grid changed; redraw.
    Redraw,
    /// Pause state changed to `paused`; the grid did not.
    PauseChanged {
        /// New state.
        paused: bool,
    },
    /// A step ran (or was idle) with this outcome.
    Stepped(StepOutcome),
    /// The event was ignored (click while running).
    Ignored,
}

impl InputResponse {
    /// `true` if the renderer should redraw.
    pub fn needs_redraw(&self) -> bool {
        match self {
            Self::Redraw => true,
            Self::Stepped(outcome) => outcome.changed(),
            Self::PauseChanged { .. } | Self::Ignored => false,
        }
    }
}

/// Dispatch one input event to the controller.
///
/// Clicks while running are dropped, matching the "only draw while
/// paused" policy of the interactive tools.
pub fn handle_input(sim: &mut SimulationController, event: InputEvent) -> InputResponse {
    match event {
        InputEvent::TogglePause => InputResponse::PauseChanged {
            paused: sim.toggle_pause(),
        },
        InputEvent::Advance => InputResponse::Stepped(sim.step()),
        InputEvent::Click { row, col } => {
            let value = sim.rule().active_value();
            match sim.edit_cell(row, col, value) {
                Ok(()) => InputResponse::Redraw,
                Err(_) => InputResponse::Ignored,
            }
        }
        InputEvent::FlipClick { row, col } => match sim.toggle_cell(row, col) {
            Ok(_) => InputResponse::Redraw,
            Err(_) => InputResponse::Ignored,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use tessel_rules::{GameOfLife, HeatDiffusion, TerrainGrowth};
    use tessel_space::Grid;

    fn sim_with(rule: impl tessel_rules::UpdateRule) -> SimulationController {
        SimulationController::new(SimulationConfig::new(Grid::new(4, 4, 0.0).unwrap(), rule))
            .unwrap()
    }

    #[test]
    fn click_paints_active_value_per_variant() {
        let mut heat = sim_with(HeatDiffusion::default());
        let mut terrain = sim_with(TerrainGrowth::new());
        let mut life = sim_with(GameOfLife);
        for sim in [&mut heat, &mut terrain, &mut life] {
            let resp = handle_input(sim, InputEvent::Click { row: 1, col: 2 });
            assert_eq!(resp, InputResponse::Redraw);
            assert_eq!(sim.grid().get(1, 2), 1.0);
        }
    }

    #[test]
    fn click_while_running_is_ignored() {
        let mut sim = sim_with(GameOfLife);
        handle_input(&mut sim, InputEvent::TogglePause);
        let resp = handle_input(&mut sim, InputEvent::Click { row: 0, col: 0 });
        assert_eq!(resp, InputResponse::Ignored);
        assert!(!resp.needs_redraw());
        assert_eq!(sim.grid().sum(), 0.0);
        assert_eq!(
            handle_input(&mut sim, InputEvent::FlipClick { row: 0, col: 0 }),
            InputResponse::Ignored
        );
    }

    #[test]
    fn flip_click_toggles() {
        let mut sim = sim_with(GameOfLife);
        handle_input(&mut sim, InputEvent::FlipClick { row: 3, col: 3 });
        assert_eq!(sim.grid().get(3, 3), 1.0);
        handle_input(&mut sim, InputEvent::FlipClick { row: 3, col: 3 });
        assert_eq!(sim.grid().get(3, 3), 0.0);
    }

    #[test]
    fn advance_steps_while_paused() {
        let mut sim = sim_with(GameOfLife);
        sim.edit_cell(1, 1, 1.0).unwrap();
        let resp = handle_input(&mut sim, InputEvent::Advance);
        assert!(sim.is_paused());
        assert!(resp.needs_redraw());
        assert_eq!(sim.grid().sum(), 0.0);
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut sim = sim_with(GameOfLife);
        assert_eq!(
            handle_input(&mut sim, InputEvent::TogglePause),
            InputResponse::PauseChanged { paused: false }
        );
        assert_eq!(
            handle_input(&mut sim, InputEvent::TogglePause),
            InputResponse::PauseChanged { paused: true }
        );
    }
}
