//! The simulation controller.
//!
//! [`SimulationController`] is the primary user-facing API. It owns the
//! current grid, a second buffer of the same shape, the active rule, and
//! the play/pause flag. Each [`step()`](SimulationController::step)
//! sweeps the current grid into the spare buffer and swaps the two, so
//! every new value is computed from one frozen snapshot.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, and
//! [`grid()`](SimulationController::grid) borrows from `self`. A caller
//! cannot step or edit while holding a view of the grid; the borrow
//! checker rules out read-after-write hazards without locks.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, info, warn};

use tessel_core::{EditError, StepId};
use tessel_rules::{sweep_into, RuleEvent, UpdateRule};
use tessel_space::Grid;

use crate::config::{ConfigError, SimulationConfig};
use crate::event::SimEvent;
use crate::metrics::StepMetrics;

// Compile-time assertion: the controller can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SimulationController>();
    }
};

// ── StepOutcome ─────────────────────────────────────────────────

/// Result of a [`SimulationController::step()`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// The grid was swept and swapped.
    Advanced {
        /// Id of this step.
        step: StepId,
        /// Cells whose value changed.
        changed_cells: usize,
        /// Lifecycle event raised by the rule, if any.
        event: Option<RuleEvent>,
    },
    /// The rule is settled; the grid was not touched.
    Idle,
}

impl StepOutcome {
    /// `true` if at least one cell changed value.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Advanced { changed_cells, .. } if *changed_cells > 0)
    }
}

// ── SimulationController ────────────────────────────────────────

/// Single-threaded owner of one simulation's mutable state.
///
/// # Example
///
/// ```
/// use tessel_engine::{SimulationConfig, SimulationController};
///
/// let mut sim = SimulationController::new(SimulationConfig::life().unwrap()).unwrap();
/// assert!(sim.is_paused());
/// assert!(sim.tick().is_none());
///
/// sim.toggle_pause();
/// let outcome = sim.tick().unwrap();
/// assert!(outcome.changed());
/// ```
pub struct SimulationController {
    grid: Grid,
    spare: Grid,
    rule: Box<dyn UpdateRule>,
    paused: bool,
    tick_interval: Duration,
    step_id: StepId,
    last_metrics: StepMetrics,
    listeners: Vec<Sender<SimEvent>>,
}

impl SimulationController {
    /// Create a controller from a [`SimulationConfig`].
    ///
    /// Validates the configuration and takes ownership of its grid and
    /// rule. The rule's bookkeeping is reset.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let SimulationConfig {
            grid,
            mut rule,
            start_paused,
            tick_interval,
        } = config;
        rule.reset();
        debug!(
            rule = rule.name(),
            rows = grid.rows(),
            cols = grid.cols(),
            "simulation created"
        );
        Ok(Self {
            spare: grid.zeroed_like(),
            grid,
            rule,
            paused: start_paused,
            tick_interval,
            step_id: StepId::default(),
            last_metrics: StepMetrics::default(),
            listeners: Vec::new(),
        })
    }

    /// Advance one step regardless of the pause flag.
    ///
    /// Every cell is recomputed from the current grid into the spare
    /// buffer, the rule's bookkeeping runs, and the buffers are swapped.
    /// If the rule is settled this is a no-op returning
    /// [`StepOutcome::Idle`].
    pub fn step(&mut self) -> StepOutcome {
        if self.rule.is_settled() {
            return StepOutcome::Idle;
        }

        let start = Instant::now();
        sweep_into(&self.grid, self.rule.as_ref(), &mut self.spare);
        let event = self.rule.finish_step(&self.grid, &self.spare);
        let changed_cells = self.grid.diff_count(&self.spare);
        std::mem::swap(&mut self.grid, &mut self.spare);

        self.step_id = self.step_id.next();
        self.last_metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            changed_cells,
        };
        debug!(
            step = self.step_id.0,
            changed_cells,
            total_us = self.last_metrics.total_us,
            "step"
        );

        self.emit(SimEvent::Stepped {
            step: self.step_id,
            changed_cells,
        });
        if let Some(e) = event {
            self.log_rule_event(e);
            self.emit(SimEvent::Rule(e));
        }

        StepOutcome::Advanced {
            step: self.step_id,
            changed_cells,
            event,
        }
    }

    /// Timer entry point: steps unless paused.
    ///
    /// Returns `None` while paused.
    pub fn tick(&mut self) -> Option<StepOutcome> {
        if self.paused {
            return None;
        }
        Some(self.step())
    }

    /// Overwrite one cell of the current grid.
    ///
    /// Coordinates wrap toroidally. Only allowed while paused; while
    /// running the edit is rejected with [`EditError::SimulationRunning`]
    /// and the grid is untouched.
    pub fn edit_cell(&mut self, row: i64, col: i64, value: f64) -> Result<(), EditError> {
        if !self.paused {
            warn!(row, col, "edit rejected while running");
            return Err(EditError::SimulationRunning);
        }
        self.grid.set(row, col, value);
        let i = self.grid.index(row, col);
        let cols = self.grid.cols();
        self.emit(SimEvent::Edited {
            row: i / cols,
            col: i % cols,
            value,
        });
        Ok(())
    }

    /// Flip a cell between zero and the rule's active value.
    ///
    /// Any non-zero cell becomes zero; a zero cell becomes
    /// [`active_value()`](UpdateRule::active_value). Same gating and
    /// wrapping as [`edit_cell`](Self::edit_cell). Returns the new value.
    pub fn toggle_cell(&mut self, row: i64, col: i64) -> Result<f64, EditError> {
        let value = if self.grid.get(row, col) != 0.0 {
            0.0
        } else {
            self.rule.active_value()
        };
        self.edit_cell(row, col, value)?;
        Ok(value)
    }

    /// Flip the play/pause flag. Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Set the play/pause flag.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        info!(paused, "pause toggled");
        self.emit(SimEvent::PauseToggled { paused });
    }

    /// Subscribe to status events.
    ///
    /// Each receiver gets every event emitted after it subscribed.
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<SimEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.listeners.push(tx);
        rx
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active rule.
    pub fn rule(&self) -> &dyn UpdateRule {
        self.rule.as_ref()
    }

    /// `true` while paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Id of the most recent step; `StepId(0)` before the first.
    pub fn step_id(&self) -> StepId {
        self.step_id
    }

    /// Metrics of the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Period the timer source should tick at.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    fn emit(&mut self, event: SimEvent) {
        self.listeners.retain(|tx| tx.send(event).is_ok());
    }

    fn log_rule_event(&self, event: RuleEvent) {
        match event {
            RuleEvent::FormationStopped {
                growth_steps,
                forced,
            } => info!(
                rule = self.rule.name(),
                growth_steps, forced, "formation stopped"
            ),
            RuleEvent::SmoothingFinished { passes } => {
                info!(rule = self.rule.name(), passes, "smoothing finished")
            }
        }
    }
}

impl std::fmt::Debug for SimulationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationController")
            .field("rule", &self.rule.name())
            .field("rows", &self.grid.rows())
            .field("cols", &self.grid.cols())
            .field("paused", &self.paused)
            .field("step_id", &self.step_id)
            .finish()
    }
}
