//! Land/water terrain formation with beach smoothing.
//!
//! Two phases:
//!
//! 1. **Growth** on a binary grid (land = 1, water = 0). Land with fewer
//!    than 4 land neighbours floods; water with at least 5 land
//!    neighbours dries up. Growth ends when a step leaves the grid
//!    unchanged (a fixed point).
//! 2. **Smoothing**: a fixed number of passes replacing every cell with
//!    `sqrt((old + sum(neighbours)) / 9)`, producing beach values between
//!    0 and 1. After the last pass the rule is settled and further steps
//!    are no-ops.

use crate::error::RuleError;
use crate::rule::{RuleEvent, UpdateRule};
use tessel_core::ColorScheme;
use tessel_space::Grid;

/// Value of a land cell.
pub const LAND: f64 = 1.0;
/// Value of a water cell.
pub const WATER: f64 = 0.0;

/// Land survives with at least this many land neighbours.
const SURVIVE_MIN: f64 = 4.0;
/// Water turns to land with at least this many land neighbours.
const BIRTH_MIN: f64 = 5.0;

/// Default number of smoothing passes after formation stops.
pub const DEFAULT_SMOOTHING_STEPS: u32 = 2;

/// Where a [`TerrainGrowth`] rule is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerrainPhase {
    /// Majority growth on the binary grid.
    Growth,
    /// Formation has stopped; `done` smoothing passes have run.
    Smoothing {
        /// Passes completed so far.
        done: u32,
    },
    /// All passes done. Steps are no-ops.
    Settled,
}

/// Two-phase terrain rule.
///
/// # Examples
///
/// ```
/// use tessel_rules::{TerrainGrowth, TerrainPhase, UpdateRule};
///
/// let rule = TerrainGrowth::new().with_smoothing_steps(3);
/// assert_eq!(rule.phase(), TerrainPhase::Growth);
/// assert_eq!(rule.smoothing_steps(), 3);
/// assert!(!rule.is_settled());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainGrowth {
    phase: TerrainPhase,
    smoothing_steps: u32,
    growth_steps: u64,
    growth_limit: Option<u64>,
}

impl TerrainGrowth {
    /// Create a terrain rule with the default two smoothing passes and no
    /// growth limit.
    pub fn new() -> Self {
        Self {
            phase: TerrainPhase::Growth,
            smoothing_steps: DEFAULT_SMOOTHING_STEPS,
            growth_steps: 0,
            growth_limit: None,
        }
    }

    /// Set the number of smoothing passes. Zero settles immediately after
    /// formation stops.
    pub fn with_smoothing_steps(mut self, steps: u32) -> Self {
        self.smoothing_steps = steps;
        self
    }

    /// Stop formation after at most `limit` growth steps even if no exact
    /// fixed point has been reached.
    ///
    /// Returns `Err(RuleError::ZeroGrowthLimit)` if `limit` is 0.
    pub fn with_growth_limit(mut self, limit: u64) -> Result<Self, RuleError> {
        if limit == 0 {
            return Err(RuleError::ZeroGrowthLimit);
        }
        self.growth_limit = Some(limit);
        Ok(self)
    }

    /// Current phase.
    pub fn phase(&self) -> TerrainPhase {
        self.phase
    }

    /// `true` once formation has stopped.
    pub fn converged(&self) -> bool {
        self.phase != TerrainPhase::Growth
    }

    /// Configured number of smoothing passes.
    pub fn smoothing_steps(&self) -> u32 {
        self.smoothing_steps
    }

    /// Growth steps taken so far.
    pub fn growth_steps(&self) -> u64 {
        self.growth_steps
    }

    /// Smoothing passes completed so far.
    pub fn smoothing_done(&self) -> u32 {
        match self.phase {
            TerrainPhase::Growth => 0,
            TerrainPhase::Smoothing { done } => done,
            TerrainPhase::Settled => self.smoothing_steps,
        }
    }

    fn grow(old: f64, neighbours: f64) -> f64 {
        if old == LAND {
            if neighbours < SURVIVE_MIN {
                WATER
            } else {
                LAND
            }
        } else if neighbours >= BIRTH_MIN {
            LAND
        } else {
            old
        }
    }

    fn enter_smoothing(&mut self) {
        self.phase = if self.smoothing_steps == 0 {
            TerrainPhase::Settled
        } else {
            TerrainPhase::Smoothing { done: 0 }
        };
    }
}

impl Default for TerrainGrowth {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateRule for TerrainGrowth {
    fn name(&self) -> &str {
        "terrain_growth"
    }

    fn self_weight(&self) -> f64 {
        match self.phase {
            TerrainPhase::Growth => 0.0,
            TerrainPhase::Smoothing { .. } | TerrainPhase::Settled => 1.0,
        }
    }

    fn apply(&self, old: f64, aggregate: f64) -> f64 {
        match self.phase {
            TerrainPhase::Growth => Self::grow(old, aggregate),
            TerrainPhase::Smoothing { .. } => (aggregate / 9.0).sqrt(),
            TerrainPhase::Settled => old,
        }
    }

    fn active_value(&self) -> f64 {
        LAND
    }

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Terrain
    }

    fn is_settled(&self) -> bool {
        self.phase == TerrainPhase::Settled
    }

    fn finish_step(&mut self, prev: &Grid, next: &Grid) -> Option<RuleEvent> {
        match self.phase {
            TerrainPhase::Growth => {
                self.growth_steps += 1;
                let fixed_point = prev == next;
                let forced = !fixed_point
                    && self
                        .growth_limit
                        .is_some_and(|limit| self.growth_steps >= limit);
                if fixed_point || forced {
                    self.enter_smoothing();
                    Some(RuleEvent::FormationStopped {
                        growth_steps: self.growth_steps,
                        forced,
                    })
                } else {
                    None
                }
            }
            TerrainPhase::Smoothing { done } => {
                let done = done + 1;
                if done >= self.smoothing_steps {
                    self.phase = TerrainPhase::Settled;
                    Some(RuleEvent::SmoothingFinished { passes: done })
                } else {
                    self.phase = TerrainPhase::Smoothing { done };
                    None
                }
            }
            TerrainPhase::Settled => None,
        }
    }

    fn reset(&mut self) {
        self.phase = TerrainPhase::Growth;
        self.growth_steps = 0;
    }
}
