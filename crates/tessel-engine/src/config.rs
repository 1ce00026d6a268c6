//! Simulation configuration, presets, and validation.
//!
//! [`SimulationConfig`] is the builder input for a
//! [`SimulationController`](crate::SimulationController).
//! [`validate()`](SimulationConfig::validate) checks structural invariants
//! before the controller takes ownership.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use tessel_core::GridError;
use tessel_rules::seed::{hot_block, r_pentomino, random_terrain};
use tessel_rules::{GameOfLife, HeatDiffusion, RuleError, TerrainGrowth, UpdateRule};
use tessel_space::Grid;

/// Default timer period between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Heat preset: grid size.
pub const HEAT_DIM: (usize, usize) = (100, 100);
/// Heat preset: edge length of the hot block.
pub const HEAT_BLOCK: usize = 20;
/// Terrain preset: grid size.
pub const TERRAIN_DIM: (usize, usize) = (100, 100);
/// Game of Life preset: grid size.
pub const LIFE_DIM: (usize, usize) = (50, 100);
/// Game of Life preset: R-pentomino stamping origin.
pub const LIFE_ORIGIN: (i64, i64) = (3, 3);

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating a [`SimulationConfig`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The initial grid could not be built.
    Grid(GridError),
    /// A rule parameter is invalid.
    Rule(RuleError),
    /// The tick interval is zero.
    ZeroTickInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Rule(e) => write!(f, "rule: {e}"),
            Self::ZeroTickInterval => write!(f, "tick_interval must be non-zero"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Rule(e) => Some(e),
            Self::ZeroTickInterval => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Everything needed to construct a simulation.
///
/// The controller consumes the config; nothing in it is shared.
pub struct SimulationConfig {
    /// Initial grid state.
    pub grid: Grid,
    /// Active update rule.
    pub rule: Box<dyn UpdateRule>,
    /// Start paused (the interactive default) or running.
    pub start_paused: bool,
    /// Period the timer source should call `tick()` at.
    pub tick_interval: Duration,
}

impl SimulationConfig {
    /// A paused simulation of `rule` over `grid` with the default tick
    /// interval.
    pub fn new(grid: Grid, rule: impl UpdateRule) -> Self {
        Self {
            grid,
            rule: Box::new(rule),
            start_paused: true,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Heat diffusion (`cp = 0`) from a 20x20 hot block centred in a
    /// 100x100 cold grid.
    pub fn heat() -> Result<Self, ConfigError> {
        let grid = hot_block(HEAT_DIM.0, HEAT_DIM.1, HEAT_BLOCK)?;
        Ok(Self::new(grid, HeatDiffusion::default()))
    }

    /// Terrain formation from a seeded random land/water draw over a
    /// 100x100 grid, with two smoothing passes.
    ///
    /// The preset sets no growth limit. Some seeds fall into a period-2
    /// land/water cycle and never stop forming; replace `rule` with
    /// [`TerrainGrowth::with_growth_limit`] to bound formation.
    pub fn terrain(seed: u64) -> Result<Self, ConfigError> {
        let grid = random_terrain(TERRAIN_DIM.0, TERRAIN_DIM.1, seed)?;
        Ok(Self::new(grid, TerrainGrowth::new()))
    }

    /// Game of Life from an R-pentomino in a 50x100 grid.
    pub fn life() -> Result<Self, ConfigError> {
        let grid = r_pentomino(LIFE_DIM.0, LIFE_DIM.1, LIFE_ORIGIN)?;
        Ok(Self::new(grid, GameOfLife))
    }

    /// Set whether the simulation starts paused.
    pub fn paused(mut self, paused: bool) -> Self {
        self.start_paused = paused;
        self
    }

    /// Set the tick interval.
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Check structural invariants.
    ///
    /// The grid is valid by construction; this checks the timer period
    /// and that the rule's self-weight is a usable number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        let w = self.rule.self_weight();
        if !w.is_finite() || w < 0.0 {
            return Err(ConfigError::Rule(RuleError::InvalidSelfWeight { value: w }));
        }
        Ok(())
    }
}

impl fmt::Debug for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationConfig")
            .field("rows", &self.grid.rows())
            .field("cols", &self.grid.cols())
            .field("rule", &self.rule.name())
            .field("start_paused", &self.start_paused)
            .field("tick_interval", &self.tick_interval)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_core::ColorScheme;

    #[test]
    fn heat_preset() {
        let cfg = SimulationConfig::heat().unwrap();
        assert_eq!((cfg.grid.rows(), cfg.grid.cols()), HEAT_DIM);
        assert_eq!(cfg.grid.sum(), 400.0);
        assert_eq!(cfg.rule.name(), "heat_diffusion");
        assert!(cfg.start_paused);
        assert_eq!(cfg.tick_interval, Duration::from_millis(50));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn terrain_preset_is_seeded() {
        let a = SimulationConfig::terrain(3).unwrap();
        let b = SimulationConfig::terrain(3).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.rule.color_scheme(), ColorScheme::Terrain);
    }

    #[test]
    fn life_preset() {
        let cfg = SimulationConfig::life().unwrap();
        assert_eq!((cfg.grid.rows(), cfg.grid.cols()), LIFE_DIM);
        assert_eq!(cfg.grid.sum(), 5.0);
        assert_eq!(cfg.grid.get(4, 3), 1.0);
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = SimulationConfig::life()
            .unwrap()
            .tick_interval(Duration::ZERO);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn negative_self_weight_rejected() {
        struct Leaky;
        impl UpdateRule for Leaky {
            fn name(&self) -> &str {
                "leaky"
            }
            fn self_weight(&self) -> f64 {
                -1.0
            }
            fn apply(&self, old: f64, _aggregate: f64) -> f64 {
                old
            }
            fn color_scheme(&self) -> ColorScheme {
                ColorScheme::Spectral
            }
        }
        let cfg = SimulationConfig::new(Grid::new(2, 2, 0.0).unwrap(), Leaky);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Rule(RuleError::InvalidSelfWeight { .. }))
        ));
    }

    #[test]
    fn grid_error_converts_and_chains() {
        let e: ConfigError = GridError::InvalidDimensions { rows: 0, cols: 0 }.into();
        assert_eq!(e.to_string(), "grid: invalid grid dimensions 0x0");
        assert!(e.source().is_some());
        assert!(ConfigError::ZeroTickInterval.source().is_none());
    }

    #[test]
    fn debug_names_the_rule() {
        let cfg = SimulationConfig::life().unwrap().paused(false);
        let s = format!("{cfg:?}");
        assert!(s.contains("game_of_life"));
        assert!(s.contains("start_paused: false"));
    }
}
