//! Benchmark profiles for the Tessel cellular automaton engine.
//!
//! Each profile builds a running [`SimulationController`] on a 100x100
//! grid (10K cells), one per rule variant:
//!
//! - [`heat_profile`]: centred hot block, default `cp`
//! - [`terrain_profile`]: seeded random land/water draw
//! - [`life_profile`]: deterministic half-density soup

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_engine::{ConfigError, SimulationConfig, SimulationController};
use tessel_rules::seed::{hot_block, random_terrain};
use tessel_rules::{GameOfLife, HeatDiffusion, TerrainGrowth};

/// Side length of every benchmark grid.
pub const BENCH_DIM: usize = 100;

/// Running heat-diffusion controller on a 100x100 grid.
pub fn heat_profile() -> Result<SimulationController, ConfigError> {
    let grid = hot_block(BENCH_DIM, BENCH_DIM, 20)?;
    SimulationController::new(
        SimulationConfig::new(grid, HeatDiffusion::default()).paused(false),
    )
}

/// Running terrain controller on a 100x100 random draw.
pub fn terrain_profile(seed: u64) -> Result<SimulationController, ConfigError> {
    let grid = random_terrain(BENCH_DIM, BENCH_DIM, seed)?;
    SimulationController::new(SimulationConfig::new(grid, TerrainGrowth::new()).paused(false))
}

/// Running Game of Life controller on a 100x100 soup.
///
/// The soup is the land/water draw for `seed`, so roughly half the cells
/// start alive and the first steps touch most of the grid.
pub fn life_profile(seed: u64) -> Result<SimulationController, ConfigError> {
    let grid = random_terrain(BENCH_DIM, BENCH_DIM, seed)?;
    SimulationController::new(SimulationConfig::new(grid, GameOfLife).paused(false))
}
