//! Initial grid configurations.
//!
//! Literal seeds for each variant plus a few well-known Life patterns.
//! Patterns are `(row, col)` offsets stamped relative to an origin with
//! toroidal wrapping, so they may straddle an edge.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::GridError;
use tessel_space::Grid;

use crate::heat::{COLD, HOT};
use crate::life::{ALIVE, DEAD};
use crate::terrain::{LAND, WATER};

/// A set of cell offsets relative to a stamping origin.
pub type Pattern = [(i64, i64)];

/// R-pentomino:
///
/// ```text
/// .XX
/// XX.
/// .X.
/// ```
pub const R_PENTOMINO: [(i64, i64); 5] = [(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)];

/// Horizontal period-2 blinker.
pub const BLINKER: [(i64, i64); 3] = [(0, 0), (0, 1), (0, 2)];

/// 2x2 still life.
pub const BLOCK: [(i64, i64); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// South-east travelling glider.
pub const GLIDER: [(i64, i64); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Write `value` at every offset of `pattern` relative to `origin`.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, origin: (i64, i64), value: f64) {
    for &(dr, dc) in pattern {
        grid.set(origin.0 + dr, origin.1 + dc, value);
    }
}

/// A cold grid with a hot `size x size` block in the middle.
///
/// `hot_block(100, 100, 20)` puts the block at rows and columns 40..60.
/// A block larger than the grid is clipped to it.
pub fn hot_block(rows: usize, cols: usize, size: usize) -> Result<Grid, GridError> {
    let mut grid = Grid::new(rows, cols, COLD)?;
    let h = size.min(rows);
    let w = size.min(cols);
    let r0 = (rows - h) / 2;
    let c0 = (cols - w) / 2;
    for r in r0..r0 + h {
        for c in c0..c0 + w {
            grid.set(r as i64, c as i64, HOT);
        }
    }
    Ok(grid)
}

/// Independent fair land/water draw per cell.
///
/// Uses a ChaCha8 RNG seeded from `seed`, so the same seed always yields
/// the same map.
pub fn random_terrain(rows: usize, cols: usize, seed: u64) -> Result<Grid, GridError> {
    let mut grid = Grid::new(rows, cols, WATER)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for cell in grid.cells_mut() {
        *cell = if rng.random_bool(0.5) { LAND } else { WATER };
    }
    Ok(grid)
}

/// A dead grid with an R-pentomino stamped at `origin`.
///
/// `r_pentomino(50, 100, (3, 3))` reproduces the classic seed with live
/// cells at (3,4), (3,5), (4,3), (4,4), (5,4).
pub fn r_pentomino(rows: usize, cols: usize, origin: (i64, i64)) -> Result<Grid, GridError> {
    let mut grid = Grid::new(rows, cols, DEAD)?;
    stamp(&mut grid, &R_PENTOMINO, origin, ALIVE);
    Ok(grid)
}
