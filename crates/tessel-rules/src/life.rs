//! Conway's Game of Life (B3/S23) on a 0/1 grid.

use crate::rule::UpdateRule;
use tessel_core::ColorScheme;

/// Value of a live cell.
pub const ALIVE: f64 = 1.0;
/// Value of a dead cell.
pub const DEAD: f64 = 0.0;

/// Conway's rule. Stateless; runs indefinitely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameOfLife;

impl UpdateRule for GameOfLife {
    fn name(&self) -> &str {
        "game_of_life"
    }

    fn apply(&self, old: f64, neighbours: f64) -> f64 {
        if old != DEAD {
            if neighbours < 2.0 || neighbours > 3.0 {
                DEAD
            } else {
                ALIVE
            }
        } else if neighbours == 3.0 {
            ALIVE
        } else {
            DEAD
        }
    }

    fn active_value(&self) -> f64 {
        ALIVE
    }

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Greys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::sweep;
    use crate::seed::{stamp, BLINKER, BLOCK, GLIDER};
    use tessel_space::Grid;

    #[test]
    fn transition_table() {
        let r = GameOfLife;
        for n in 0..=8 {
            let n = n as f64;
            let survives = n == 2.0 || n == 3.0;
            assert_eq!(r.apply(ALIVE, n), if survives { ALIVE } else { DEAD });
            assert_eq!(r.apply(DEAD, n), if n == 3.0 { ALIVE } else { DEAD });
        }
    }

    #[test]
    fn lonely_cell_dies() {
        let mut g = Grid::new(5, 5, DEAD).unwrap();
        g.set(2, 2, ALIVE);
        let next = sweep(&g, &GameOfLife);
        assert_eq!(next.sum(), 0.0);
    }

    #[test]
    fn block_is_still_life() {
        let mut g = Grid::new(6, 6, DEAD).unwrap();
        stamp(&mut g, &BLOCK, (2, 2), ALIVE);
        let mut cur = g.clone();
        for _ in 0..5 {
            cur = sweep(&cur, &GameOfLife);
            assert_eq!(cur, g);
        }
    }

    #[test]
    fn blinker_has_period_two() {
        let mut g = Grid::new(5, 5, DEAD).unwrap();
        stamp(&mut g, &BLINKER, (2, 1), ALIVE);
        let once = sweep(&g, &GameOfLife);
        assert_ne!(once, g);
        assert_eq!(once.get(1, 2), ALIVE);
        assert_eq!(once.get(2, 2), ALIVE);
        assert_eq!(once.get(3, 2), ALIVE);
        assert_eq!(once.sum(), 3.0);
        assert_eq!(sweep(&once, &GameOfLife), g);
    }

    #[test]
    fn glider_wraps_around_the_torus() {
        // A glider moves one cell diagonally every 4 generations; on an
        // 8x8 torus it returns home after 32.
        let mut g = Grid::new(8, 8, DEAD).unwrap();
        stamp(&mut g, &GLIDER, (0, 0), ALIVE);
        let mut cur = g.clone();
        for _ in 0..32 {
            cur = sweep(&cur, &GameOfLife);
            assert_eq!(cur.sum(), 5.0);
        }
        assert_eq!(cur, g);
    }
}
