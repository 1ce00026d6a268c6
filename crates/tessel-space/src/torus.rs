//! Index arithmetic on a torus.

use crate::grid::Grid;
use smallvec::SmallVec;

/// All 8 Moore offsets: N, S, W, E, NW, NE, SW, SE. `(0, 0)` is excluded.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Wrap `val` into `[0, len)`. `len` must be non-zero.
#[inline]
pub fn wrap_axis(val: i64, len: usize) -> usize {
    let n = len as i64;
    if val >= 0 && val < n {
        return val as usize;
    }
    val.rem_euclid(n) as usize
}

/// The 8 Moore neighbours of `(row, col)` as wrapped `(row, col)` pairs,
/// in [`MOORE_OFFSETS`] order.
///
/// On grids narrower than 3 along an axis some neighbours coincide (a
/// 1x1 grid lists itself eight times).
pub fn moore_neighbours(grid: &Grid, row: i64, col: i64) -> SmallVec<[(usize, usize); 8]> {
    MOORE_OFFSETS
        .iter()
        .map(|&(dr, dc)| {
            (
                wrap_axis(row + dr, grid.rows()),
                wrap_axis(col + dc, grid.cols()),
            )
        })
        .collect()
}
