//! Moore-neighbourhood aggregation kernel.
//!
//! This runs `rows * cols` times per step, so it avoids the generic
//! [`moore_neighbours`](crate::torus::moore_neighbours) path: the three
//! wrapped row offsets and three wrapped column offsets are resolved once
//! and the flat buffer is indexed directly.

use crate::grid::Grid;
use crate::torus::wrap_axis;

/// Weighted Moore sum around `(row, col)`.
///
/// Returns `self_weight * grid(row, col) + sum(grid(neighbour))` over the
/// 8 toroidally wrapped neighbours. With `self_weight = 0` this is the
/// plain neighbour sum; with `self_weight = 1` it is the 3x3 box sum.
///
/// # Examples
///
/// ```
/// use tessel_space::{moore_sum, Grid};
///
/// let g = Grid::new(4, 4, 1.0).unwrap();
/// assert_eq!(moore_sum(&g, 0, 0, 0.0), 8.0);
/// assert_eq!(moore_sum(&g, 0, 0, 1.0), 9.0);
/// ```
#[inline]
pub fn moore_sum(grid: &Grid, row: i64, col: i64, self_weight: f64) -> f64 {
    let rows = grid.rows();
    let cols = grid.cols();
    let cells = grid.cells();

    let r = wrap_axis(row, rows);
    let c = wrap_axis(col, cols);
    let up = if r == 0 { rows - 1 } else { r - 1 } * cols;
    let down = if r + 1 == rows { 0 } else { r + 1 } * cols;
    let mid = r * cols;
    let left = if c == 0 { cols - 1 } else { c - 1 };
    let right = if c + 1 == cols { 0 } else { c + 1 };

    let neighbours = cells[up + left]
        + cells[up + c]
        + cells[up + right]
        + cells[mid + left]
        + cells[mid + right]
        + cells[down + left]
        + cells[down + c]
        + cells[down + right];

    if self_weight == 0.0 {
        neighbours
    } else {
        self_weight * cells[mid + c] + neighbours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::torus::moore_neighbours;
    use proptest::prelude::*;

    #[test]
    fn isolated_cell_contributes_only_with_self_weight() {
        let mut g = Grid::new(5, 5, 0.0).unwrap();
        g.set(2, 2, 1.0);
        assert_eq!(moore_sum(&g, 2, 2, 0.0), 0.0);
        assert_eq!(moore_sum(&g, 2, 2, 3.0), 3.0);
        // Every neighbour sees it exactly once.
        for (r, c) in moore_neighbours(&g, 2, 2) {
            assert_eq!(moore_sum(&g, r as i64, c as i64, 0.0), 1.0);
        }
        assert_eq!(moore_sum(&g, 0, 0, 0.0), 0.0);
    }

    #[test]
    fn corner_sees_opposite_corners() {
        let mut g = Grid::new(4, 4, 0.0).unwrap();
        g.set(3, 3, 1.0);
        g.set(3, 0, 1.0);
        g.set(0, 3, 1.0);
        assert_eq!(moore_sum(&g, 0, 0, 0.0), 3.0);
    }

    #[test]
    fn single_row_counts_wrapped_duplicates() {
        // 1x3 torus: the row above and below are the row itself.
        let g = Grid::from_rows(&[[1.0, 2.0, 4.0]]).unwrap();
        // left + right in 3 rows, plus centre twice (up/down).
        assert_eq!(moore_sum(&g, 0, 1, 0.0), 3.0 * (1.0 + 4.0) + 2.0 * 2.0);
    }

    #[test]
    fn out_of_range_coordinates_wrap() {
        let mut g = Grid::new(3, 3, 0.0).unwrap();
        g.set(0, 0, 1.0);
        assert_eq!(moore_sum(&g, 4, 4, 0.0), moore_sum(&g, 1, 1, 0.0));
        assert_eq!(moore_sum(&g, -3, -3, 1.0), moore_sum(&g, 0, 0, 1.0));
    }

    proptest! {
        #[test]
        fn fast_path_matches_neighbour_list(
            rows in 1usize..8,
            cols in 1usize..8,
            weight in 0.0f64..4.0,
            salt in 0u64..500,
        ) {
            let cells: Vec<f64> = (0..rows * cols)
                .map(|i| (((i as u64 + salt) * 7919) % 13) as f64)
                .collect();
            let g = Grid::from_vec(rows, cols, cells).unwrap();
            for r in 0..rows as i64 {
                for c in 0..cols as i64 {
                    let slow: f64 = weight * g.get(r, c)
                        + moore_neighbours(&g, r, c)
                            .iter()
                            .map(|&(nr, nc)| g.get(nr as i64, nc as i64))
                            .sum::<f64>();
                    let fast = moore_sum(&g, r, c, weight);
                    prop_assert!((slow - fast).abs() < 1e-9, "({r},{c}): {slow} vs {fast}");
                }
            }
        }
    }
}
