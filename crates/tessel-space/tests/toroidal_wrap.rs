//! Cross-module checks of the torus topology: grid accessors, the
//! neighbour list, and the aggregation kernel agree on what wraps where.

use tessel_space::{moore_neighbours, moore_sum, CellReader, Grid, GridError};

#[test]
fn opposite_edges_are_adjacent() {
    let rows = 6;
    let cols = 9;
    let mut g = Grid::new(rows, cols, 0.0).unwrap();
    g.set(0, 4, 1.0);
    // The bottom row sees the top row as its "down" neighbour.
    assert_eq!(moore_sum(&g, rows as i64 - 1, 4, 0.0), 1.0);
    assert!(moore_neighbours(&g, rows as i64 - 1, 4).contains(&(0, 4)));
}

#[test]
fn every_cell_has_eight_neighbours_on_a_torus() {
    let g = Grid::new(5, 7, 1.0).unwrap();
    for r in 0..5 {
        for c in 0..7 {
            assert_eq!(moore_neighbours(&g, r, c).len(), 8);
            assert_eq!(moore_sum(&g, r, c, 0.0), 8.0);
        }
    }
}

#[test]
fn trait_object_reads_wrapped_values() {
    let g = Grid::from_rows(&[[0.0, 1.0], [2.0, 3.0]]).unwrap();
    let reader: &dyn CellReader = &g;
    assert_eq!(reader.get(-1, -1), 3.0);
    assert_eq!(reader.get(2, 3), 1.0);
}

#[test]
fn zero_dimension_is_fatal() {
    assert!(matches!(
        Grid::new(0, 0, 0.0),
        Err(GridError::InvalidDimensions { .. })
    ));
}
