//! Small grids with known behaviour.
//!
//! Built from ASCII art so tests read like the pattern they check:
//! `#` is 1.0, `.` is 0.0, whitespace is ignored.

use tessel_space::Grid;

/// Parse ASCII art into a grid. Every line must have the same width.
///
/// # Panics
///
/// On ragged or empty input, or characters other than `#`, `.`, and spaces.
pub fn grid_from_ascii(art: &str) -> Grid {
    let rows: Vec<Vec<f64>> = art
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| {
            l.chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|ch| match ch {
                    '#' => 1.0,
                    '.' => 0.0,
                    other => panic!("unexpected cell character {other:?}"),
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows.as_slice()).expect("ascii art must be a non-empty rectangle")
}

/// Render a binary grid back to ASCII art (`#` for non-zero).
pub fn grid_to_ascii(grid: &Grid) -> String {
    grid.iter_rows()
        .map(|row| {
            row.iter()
                .map(|&v| if v != 0.0 { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 4x4 grid with a horizontal blinker at row 1, columns 1..=3.
pub fn blinker_4x4() -> Grid {
    grid_from_ascii(
        "
        ....
        .###
        ....
        ....
        ",
    )
}

/// 6x6 grid with a 2x2 block in the middle.
pub fn block_6x6() -> Grid {
    grid_from_ascii(
        "
        ......
        ......
        ..##..
        ..##..
        ......
        ......
        ",
    )
}

/// 5x5 grid with one live cell and nothing around it.
pub fn lonely_cell_5x5() -> Grid {
    grid_from_ascii(
        "
        .....
        .....
        ..#..
        .....
        .....
        ",
    )
}

/// 10x10 water grid with a 4x4 island; converges after two growth steps.
pub fn island_10x10() -> Grid {
    grid_from_ascii(
        "
        ..........
        ..........
        ..........
        ...####...
        ...####...
        ...####...
        ...####...
        ..........
        ..........
        ..........
        ",
    )
}
