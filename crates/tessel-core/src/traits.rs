//! Read-only access to a grid of cell values.

/// Read-only view of a toroidal grid of `f64` cells.
///
/// Implemented by the concrete grid type and consumed by render sinks,
/// which only ever need to look at the current state.
///
/// # Examples
///
/// ```
/// use tessel_core::CellReader;
///
/// struct Flat(Vec<f64>);
///
/// impl CellReader for Flat {
///     fn rows(&self) -> usize { 1 }
///     fn cols(&self) -> usize { self.0.len() }
///     fn cells(&self) -> &[f64] { &self.0 }
/// }
///
/// let g = Flat(vec![1.0, 2.0, 3.0]);
/// assert_eq!(g.get(0, -1), 3.0);
/// assert_eq!(g.get(5, 3), 1.0);
/// ```
pub trait CellReader {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// All cells in row-major order. Length is `rows() * cols()`.
    fn cells(&self) -> &[f64];

    /// Value at `(row, col)`, wrapping both indices modulo the dimensions.
    fn get(&self, row: i64, col: i64) -> f64 {
        let r = row.rem_euclid(self.rows() as i64) as usize;
        let c = col.rem_euclid(self.cols() as i64) as usize;
        self.cells()[r * self.cols() + c]
    }
}

/// Fixed colour mapping a render sink should apply to a variant's grid.
///
/// Rendering itself happens outside the engine; this only names the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Continuous rainbow map for temperatures in `[0, 1]`.
    Spectral,
    /// Continuous water/beach/land map for terrain heights in `[0, 1]`,
    /// drawn with a colour bar.
    Terrain,
    /// Two-tone map for binary alive/dead cells.
    Greys,
}

/// Consumer of grid frames, implemented by the external renderer.
///
/// The engine never draws on its own. The tick clock draws after each
/// tick that changed the grid; after an edit, the front end draws when
/// the input response asks for a redraw.
pub trait RenderSink {
    /// Redraw the whole grid using `scheme`.
    fn draw(&mut self, grid: &dyn CellReader, scheme: ColorScheme);
}
