//! Test utilities and fixtures for Tessel development.
//!
//! Provides a [`RecordingSink`] implementing [`RenderSink`] and the
//! [`fixtures`] module of small grids with known behaviour.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use tessel_core::{CellReader, ColorScheme, RenderSink};
use tessel_space::Grid;

/// Render sink that keeps a copy of every frame it is asked to draw.
///
/// Inspect with [`frames`](RecordingSink::frames) and
/// [`last`](RecordingSink::last) after driving the code under test.
#[derive(Default)]
pub struct RecordingSink {
    frames: Vec<(Grid, ColorScheme)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames drawn so far, oldest first.
    pub fn frames(&self) -> &[(Grid, ColorScheme)] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last(&self) -> Option<&(Grid, ColorScheme)> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn draw(&mut self, grid: &dyn CellReader, scheme: ColorScheme) {
        let copy = Grid::from_vec(grid.rows(), grid.cols(), grid.cells().to_vec())
            .expect("CellReader dimensions match its cell buffer");
        self.frames.push((copy, scheme));
    }
}
