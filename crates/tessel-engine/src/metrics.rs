//! Per-step metrics.
//!
//! [`StepMetrics`] captures what the most recent step did, for logging
//! and for adapters that want to skip redraws of unchanged frames.

/// Timing and change counts collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the sweep and bookkeeping, in microseconds.
    pub total_us: u64,
    /// Number of cells whose value differs from the previous grid.
    pub changed_cells: usize,
}
