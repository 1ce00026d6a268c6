//! The [`UpdateRule`] trait and [`RuleEvent`] enum.

use tessel_core::ColorScheme;
use tessel_space::{moore_sum, Grid};

/// Notification raised by a rule's between-step bookkeeping.
///
/// Advisory only: the controller forwards these to subscribers and logs
/// them, but never branches on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleEvent {
    /// Terrain growth reached a fixed point ("formation stopped").
    FormationStopped {
        /// Number of growth steps taken, including the one that found
        /// the fixed point.
        growth_steps: u64,
        /// `true` if the configured growth limit ended formation before
        /// an exact fixed point was found.
        forced: bool,
    },
    /// All terrain smoothing passes have run; further steps are no-ops.
    SmoothingFinished {
        /// Number of smoothing passes applied.
        passes: u32,
    },
}

/// A per-cell update function applied to every cell once per step.
///
/// # Contract
///
/// - [`apply()`](UpdateRule::apply) MUST be pure: it sees only the
///   cell's previous value and the aggregate over the previous grid.
/// - The aggregate is `self_weight() * old + sum(8 neighbours)`, computed
///   by [`tessel_space::moore_sum`] against the previous grid. Rules never
///   see the grid being written.
/// - Mutable bookkeeping happens only in
///   [`finish_step()`](UpdateRule::finish_step), after the sweep.
///
/// # Object safety
///
/// This trait is object-safe; the controller stores the active rule as
/// `Box<dyn UpdateRule>`.
///
/// # Examples
///
/// A rule that copies the neighbour average, ignoring the cell itself:
///
/// ```
/// use tessel_core::ColorScheme;
/// use tessel_rules::UpdateRule;
///
/// struct NeighbourMean;
///
/// impl UpdateRule for NeighbourMean {
///     fn name(&self) -> &str { "neighbour_mean" }
///     fn apply(&self, _old: f64, aggregate: f64) -> f64 { aggregate / 8.0 }
///     fn color_scheme(&self) -> ColorScheme { ColorScheme::Spectral }
/// }
///
/// let rule = NeighbourMean;
/// assert_eq!(rule.apply(1.0, 4.0), 0.5);
/// assert!(!rule.is_settled());
/// ```
pub trait UpdateRule: Send + 'static {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Weight of the cell's own value folded into the aggregate.
    ///
    /// Default: 0 (neighbours only).
    fn self_weight(&self) -> f64 {
        0.0
    }

    /// Compute a cell's next value.
    fn apply(&self, old: f64, aggregate: f64) -> f64;

    /// Value written by a pointer click on a cell ("hot", "land", "alive").
    ///
    /// Default: 1.
    fn active_value(&self) -> f64 {
        1.0
    }

    /// Colour map the renderer should use for this variant.
    fn color_scheme(&self) -> ColorScheme;

    /// `true` once further steps must leave the grid untouched.
    ///
    /// Default: never.
    fn is_settled(&self) -> bool {
        false
    }

    /// Bookkeeping after a complete sweep from `prev` to `next`.
    ///
    /// Default: no state, no event.
    fn finish_step(&mut self, prev: &Grid, next: &Grid) -> Option<RuleEvent> {
        let _ = (prev, next);
        None
    }

    /// Return bookkeeping to its initial state.
    fn reset(&mut self) {}
}

/// Sweep every cell of `prev` through `rule` into a fresh buffer.
///
/// Reads only from `prev` (Jacobi style), so every new value is computed
/// from one consistent snapshot. Rule bookkeeping is not touched; callers
/// follow up with [`UpdateRule::finish_step`].
pub fn sweep(prev: &Grid, rule: &dyn UpdateRule) -> Grid {
    let mut next = prev.zeroed_like();
    sweep_into(prev, rule, &mut next);
    next
}

/// Like [`sweep`], but writes into an existing buffer of the same shape.
///
/// Every cell of `next` is overwritten; its previous contents are never
/// read. Lets a caller ping-pong between two long-lived grids.
///
/// # Panics
///
/// If `next` does not have the same shape as `prev`.
pub fn sweep_into(prev: &Grid, rule: &dyn UpdateRule, next: &mut Grid) {
    assert_eq!(
        (prev.rows(), prev.cols()),
        (next.rows(), next.cols()),
        "sweep buffers must have the same shape"
    );
    let cols = prev.cols();
    let weight = rule.self_weight();
    let old = prev.cells();
    for (i, out) in next.cells_mut().iter_mut().enumerate() {
        let r = (i / cols) as i64;
        let c = (i % cols) as i64;
        *out = rule.apply(old[i], moore_sum(prev, r, c, weight));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountNeighbours;

    impl UpdateRule for CountNeighbours {
        fn name(&self) -> &str {
            "count"
        }
        fn apply(&self, _old: f64, aggregate: f64) -> f64 {
            aggregate
        }
        fn color_scheme(&self) -> ColorScheme {
            ColorScheme::Greys
        }
    }

    #[test]
    fn sweep_reads_only_the_previous_grid() {
        // If writes leaked into reads, later cells would see the counts
        // of earlier cells instead of the original 0/1 values.
        let mut g = Grid::new(3, 3, 0.0).unwrap();
        g.set(1, 1, 1.0);
        let next = sweep(&g, &CountNeighbours);
        for r in 0..3 {
            for c in 0..3 {
                let expected = if (r, c) == (1, 1) { 0.0 } else { 1.0 };
                assert_eq!(next.get(r, c), expected, "cell ({r},{c})");
            }
        }
        // Source untouched.
        assert_eq!(g.sum(), 1.0);
    }

    #[test]
    fn sweep_into_overwrites_stale_buffer() {
        let g = Grid::new(4, 4, 1.0).unwrap();
        let mut next = Grid::new(4, 4, 99.0).unwrap();
        sweep_into(&g, &CountNeighbours, &mut next);
        assert!(next.cells().iter().all(|&v| v == 8.0));
    }

    #[test]
    #[should_panic(expected = "same shape")]
    fn sweep_into_rejects_mismatched_buffer() {
        let g = Grid::new(4, 4, 1.0).unwrap();
        let mut next = Grid::new(3, 4, 0.0).unwrap();
        sweep_into(&g, &CountNeighbours, &mut next);
    }

    #[test]
    fn default_bookkeeping_is_inert() {
        let mut rule = CountNeighbours;
        let g = Grid::new(2, 2, 0.0).unwrap();
        assert_eq!(rule.self_weight(), 0.0);
        assert_eq!(rule.active_value(), 1.0);
        assert_eq!(rule.finish_step(&g, &g), None);
        rule.reset();
        assert!(!rule.is_settled());
    }
}
