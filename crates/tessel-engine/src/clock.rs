//! Reference timer source.
//!
//! The engine itself never sleeps; [`TickClock`] is the fixed-period loop
//! an interactive front end would otherwise write by hand. Each iteration
//! measures how long the tick took and sleeps for whatever remains of the
//! period, so a slow step delays the next tick rather than queueing
//! extra ones.

use std::time::{Duration, Instant};

use tessel_core::RenderSink;

use crate::controller::SimulationController;
use crate::render::render_frame;

/// Fixed-period tick scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickClock {
    period: Duration,
}

impl TickClock {
    /// A clock ticking every `period`.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// A clock using the controller's configured tick interval.
    pub fn for_controller(sim: &SimulationController) -> Self {
        Self::new(sim.tick_interval())
    }

    /// The tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the period that began at `tick_start`, as seen at `now`.
    ///
    /// `None` if the tick overran its budget.
    pub fn remaining(&self, tick_start: Instant, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(tick_start);
        self.period
            .checked_sub(elapsed)
            .filter(|d| !d.is_zero())
    }

    /// Sleep until the period that began at `tick_start` is over.
    pub fn sleep_remaining(&self, tick_start: Instant) {
        if let Some(d) = self.remaining(tick_start, Instant::now()) {
            std::thread::sleep(d);
        }
    }

    /// Drive `ticks` timer periods: tick the controller, redraw if the
    /// grid changed, sleep out the rest of the period.
    ///
    /// Returns the number of frames drawn. A paused controller draws
    /// nothing but still consumes the periods.
    pub fn run(
        &self,
        sim: &mut SimulationController,
        sink: &mut dyn RenderSink,
        ticks: usize,
    ) -> usize {
        let mut frames = 0;
        for _ in 0..ticks {
            let tick_start = Instant::now();
            if sim.tick().is_some_and(|o| o.changed()) {
                render_frame(sim, sink);
                frames += 1;
            }
            self.sleep_remaining(tick_start);
        }
        frames
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TICK_INTERVAL)
    }
}
