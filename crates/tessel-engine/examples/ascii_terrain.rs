//! Tessel terrain demo: random land/water draw, majority growth until
//! formation stops, then beach smoothing, printed as text.
//!
//! Demonstrates:
//!   1. Building a controller from a preset config
//!   2. Implementing a `RenderSink`
//!   3. Listening for status events
//!   4. Driving ticks with a `TickClock`
//!
//! Run with:
//!   cargo run --example ascii_terrain

use std::time::Duration;

use tessel_core::{CellReader, ColorScheme, RenderSink};
use tessel_engine::{
    handle_input, render_frame, InputEvent, SimEvent, SimulationConfig, SimulationController,
    TickClock,
};
use tessel_rules::seed::random_terrain;
use tessel_rules::TerrainGrowth;

// ─── Grid parameters ────────────────────────────────────────────

const ROWS: usize = 24;
const COLS: usize = 64;
const SEED: u64 = 2024;
const MAX_TICKS: usize = 200;

// ─── Render sink: characters by height ──────────────────────────

struct AsciiSink;

impl RenderSink for AsciiSink {
    fn draw(&mut self, grid: &dyn CellReader, scheme: ColorScheme) {
        let ramp: &[char] = match scheme {
            ColorScheme::Terrain => &['~', '-', '.', ':', '#'],
            ColorScheme::Spectral | ColorScheme::Greys => &[' ', '.', 'o', 'O', '@'],
        };
        let top = (ramp.len() - 1) as f64;
        let mut out = String::with_capacity(grid.cells().len() + grid.rows());
        for row in grid.cells().chunks(grid.cols()) {
            for &v in row {
                let i = (v.clamp(0.0, 1.0) * top).round() as usize;
                out.push(ramp[i]);
            }
            out.push('\n');
        }
        println!("{out}");
    }
}

fn main() {
    let grid = random_terrain(ROWS, COLS, SEED).expect("grid dimensions are non-zero");
    let config = SimulationConfig::new(grid, TerrainGrowth::new())
        .tick_interval(Duration::from_millis(20));
    let mut sim = SimulationController::new(config).expect("preset config is valid");
    let events = sim.subscribe();
    let mut sink = AsciiSink;

    println!("Initial draw ({ROWS}x{COLS}, seed {SEED}):");
    render_frame(&sim, &mut sink);

    // Paint a small island while paused, as a pointer would.
    for c in 30..34 {
        handle_input(&mut sim, InputEvent::Click { row: 12, col: c });
    }
    handle_input(&mut sim, InputEvent::TogglePause);

    let clock = TickClock::for_controller(&sim);
    let mut ticks = 0;
    while !sim.rule().is_settled() && ticks < MAX_TICKS {
        clock.run(&mut sim, &mut sink, 1);
        ticks += 1;
        for event in events.try_iter() {
            if let SimEvent::Rule(e) = event {
                println!(">>> {e:?} after step {}", sim.step_id());
            }
        }
    }

    println!("Final terrain after {} steps:", sim.step_id());
    render_frame(&sim, &mut sink);
    let (lo, hi) = sim.grid().min_max();
    println!("height range: {lo:.3} .. {hi:.3}");
}
