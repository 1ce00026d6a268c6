//! Bridging the controller to an external [`RenderSink`].

use tessel_core::RenderSink;

use crate::controller::SimulationController;

/// Draw the controller's current grid with its rule's colour scheme.
pub fn render_frame(sim: &SimulationController, sink: &mut dyn RenderSink) {
    sink.draw(sim.grid(), sim.rule().color_scheme());
}
