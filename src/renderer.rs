/*
 * Renderer Module
 *
 * This module handles the rendering of the neural mesh.
 * Every frame starts from a cleared surface and draws, in order:
 * the links between nearby particles, the particles, the drones,
 * and finally the egui overlay on top.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::MESH_COLOR;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let simulation = &model.simulation;
    let viewport = &simulation.viewport;
    let (r, g, b) = MESH_COLOR;

    for link in &simulation.links {
        draw.line()
            .start(viewport.screen_to_window(link.start))
            .end(viewport.screen_to_window(link.end))
            .weight(model.params.link_weight)
            .color(rgba(r, g, b, link.alpha));
    }

    for particle in &simulation.particles.particles {
        particle.draw(&draw, viewport, simulation.frame);
    }

    for drone in &simulation.drones.drones {
        drone.draw(&draw, viewport, simulation.frame);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::warn!("failed to render mesh: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::warn!("failed to render overlay: {:?}", err);
    }
}
