/*
 * Input Module
 *
 * This module handles window events for the neural mesh.
 *
 * Features:
 * - Pointer tracking from mouse (desktop layout) and touch (mobile layout)
 * - Full mesh rebuild on resize
 * - Keyboard shortcuts for the controls window, pause and rebuild
 * - Forwarding raw events to egui
 */

use nannou::event::{TouchEvent, TouchPhase};
use nannou::prelude::*;

use crate::app::Model;
use crate::viewport::pixel_size;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let viewport = &mut model.simulation.viewport;
    let screen_pos = viewport.window_to_screen(pos);
    model.interaction.mouse_moved(viewport, screen_pos, &model.params);
}

// Touch event handler, only drags steer the mesh
pub fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    if touch.phase != TouchPhase::Moved {
        return;
    }

    let viewport = &mut model.simulation.viewport;
    let screen_pos = viewport.window_to_screen(touch.position);
    model
        .interaction
        .touch_moved(model.clock, viewport, screen_pos, &model.params);
}

// Window resized event handler, every resize lays out a fresh mesh
pub fn resized(_app: &App, model: &mut Model, dim: Vec2) {
    let (width, height) = pixel_size(dim);
    log::info!("window resized to {}x{}", width, height);
    model.simulation.resize(width, height, &model.params);
}

// Keyboard shortcuts
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::D => {
            model.params.show_debug = !model.params.show_debug;
        }
        Key::Space => {
            model.params.paused = !model.params.paused;
            log::info!("animation {}", if model.params.paused { "paused" } else { "resumed" });
        }
        Key::R => {
            model.simulation.rebuild(&model.params);
        }
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
