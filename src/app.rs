/*
 * Application Module
 *
 * This module defines the main application model and the nannou update hook.
 * It creates the window, owns the simulation and overlay state, and routes
 * UI clicks and timers into the interaction layer before ticking the mesh.
 */

use std::time::Duration;

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::debug::DebugInfo;
use crate::error::MeshError;
use crate::input;
use crate::interaction::{Interaction, OverlayClicks};
use crate::params::{MeshParams, OverlayTimings};
use crate::renderer;
use crate::simulation::MeshSimulation;
use crate::ui;
use crate::viewport::pixel_size;
use crate::WINDOW_TITLE;

// Main model for the application
pub struct Model {
    pub simulation: MeshSimulation,
    pub interaction: Interaction,
    pub params: MeshParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Elapsed time since startup, the clock for every overlay timer
    pub clock: Duration,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // 80% of the primary monitor, or a fixed fallback
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            ((size.width as f32 * 0.8) as u32, (size.height as f32 * 0.8) as u32)
        }
        None => (1280, 800),
    };

    let window_id = build_window(app, window_width, window_height).unwrap_or_else(|err| fail(err));
    let window = match app.window(window_id) {
        Some(window) => window,
        None => fail(MeshError::Window("window closed during startup".to_string())),
    };

    let egui = Egui::from_window(&window);

    let (points_w, points_h) = window.inner_size_points();
    let (width, height) = pixel_size(vec2(points_w, points_h));

    let params = MeshParams::default();
    let simulation = MeshSimulation::new(width, height, &params).unwrap_or_else(|err| fail(err));

    let mut interaction = Interaction::new(OverlayTimings::default(), StdRng::from_entropy());
    interaction.start(Duration::ZERO);

    log::info!("neural mesh started at {}x{}", width, height);

    Model {
        simulation,
        interaction,
        params,
        egui,
        debug_info: DebugInfo::default(),
        clock: Duration::ZERO,
    }
}

fn build_window(app: &App, width: u32, height: u32) -> Result<nannou::window::Id, MeshError> {
    app.new_window()
        .title(WINDOW_TITLE)
        .size(width, height)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .touch(input::touch)
        .resized(input::resized)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .map_err(|err| MeshError::Window(format!("{:?}", err)))
}

fn fail(err: MeshError) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.clock = update.since_start;

    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let mobile = model.params.is_mobile(model.simulation.viewport.width);
    let response = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.interaction.markers,
        &model.debug_info,
        mobile,
    );

    let clicks = OverlayClicks {
        toggle: response.toggle_clicked,
        link: response.link_selected,
    };
    model
        .interaction
        .step(model.clock, &mut model.simulation.viewport, &model.params, clicks);

    apply_param_changes(model, &response);
    model.simulation.tick(&model.params);

    model.debug_info.refresh(&model.simulation);
    model.debug_info.pending_timers = model.interaction.pending_timers();
}

// Apply the parameter edits from this frame's controls window
fn apply_param_changes(model: &mut Model, response: &ui::UiResponse) {
    if response.ui_changed {
        log::debug!("mesh parameters edited: {:?}", model.params);
    }

    if response.rebuild_needed || response.rebuild_requested {
        match model.params.validate() {
            Ok(()) => model.simulation.rebuild(&model.params),
            Err(err) => log::warn!("keeping current mesh: {}", err),
        }
    }
}
