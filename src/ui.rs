/*
 * UI Module
 *
 * This module draws the page overlay with nannou_egui: the navigation bar
 * with its headline, menu links and toggle, the hack success message, and
 * the optional "Mesh Controls" window for live parameter tuning.
 *
 * The UI never mutates interaction state directly; it reports what was
 * clicked and the app module routes it.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::interaction::{Markers, HACK_MESSAGE};
use crate::params::MeshParams;

pub const HEADLINE: &str = "NEURAL MESH";
pub const NAV_LINKS: [&str; 4] = ["Home", "Projects", "About", "Contact"];

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 255, 153);
const ACCENT_DIM: egui::Color32 = egui::Color32::from_rgb(0, 110, 66);
const ALERT: egui::Color32 = egui::Color32::from_rgb(255, 60, 90);

// What the user did in the overlay this frame
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiResponse {
    pub toggle_clicked: bool,
    pub link_selected: bool,
    pub rebuild_requested: bool,
    pub rebuild_needed: bool,
    pub ui_changed: bool,
}

// Label on the navigation toggle for the current markers
pub fn toggle_label(markers: &Markers) -> &'static str {
    if markers.hack_alert {
        "[ ! ]"
    } else if markers.nav_open {
        "[ x ]"
    } else {
        "[ = ]"
    }
}

// Update the UI and report clicks and parameter changes
pub fn update_ui(
    egui: &mut Egui,
    params: &mut MeshParams,
    markers: &Markers,
    debug_info: &DebugInfo,
    mobile: bool,
) -> UiResponse {
    let mut response = UiResponse::default();

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::TopBottomPanel::top("navigation").show(&ctx, |ui| {
        ui.horizontal(|ui| {
            let headline_color = if markers.flicker { ACCENT_DIM } else { ACCENT };
            ui.colored_label(headline_color, HEADLINE);

            if !mobile {
                ui.separator();
                for link in NAV_LINKS {
                    if ui.button(link).clicked() {
                        response.link_selected = true;
                    }
                }
            }

            ui.separator();
            if ui.selectable_label(markers.nav_open, toggle_label(markers)).clicked() {
                response.toggle_clicked = true;
            }
            if markers.hack_alert {
                ui.colored_label(ALERT, "ALERT");
            }
        });

        // The collapsible menu only exists on the mobile layout
        if mobile && markers.nav_open {
            ui.vertical(|ui| {
                for link in NAV_LINKS {
                    if ui.button(link).clicked() {
                        response.link_selected = true;
                    }
                }
            });
        }
    });

    if markers.message_shown {
        egui::Area::new("hack-message")
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(&ctx, |ui| {
                ui.colored_label(ACCENT, HACK_MESSAGE);
            });
    }

    if params.show_debug {
        egui::Window::new("Mesh Controls")
            .default_pos([10.0, 60.0])
            .show(&ctx, |ui| {
                ui.collapsing("Particle Field", |ui| {
                    ui.add(egui::Slider::new(&mut params.grid_gap, MeshParams::get_grid_gap_range()).text("Grid Gap"));
                    ui.add(egui::Slider::new(&mut params.repulsion_radius, MeshParams::get_radius_range()).text("Repulsion Radius"));
                    ui.add(egui::Slider::new(&mut params.link_distance, MeshParams::get_link_distance_range()).text("Link Distance"));
                    if ui.button("Rebuild Mesh").clicked() {
                        response.rebuild_requested = true;
                    }
                });

                ui.collapsing("Drones", |ui| {
                    ui.add(egui::Slider::new(&mut params.evade_radius, MeshParams::get_radius_range()).text("Evade Radius"));
                });

                ui.collapsing("Performance Tuning", |ui| {
                    ui.checkbox(&mut params.enable_spatial_grid, "Enable Spatial Grid");
                    ui.checkbox(&mut params.enable_parallel, "Enable Parallel Link Search");

                    ui.separator();

                    ui.label(format!("FPS: {:.1}", debug_info.fps));
                    ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));
                    ui.label(format!("Frame: {}", debug_info.frame));
                    ui.label(format!("Particles: {}", debug_info.particle_count));
                    ui.label(format!("Drones: {}", debug_info.drone_count));
                    ui.label(format!("Links: {}", debug_info.link_count));
                    ui.label(format!("Pending timers: {}", debug_info.pending_timers));
                });

                ui.checkbox(&mut params.show_debug, "Show Controls");
                ui.checkbox(&mut params.paused, "Pause Animation");
            });
    }

    let (rebuild_needed, ui_changed) = params.detect_changes();
    response.rebuild_needed = rebuild_needed;
    response.ui_changed = ui_changed;

    response
}
