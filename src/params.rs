/*
 * Mesh Parameters Module
 *
 * This module defines the MeshParams struct that gathers every tunable
 * constant of the neural mesh: lattice spacing, repulsion and evasion radii,
 * drift and wrap margins, link distance and the overlay timings. Some of the
 * values can be adjusted from the debug panel, so the struct also carries the
 * snapshot-based change detection used by the UI.
 */

use std::time::Duration;

use crate::error::MeshError;

// Parameters for the mesh that can be adjusted via UI
#[derive(Clone, Debug)]
pub struct MeshParams {
    // Particle field
    pub grid_gap: f32,
    pub particle_radius: f32,
    pub repulsion_radius: f32,
    pub repulsion_damping: f32,
    pub return_divisor: f32,
    pub drift_speed: f32,
    pub wrap_margin: f32,
    pub density_range: (f32, f32),

    // Links
    pub link_distance: f32,
    pub link_max_alpha: f32,
    pub link_weight: f32,

    // Drone field
    pub drone_spacing: f32,
    pub drone_size_range: (f32, f32),
    pub drone_speed_range: (f32, f32),
    pub drone_wobble: f32,
    pub evade_radius: f32,
    pub evade_force: f32,
    pub evade_boost: f32,

    // Interaction
    pub mobile_breakpoint: u32,

    // Performance and debug
    pub enable_spatial_grid: bool,
    pub enable_parallel: bool,
    pub show_debug: bool,
    pub paused: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug)]
struct ParamSnapshot {
    grid_gap: f32,
    repulsion_radius: f32,
    link_distance: f32,
    evade_radius: f32,
    enable_spatial_grid: bool,
    enable_parallel: bool,
    show_debug: bool,
    paused: bool,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            grid_gap: 25.0,
            particle_radius: 2.0,
            repulsion_radius: 180.0,
            repulsion_damping: 0.8,
            return_divisor: 15.0,
            drift_speed: 0.05,
            wrap_margin: 35.0,
            density_range: (10.0, 50.0),
            link_distance: 60.0,
            link_max_alpha: 0.5,
            link_weight: 0.8,
            drone_spacing: 300.0,
            drone_size_range: (10.0, 18.0),
            drone_speed_range: (0.5, 1.0),
            drone_wobble: 0.05,
            evade_radius: 200.0,
            evade_force: 0.02,
            evade_boost: 1.5,
            mobile_breakpoint: 600,
            enable_spatial_grid: true,
            enable_parallel: false,
            show_debug: false,
            paused: false,
            previous_values: None,
        }
    }
}

impl MeshParams {
    /// Check that every value keeps the simulation total: positive spacings
    /// and radii, a return divisor of at least one, and ordered random ranges.
    pub fn validate(&self) -> Result<(), MeshError> {
        let positive = [
            ("grid_gap", self.grid_gap),
            ("particle_radius", self.particle_radius),
            ("repulsion_radius", self.repulsion_radius),
            ("link_distance", self.link_distance),
            ("drone_spacing", self.drone_spacing),
            ("evade_radius", self.evade_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(MeshError::NonPositive { name, value });
            }
        }

        if !(self.return_divisor >= 1.0) {
            return Err(MeshError::ReturnDivisor(self.return_divisor));
        }

        let ranges = [
            ("density_range", self.density_range),
            ("drone_size_range", self.drone_size_range),
            ("drone_speed_range", self.drone_speed_range),
        ];
        for (name, (low, high)) in ranges {
            if !(low < high) {
                return Err(MeshError::EmptyRange { name, low, high });
            }
        }

        Ok(())
    }

    // Mobile layout is at or below the breakpoint
    pub fn is_mobile(&self, width: u32) -> bool {
        width <= self.mobile_breakpoint
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            grid_gap: self.grid_gap,
            repulsion_radius: self.repulsion_radius,
            link_distance: self.link_distance,
            evade_radius: self.evade_radius,
            enable_spatial_grid: self.enable_spatial_grid,
            enable_parallel: self.enable_parallel,
            show_debug: self.show_debug,
            paused: self.paused,
        });
    }

    // Check if any parameters have changed since the last snapshot
    // Returns a tuple of (rebuild_needed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut rebuild_needed = false;
        let mut ui_changed = false;

        if let Some(prev) = &self.previous_values {
            // The lattice only follows the gap on a rebuild
            if self.grid_gap != prev.grid_gap {
                rebuild_needed = true;
                ui_changed = true;
            }

            if self.repulsion_radius != prev.repulsion_radius
                || self.link_distance != prev.link_distance
                || self.evade_radius != prev.evade_radius
                || self.enable_spatial_grid != prev.enable_spatial_grid
                || self.enable_parallel != prev.enable_parallel
                || self.show_debug != prev.show_debug
                || self.paused != prev.paused
            {
                ui_changed = true;
            }
        }

        (rebuild_needed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_grid_gap_range() -> std::ops::RangeInclusive<f32> {
        10.0..=80.0
    }

    pub fn get_link_distance_range() -> std::ops::RangeInclusive<f32> {
        10.0..=150.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        20.0..=400.0
    }
}

/// Timings of the overlay behaviours.
#[derive(Clone, Debug)]
pub struct OverlayTimings {
    pub hack_window: Duration,
    pub required_clicks: u32,
    pub alert_fade: Duration,
    pub success_hold: Duration,
    pub touch_clear: Duration,
    pub first_flicker: Duration,
    pub flicker_hold: Duration,
    pub flicker_interval_ms: (u64, u64),
}

impl Default for OverlayTimings {
    fn default() -> Self {
        Self {
            hack_window: Duration::from_millis(1000),
            required_clicks: 3,
            alert_fade: Duration::from_millis(400),
            success_hold: Duration::from_millis(3000),
            touch_clear: Duration::from_millis(100),
            first_flicker: Duration::from_millis(1000),
            flicker_hold: Duration::from_millis(50),
            flicker_interval_ms: (2000, 5000),
        }
    }
}
