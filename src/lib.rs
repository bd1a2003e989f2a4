/*
 * Neural Mesh - Module Definitions
 *
 * This file defines the module structure for the neural mesh application.
 * The simulation modules (viewport, particle, drone, links, simulation,
 * schedule, interaction) have no window dependency and are driven headlessly
 * in tests; app, input, renderer and ui wire them into nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use debug::DebugInfo;
pub use drone::{Drone, DroneField};
pub use error::MeshError;
pub use interaction::{Interaction, Markers, OverlayClicks};
pub use links::{Link, LinkStrategy};
pub use params::{MeshParams, OverlayTimings};
pub use particle::{Particle, ParticleField};
pub use schedule::{Scheduler, TimerHandle};
pub use simulation::MeshSimulation;
pub use spatial_grid::SpatialGrid;
pub use viewport::Viewport;

// Define modules
pub mod app;
pub mod debug;
pub mod drone;
pub mod error;
pub mod input;
pub mod interaction;
pub mod links;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod schedule;
pub mod simulation;
pub mod spatial_grid;
pub mod ui;
pub mod viewport;

// Constants
pub const WINDOW_TITLE: &str = "Neural Mesh";
// rgb(0, 255, 153)
pub const MESH_COLOR: (f32, f32, f32) = (0.0, 1.0, 0.6);
