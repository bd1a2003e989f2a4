/*
 * Neural Mesh
 *
 * A full-window animated mesh of particles that shy away from the pointer,
 * joined by fading links, with a few polygonal drones drifting across.
 * An egui overlay carries the navigation bar, a flickering headline and a
 * hidden three-click easter egg on the menu toggle.
 *
 * Set RUST_LOG to adjust log output (defaults to info).
 */

use neural_mesh::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model).update(app::update).run();
}
