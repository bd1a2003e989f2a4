/*
 * Drone Module
 *
 * This module defines the Drone struct and the DroneField that owns them.
 * Drones are small kite-shaped outlines that drift horizontally, bob up and
 * down, slowly spin, and bolt away from the pointer. They wrap around the
 * left and right edges and reappear at a random height.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::MeshParams;
use crate::viewport::Viewport;
use crate::MESH_COLOR;

#[derive(Clone, Debug, PartialEq)]
pub struct Drone {
    pub position: Vec2,
    pub size: f32,
    pub base_speed: f32,
    pub speed: f32,
    pub rotation: f32,
    pub wobble: f32,
    // +1 travels right, -1 travels left
    pub direction: f32,
}

impl Drone {
    pub fn new(position: Vec2, size: f32, speed: f32, rotation: f32, wobble: f32, direction: f32) -> Self {
        Self {
            position,
            size,
            base_speed: speed,
            speed,
            rotation,
            wobble,
            direction,
        }
    }

    // Spawn a drone with randomized attributes somewhere in the viewport
    pub fn random<R: Rng>(width: f32, height: f32, params: &MeshParams, rng: &mut R) -> Self {
        let (size_low, size_high) = params.drone_size_range;
        let (speed_low, speed_high) = params.drone_speed_range;

        let position = vec2(random_coord(rng, width), random_coord(rng, height));
        let size = rng.gen_range(size_low..size_high);
        let speed = rng.gen_range(speed_low..speed_high);
        let rotation = rng.gen_range(0.0..std::f32::consts::TAU);
        let wobble = rng.gen_range(-params.drone_wobble..params.drone_wobble);
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

        Self::new(position, size, speed, rotation, wobble, direction)
    }

    // Update the drone for one frame
    pub fn update<R: Rng>(&mut self, frame: u64, viewport: &Viewport, params: &MeshParams, rng: &mut R) {
        self.rotation += self.wobble * 0.01;
        self.position.x += self.speed * self.direction;
        self.position.y += (frame as f32 * 0.03 + self.position.x * 0.005).sin() * 0.2;

        self.evade(viewport.pointer, params);
        self.wrap_edges(viewport, rng);
    }

    // Steer away from the pointer and boost while doing so
    pub fn evade(&mut self, pointer: Option<Vec2>, params: &MeshParams) {
        let evading = match pointer {
            Some(target) => {
                let delta = target - self.position;
                let distance = delta.length();

                if distance < params.evade_radius && distance > 0.0 {
                    let strength = params.evade_force * (params.evade_radius - distance);
                    self.position -= delta / distance * strength;
                    true
                } else {
                    false
                }
            }
            None => false,
        };

        self.speed = if evading {
            self.base_speed * params.evade_boost
        } else {
            self.base_speed
        };
    }

    // Reappear on the opposite edge at a random height
    pub fn wrap_edges<R: Rng>(&mut self, viewport: &Viewport, rng: &mut R) {
        let width = viewport.width_f();
        let margin = self.size * 2.0;

        if self.direction > 0.0 && self.position.x > width + margin {
            self.position.x = -margin;
            self.position.y = random_coord(rng, viewport.height_f());
        } else if self.direction < 0.0 && self.position.x < -margin {
            self.position.x = width + margin;
            self.position.y = random_coord(rng, viewport.height_f());
        }
    }

    /// Kite outline in screen space: nose, right, tail, left.
    pub fn hull(&self) -> [Vec2; 4] {
        let s = self.size;
        [vec2(0.0, -s * 1.5), vec2(s, 0.0), vec2(0.0, s * 1.5), vec2(-s, 0.0)]
            .map(|local| self.to_screen(local))
    }

    pub fn glow_center(&self) -> Vec2 {
        self.to_screen(vec2(0.0, self.size * 1.6))
    }

    pub fn glow_radius(&self) -> f32 {
        self.size * 0.4
    }

    pub fn glow_alpha(frame: u64) -> f32 {
        0.1 + (frame as f32 * 0.1).sin() * 0.05
    }

    // Rotate a local offset (y down, clockwise positive) and move it to the drone
    fn to_screen(&self, local: Vec2) -> Vec2 {
        let (sin, cos) = self.rotation.sin_cos();
        self.position + vec2(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
    }

    // Draw the drone
    pub fn draw(&self, draw: &Draw, viewport: &Viewport, frame: u64) {
        let (r, g, b) = MESH_COLOR;
        let points = self.hull().map(|p| viewport.screen_to_window(p));

        draw.polygon()
            .color(rgba(r, g, b, 0.1))
            .stroke(rgba(r, g, b, 0.4))
            .stroke_weight(1.0)
            .points(points);

        draw.ellipse()
            .xy(viewport.screen_to_window(self.glow_center()))
            .radius(self.glow_radius())
            .color(rgba(r, g, b, Self::glow_alpha(frame)));
    }
}

/// The set of drones for the current viewport.
#[derive(Clone, Debug, Default)]
pub struct DroneField {
    pub drones: Vec<Drone>,
}

impl DroneField {
    /// Discard every drone and spawn a fresh set sized to the viewport width.
    pub fn initialize<R: Rng>(&mut self, width: u32, height: u32, params: &MeshParams, rng: &mut R) {
        self.drones.clear();

        let count = drone_count(width, params.drone_spacing);
        for _ in 0..count {
            self.drones.push(Drone::random(width as f32, height as f32, params, rng));
        }
    }

    /// Update every drone for one frame.
    pub fn advance<R: Rng>(&mut self, frame: u64, viewport: &Viewport, params: &MeshParams, rng: &mut R) {
        for drone in &mut self.drones {
            drone.update(frame, viewport, params, rng);
        }
    }

    pub fn len(&self) -> usize {
        self.drones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drones.is_empty()
    }
}

// One drone per `spacing` pixels of width, plus one
pub fn drone_count(width: u32, spacing: f32) -> usize {
    (width as f32 / spacing).floor() as usize + 1
}

// Uniform in [0, extent), or 0 for an empty extent
fn random_coord<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still_drone(x: f32, y: f32, direction: f32) -> Drone {
        Drone::new(vec2(x, y), 10.0, 0.8, 0.0, 0.0, direction)
    }

    #[test]
    fn count_follows_width() {
        assert_eq!(drone_count(0, 300.0), 1);
        assert_eq!(drone_count(299, 300.0), 1);
        assert_eq!(drone_count(300, 300.0), 2);
        assert_eq!(drone_count(1920, 300.0), 7);
    }

    #[test]
    fn spawned_attributes_in_range() {
        let params = MeshParams::default();
        let mut field = DroneField::default();
        field.initialize(1200, 800, &params, &mut StdRng::seed_from_u64(3));

        assert_eq!(field.len(), 5);
        for drone in &field.drones {
            assert!((10.0..18.0).contains(&drone.size));
            assert!((0.5..1.0).contains(&drone.base_speed));
            assert_eq!(drone.speed, drone.base_speed);
            assert!((-0.05..0.05).contains(&drone.wobble));
            assert!(drone.direction == 1.0 || drone.direction == -1.0);
            assert!((0.0..1200.0).contains(&drone.position.x));
            assert!((0.0..800.0).contains(&drone.position.y));
        }
    }

    #[test]
    fn evasion_boosts_and_pushes_away() {
        let params = MeshParams::default();
        let mut drone = still_drone(100.0, 100.0, 1.0);
        drone.evade(Some(vec2(150.0, 100.0)), &params);

        assert_eq!(drone.speed, drone.base_speed * 1.5);
        // 0.02 * (200 - 50) = 3
        assert!((drone.position.x - 97.0).abs() < 1e-4);
    }

    #[test]
    fn speed_reverts_outside_radius() {
        let params = MeshParams::default();
        let mut drone = still_drone(100.0, 100.0, 1.0);
        drone.evade(Some(vec2(120.0, 100.0)), &params);
        drone.evade(Some(vec2(500.0, 100.0)), &params);
        assert_eq!(drone.speed, drone.base_speed);

        drone.evade(Some(vec2(120.0, 100.0)), &params);
        drone.evade(None, &params);
        assert_eq!(drone.speed, drone.base_speed);
    }

    #[test]
    fn pointer_on_drone_is_no_force() {
        let params = MeshParams::default();
        let mut drone = still_drone(100.0, 100.0, 1.0);
        drone.evade(Some(vec2(100.0, 100.0)), &params);
        assert_eq!(drone.position, vec2(100.0, 100.0));
        assert_eq!(drone.speed, drone.base_speed);
    }

    #[test]
    fn rightward_drone_wraps_to_left() {
        let viewport = Viewport::new(800, 600);
        let mut rng = StdRng::seed_from_u64(9);
        let mut drone = still_drone(821.0, 50.0, 1.0);
        drone.wrap_edges(&viewport, &mut rng);
        assert_eq!(drone.position.x, -20.0);
        assert!((0.0..600.0).contains(&drone.position.y));
    }

    #[test]
    fn leftward_drone_wraps_to_right() {
        let viewport = Viewport::new(800, 600);
        let mut rng = StdRng::seed_from_u64(9);
        let mut drone = still_drone(-21.0, 50.0, -1.0);
        drone.wrap_edges(&viewport, &mut rng);
        assert_eq!(drone.position.x, 820.0);

        // a rightward drone past the left edge is left alone
        let mut drone = still_drone(-21.0, 50.0, 1.0);
        drone.wrap_edges(&viewport, &mut rng);
        assert_eq!(drone.position.x, -21.0);
    }

    #[test]
    fn update_spins_and_advances() {
        let params = MeshParams::default();
        let viewport = Viewport::new(800, 600);
        let mut rng = StdRng::seed_from_u64(1);
        let mut drone = Drone::new(vec2(100.0, 100.0), 12.0, 0.6, 1.0, 0.04, -1.0);
        drone.update(0, &viewport, &params, &mut rng);

        assert!((drone.rotation - 1.0004).abs() < 1e-6);
        assert!((drone.position.x - 99.4).abs() < 1e-4);
        let expected_y = 100.0 + (99.4f32 * 0.005).sin() * 0.2;
        assert!((drone.position.y - expected_y).abs() < 1e-4);
    }

    #[test]
    fn hull_is_a_kite_around_position() {
        let drone = still_drone(50.0, 60.0, 1.0);
        let hull = drone.hull();
        assert_eq!(hull[0], vec2(50.0, 45.0));
        assert_eq!(hull[1], vec2(60.0, 60.0));
        assert_eq!(hull[2], vec2(50.0, 75.0));
        assert_eq!(hull[3], vec2(40.0, 60.0));
        assert_eq!(drone.glow_center(), vec2(50.0, 76.0));
    }

    #[test]
    fn glow_pulses_around_base_alpha() {
        for frame in 0..100 {
            let alpha = Drone::glow_alpha(frame);
            assert!((0.05..=0.15).contains(&alpha));
        }
    }
}
