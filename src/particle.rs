/*
 * Particle Module
 *
 * This module defines the Particle struct and the ParticleField that owns
 * the lattice of mesh points. Each particle follows three rules every frame:
 * 1. Repulsion: get pushed away from a nearby pointer (desktop layout only)
 * 2. Return: ease back toward its anchor when not being pushed
 * 3. Drift: creep rightward and wrap back in from the left edge
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::MeshParams;
use crate::viewport::Viewport;
use crate::MESH_COLOR;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub anchor: Vec2,
    pub radius: f32,
    pub density: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, radius: f32, density: f32) -> Self {
        Self {
            position: vec2(x, y),
            anchor: vec2(x, y),
            radius,
            density,
        }
    }

    /// Advance one frame. `pointer` is only `Some` when the field is
    /// pointer-driven, i.e. desktop layout with an active pointer.
    pub fn update(&mut self, pointer: Option<Vec2>, width: f32, params: &MeshParams) {
        let mut repelled = false;

        if let Some(target) = pointer {
            let delta = target - self.position;
            let distance = delta.length();

            if distance < params.repulsion_radius {
                repelled = true;

                // A particle sitting on the pointer has no direction to flee in
                if distance > 0.0 {
                    let force = (params.repulsion_radius - distance) / params.repulsion_radius;
                    let push = delta / distance * force * self.density;
                    self.position -= push * params.repulsion_damping;
                }
            }
        }

        if !repelled {
            self.return_to_anchor(params.return_divisor);
        }

        self.position.x += params.drift_speed;

        // Wrap to just off the left edge, anchor included
        if self.position.x > width + params.wrap_margin {
            self.position.x = -params.wrap_margin;
            self.anchor.x = -params.wrap_margin;
        }
    }

    // Close 1/divisor of the remaining offset on each axis
    fn return_to_anchor(&mut self, divisor: f32) {
        if self.position.x != self.anchor.x {
            self.position.x -= (self.position.x - self.anchor.x) / divisor;
        }
        if self.position.y != self.anchor.y {
            self.position.y -= (self.position.y - self.anchor.y) / divisor;
        }
    }

    // Radius flickers with time and horizontal position
    pub fn dynamic_radius(&self, frame: u64) -> f32 {
        self.radius + (frame as f32 * 0.08 + self.position.x * 0.01).sin() * 0.5
    }

    // Draw the particle
    pub fn draw(&self, draw: &Draw, viewport: &Viewport, frame: u64) {
        let (r, g, b) = MESH_COLOR;
        draw.ellipse()
            .xy(viewport.screen_to_window(self.position))
            .radius(self.dynamic_radius(frame))
            .color(rgba(r, g, b, 1.0));
    }
}

/// The full lattice of particles covering the viewport.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Discard every particle and lay out a fresh lattice over
    /// `[0, width) x [0, height)`, column by column.
    pub fn initialize<R: Rng>(&mut self, width: u32, height: u32, params: &MeshParams, rng: &mut R) {
        self.particles.clear();

        let gap = params.grid_gap;
        let (low, high) = params.density_range;
        let (columns, rows) = lattice_dimensions(width, height, gap);
        self.particles.reserve(columns * rows);

        for column in 0..columns {
            let x = column as f32 * gap;
            for row in 0..rows {
                let y = row as f32 * gap;
                let density = rng.gen_range(low..high);
                self.particles.push(Particle::new(x, y, params.particle_radius, density));
            }
        }
    }

    /// Update every particle for one frame.
    pub fn advance(&mut self, viewport: &Viewport, params: &MeshParams) {
        let pointer = if params.is_mobile(viewport.width) {
            None
        } else {
            viewport.pointer
        };
        let width = viewport.width_f();

        for particle in &mut self.particles {
            particle.update(pointer, width, params);
        }
    }

    pub fn positions(&self) -> Vec<Vec2> {
        self.particles.iter().map(|p| p.position).collect()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Number of lattice columns and rows: the count of multiples of `gap`
/// strictly below each dimension.
pub fn lattice_dimensions(width: u32, height: u32, gap: f32) -> (usize, usize) {
    (steps_below(width as f32, gap), steps_below(height as f32, gap))
}

fn steps_below(extent: f32, gap: f32) -> usize {
    if extent <= 0.0 {
        return 0;
    }
    (extent / gap).ceil() as usize
}
