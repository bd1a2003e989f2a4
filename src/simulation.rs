/*
 * Simulation Module
 *
 * The explicit simulation context: viewport, particle lattice, drones, the
 * links discovered this frame and the frame counter. Nothing here touches a
 * window, so the whole frame loop can be driven from tests.
 *
 * One tick, in order:
 * 1. bump the frame counter
 * 2. discover links from the positions before this frame's update
 * 3. advance every particle
 * 4. advance every drone
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::drone::DroneField;
use crate::error::MeshError;
use crate::links::{find_links, Link, LinkStrategy};
use crate::params::MeshParams;
use crate::particle::ParticleField;
use crate::viewport::Viewport;

pub struct MeshSimulation {
    pub viewport: Viewport,
    pub particles: ParticleField,
    pub drones: DroneField,
    pub links: Vec<Link>,
    pub frame: u64,
    rng: StdRng,
}

impl MeshSimulation {
    pub fn new(width: u32, height: u32, params: &MeshParams) -> Result<Self, MeshError> {
        Self::with_rng(width, height, params, StdRng::from_entropy())
    }

    // Deterministic construction for tests and benchmarks
    pub fn with_seed(width: u32, height: u32, params: &MeshParams, seed: u64) -> Result<Self, MeshError> {
        Self::with_rng(width, height, params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: u32, height: u32, params: &MeshParams, rng: StdRng) -> Result<Self, MeshError> {
        params.validate()?;

        let mut simulation = Self {
            viewport: Viewport::new(width, height),
            particles: ParticleField::default(),
            drones: DroneField::default(),
            links: Vec::new(),
            frame: 0,
            rng,
        };
        simulation.rebuild(params);
        Ok(simulation)
    }

    /// Store the new size and rebuild every actor from scratch.
    pub fn resize(&mut self, width: u32, height: u32, params: &MeshParams) {
        self.viewport.resize(width, height);
        self.rebuild(params);
    }

    // Throw away all actors and lay out new ones for the current viewport
    pub fn rebuild(&mut self, params: &MeshParams) {
        let (width, height) = (self.viewport.width, self.viewport.height);
        self.particles.initialize(width, height, params, &mut self.rng);
        self.drones.initialize(width, height, params, &mut self.rng);
        self.links.clear();

        log::info!(
            "mesh rebuilt for {}x{}: {} particles, {} drones",
            width,
            height,
            self.particles.len(),
            self.drones.len()
        );
    }

    /// Run one frame of the animation.
    pub fn tick(&mut self, params: &MeshParams) {
        if params.paused {
            return;
        }

        self.frame += 1;

        let positions = self.particles.positions();
        let size = vec2(self.viewport.width_f(), self.viewport.height_f());
        self.links = find_links(&positions, size, params, LinkStrategy::from_params(params));

        self.particles.advance(&self.viewport, params);
        self.drones.advance(self.frame, &self.viewport, params, &mut self.rng);

        log::trace!(
            "frame {}: {} links, pointer {:?}",
            self.frame,
            self.links.len(),
            self.viewport.pointer
        );
    }
}
