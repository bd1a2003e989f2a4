/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and mesh statistics to be displayed in the controls window.
 */

use std::time::Duration;

use crate::simulation::MeshSimulation;

// Debug information to display
#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub frame: u64,
    pub particle_count: usize,
    pub drone_count: usize,
    pub link_count: usize,
    pub pending_timers: usize,
}

impl DebugInfo {
    // Copy the counters out of the simulation after a tick
    pub fn refresh(&mut self, simulation: &MeshSimulation) {
        self.frame = simulation.frame;
        self.particle_count = simulation.particles.len();
        self.drone_count = simulation.drones.len();
        self.link_count = simulation.links.len();
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MeshParams;

    #[test]
    fn refresh_copies_counts() {
        let params = MeshParams::default();
        let mut simulation = MeshSimulation::with_seed(300, 100, &params, 4).unwrap();
        simulation.tick(&params);

        let mut info = DebugInfo::default();
        info.refresh(&simulation);
        assert_eq!(info.frame, 1);
        assert_eq!(info.particle_count, 12 * 4);
        assert_eq!(info.drone_count, 2);
        assert_eq!(info.link_count, simulation.links.len());
    }

    #[test]
    fn frame_time_in_milliseconds() {
        let info = DebugInfo {
            frame_time: Duration::from_micros(16_500),
            ..DebugInfo::default()
        };
        assert!((info.frame_time_ms() - 16.5).abs() < 1e-9);
    }
}
