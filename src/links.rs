/*
 * Links Module
 *
 * Finds every unordered pair of particles closer than the link distance and
 * gives each pair an opacity that fades linearly to zero at that distance.
 *
 * Three strategies produce the same ordered result (ascending index pairs):
 * - brute force over all pairs, the reference O(n^2) pass
 * - a uniform spatial grid with cells one link distance wide
 * - the grid search spread across threads with rayon
 */

use nannou::prelude::*;
use rayon::prelude::*;

use crate::params::MeshParams;
use crate::spatial_grid::SpatialGrid;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub start: Vec2,
    pub end: Vec2,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStrategy {
    BruteForce,
    Grid,
    ParallelGrid,
}

impl LinkStrategy {
    pub fn from_params(params: &MeshParams) -> Self {
        match (params.enable_spatial_grid, params.enable_parallel) {
            (false, _) => LinkStrategy::BruteForce,
            (true, false) => LinkStrategy::Grid,
            (true, true) => LinkStrategy::ParallelGrid,
        }
    }
}

// Opacity for a pair at the given distance, None when too far apart
#[inline]
pub fn link_alpha(distance: f32, max_distance: f32, max_alpha: f32) -> Option<f32> {
    if distance < max_distance {
        Some(max_alpha - (distance / max_distance) * max_alpha)
    } else {
        None
    }
}

#[inline]
fn link_between(a: usize, b: usize, positions: &[Vec2], max_distance: f32, max_alpha: f32) -> Option<Link> {
    let start = positions[a];
    let end = positions[b];
    link_alpha(start.distance(end), max_distance, max_alpha).map(|alpha| Link {
        a,
        b,
        start,
        end,
        alpha,
    })
}

/// Discover all links among `positions` with the chosen strategy.
pub fn find_links(
    positions: &[Vec2],
    viewport_size: Vec2,
    params: &MeshParams,
    strategy: LinkStrategy,
) -> Vec<Link> {
    let max_distance = params.link_distance;
    let max_alpha = params.link_max_alpha;

    match strategy {
        LinkStrategy::BruteForce => find_links_brute_force(positions, max_distance, max_alpha),
        LinkStrategy::Grid => {
            let grid = SpatialGrid::from_positions(max_distance, viewport_size.x, viewport_size.y, positions);
            (0..positions.len())
                .flat_map(|a| links_from(a, positions, &grid, max_distance, max_alpha))
                .collect()
        }
        LinkStrategy::ParallelGrid => {
            let grid = SpatialGrid::from_positions(max_distance, viewport_size.x, viewport_size.y, positions);
            // Indexed collect keeps the per-particle chunks in order
            let chunks: Vec<Vec<Link>> = (0..positions.len())
                .into_par_iter()
                .map(|a| links_from(a, positions, &grid, max_distance, max_alpha))
                .collect();
            chunks.into_iter().flatten().collect()
        }
    }
}

pub fn find_links_brute_force(positions: &[Vec2], max_distance: f32, max_alpha: f32) -> Vec<Link> {
    let mut links = Vec::new();
    for a in 0..positions.len() {
        for b in (a + 1)..positions.len() {
            if let Some(link) = link_between(a, b, positions, max_distance, max_alpha) {
                links.push(link);
            }
        }
    }
    links
}

// Links from particle `a` to every higher-indexed neighbor
fn links_from(a: usize, positions: &[Vec2], grid: &SpatialGrid, max_distance: f32, max_alpha: f32) -> Vec<Link> {
    let mut neighbors: Vec<usize> = grid
        .get_nearby_indices(positions[a])
        .into_iter()
        .filter(|&b| b > a)
        .collect();
    neighbors.sort_unstable();

    neighbors
        .into_iter()
        .filter_map(|b| link_between(a, b, positions, max_distance, max_alpha))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn alpha_fades_to_zero_at_threshold() {
        assert_eq!(link_alpha(0.0, 60.0, 0.5), Some(0.5));
        assert_eq!(link_alpha(30.0, 60.0, 0.5), Some(0.25));
        assert_eq!(link_alpha(60.0, 60.0, 0.5), None);
        assert_eq!(link_alpha(75.0, 60.0, 0.5), None);
    }

    #[test]
    fn brute_force_skips_self_pairs() {
        let positions = [vec2(0.0, 0.0), vec2(25.0, 0.0), vec2(100.0, 0.0)];
        let links = find_links_brute_force(&positions, 60.0, 0.5);
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
    }

    #[test]
    fn lattice_neighbors_are_linked() {
        // diagonal steps of 35.4 link, the double step of 70.7 does not
        let positions = [vec2(0.0, 0.0), vec2(25.0, 25.0), vec2(50.0, 50.0)];
        let links = find_links_brute_force(&positions, 60.0, 0.5);
        let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn strategies_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        let params = MeshParams::default();
        let positions: Vec<Vec2> = (0..400)
            .map(|_| vec2(rng.gen_range(-100.0..900.0), rng.gen_range(-100.0..700.0)))
            .collect();
        let size = vec2(800.0, 600.0);

        let brute = find_links(&positions, size, &params, LinkStrategy::BruteForce);

        let grid = find_links(&positions, size, &params, LinkStrategy::Grid);
        let parallel = find_links(&positions, size, &params, LinkStrategy::ParallelGrid);

        assert!(!brute.is_empty());
        assert_eq!(brute, grid);
        assert_eq!(brute, parallel);
    }

    #[test]
    fn strategy_follows_params() {
        let mut params = MeshParams::default();
        params.enable_spatial_grid = false;
        assert_eq!(LinkStrategy::from_params(&params), LinkStrategy::BruteForce);
        params.enable_spatial_grid = true;
        params.enable_parallel = true;
        assert_eq!(LinkStrategy::from_params(&params), LinkStrategy::ParallelGrid);
    }
}
