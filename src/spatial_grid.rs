/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct for efficient neighbor lookups.
 * It divides the viewport into square cells at least as wide as the query
 * radius, so every neighbor of a point lives in the 3x3 block of cells
 * around it.
 *
 * Points outside the viewport (particles drifting past the edges, or pushed
 * off-screen by the pointer) are clamped into the border cells. Clamping is
 * monotonic, so two points closer than one cell still land in adjacent or
 * identical cells.
 */

use nannou::prelude::*;

pub struct SpatialGrid {
    pub cell_size: f32,
    pub grid: Vec<Vec<usize>>,
    pub columns: usize,
    pub rows: usize,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, width: f32, height: f32) -> Self {
        let columns = ((width / cell_size).ceil() as usize).max(1);
        let rows = ((height / cell_size).ceil() as usize).max(1);

        Self {
            cell_size,
            grid: vec![Vec::new(); columns * rows],
            columns,
            rows,
        }
    }

    // Build a grid and fill it with every position in one go
    pub fn from_positions(cell_size: f32, width: f32, height: f32, positions: &[Vec2]) -> Self {
        let mut grid = Self::new(cell_size, width, height);
        for (i, &position) in positions.iter().enumerate() {
            grid.insert(i, position);
        }
        grid
    }

    #[inline]
    fn cell_coords(&self, pos: Vec2) -> (isize, isize) {
        let max_x = self.columns as isize - 1;
        let max_y = self.rows as isize - 1;
        let x = (pos.x / self.cell_size).floor() as isize;
        let y = (pos.y / self.cell_size).floor() as isize;
        (x.clamp(0, max_x), y.clamp(0, max_y))
    }

    // Convert screen coordinates to grid cell index
    #[inline]
    pub fn pos_to_cell_index(&self, pos: Vec2) -> usize {
        let (x, y) = self.cell_coords(pos);
        y as usize * self.columns + x as usize
    }

    // Insert a point into the grid
    #[inline]
    pub fn insert(&mut self, index: usize, position: Vec2) {
        let cell_index = self.pos_to_cell_index(position);
        self.grid[cell_index].push(index);
    }

    // Get indices within and adjacent to the cell containing the given position
    pub fn get_nearby_indices(&self, position: Vec2) -> Vec<usize> {
        let (grid_x, grid_y) = self.cell_coords(position);
        let mut result = Vec::new();

        for y_offset in -1..=1 {
            let check_y = grid_y + y_offset;
            if check_y < 0 || check_y >= self.rows as isize {
                continue;
            }

            let y_index = check_y as usize * self.columns;

            for x_offset in -1..=1 {
                let check_x = grid_x + x_offset;
                if check_x < 0 || check_x >= self.columns as isize {
                    continue;
                }

                result.extend_from_slice(&self.grid[y_index + check_x as usize]);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_cover_viewport() {
        let grid = SpatialGrid::new(60.0, 800.0, 600.0);
        assert_eq!((grid.columns, grid.rows), (14, 10));
        assert_eq!(grid.grid.len(), 140);
    }

    #[test]
    fn degenerate_viewport_keeps_one_cell() {
        let grid = SpatialGrid::new(60.0, 0.0, 0.0);
        assert_eq!((grid.columns, grid.rows), (1, 1));
    }

    #[test]
    fn off_screen_points_clamp_to_border() {
        let grid = SpatialGrid::new(60.0, 800.0, 600.0);
        assert_eq!(grid.pos_to_cell_index(vec2(-35.0, 10.0)), 0);
        assert_eq!(grid.pos_to_cell_index(vec2(5000.0, 5000.0)), 139);
    }

    #[test]
    fn nearby_includes_adjacent_cells_only() {
        let positions = [vec2(10.0, 10.0), vec2(70.0, 10.0), vec2(190.0, 10.0)];
        let grid = SpatialGrid::from_positions(60.0, 800.0, 600.0, &positions);

        let mut nearby = grid.get_nearby_indices(vec2(10.0, 10.0));
        nearby.sort_unstable();
        assert_eq!(nearby, vec![0, 1]);
    }
}
