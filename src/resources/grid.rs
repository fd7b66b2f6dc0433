use bevy::prelude::*;
use crate::globals::*;

/// Grid geometry plus debug-display settings. Invariants: `width > 0`,
/// `height > 0`, `cell_size > 0` (the UI slider ranges enforce them).
#[derive(Resource, Clone)]
pub struct GridSettings {
    pub width: u32,
    pub height: u32,
    pub cell_size: f32,
    /// World position of the corner of cell (0, 0).
    pub origin: Vec3,
    /// Immediate-mode gizmo overlay.
    pub show_debug: bool,
    /// Persistent line entities.
    pub show_runtime_debug: bool,
    pub debug_color: Color,
    pub line_width: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            origin: Vec3::new(
                -(GRID_WIDTH as f32 * CELL_SIZE) / 2.0,
                -(GRID_HEIGHT as f32 * CELL_SIZE) / 2.0,
                0.0,
            ),
            show_debug: false,
            show_runtime_debug: true,
            debug_color: LINE_COLOR,
            line_width: LINE_WIDTH,
        }
    }
}

impl GridSettings {
    /// Cell containing a world position. Floor, not truncation, so positions
    /// below the origin map to negative indices instead of collapsing onto
    /// cell 0. The result is not bounds-checked.
    pub fn world_to_grid(&self, world: Vec3) -> IVec2 {
        let local = world - self.origin;
        IVec2::new(
            (local.x / self.cell_size).floor() as i32,
            (local.y / self.cell_size).floor() as i32,
        )
    }

    /// World position of the geometric center of a cell.
    pub fn grid_to_world_center(&self, x: i32, y: i32) -> Vec3 {
        self.origin
            + Vec3::new(
                x as f32 * self.cell_size + self.cell_size / 2.0,
                y as f32 * self.cell_size + self.cell_size / 2.0,
                0.0,
            )
    }

    /// World position of a cell's minimum-x/minimum-y corner.
    pub fn grid_to_world_corner(&self, x: i32, y: i32) -> Vec3 {
        self.origin
            + Vec3::new(
                x as f32 * self.cell_size,
                y as f32 * self.cell_size,
                0.0,
            )
    }

    pub fn is_valid_grid_position(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    pub fn cell_center(&self, cell: IVec2) -> Vec3 {
        self.grid_to_world_center(cell.x, cell.y)
    }

    pub fn is_valid_cell(&self, cell: IVec2) -> bool {
        self.is_valid_grid_position(cell.x, cell.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: u32, height: u32, cell_size: f32, origin: Vec3) -> GridSettings {
        GridSettings {
            width,
            height,
            cell_size,
            origin,
            ..Default::default()
        }
    }

    #[test]
    fn center_round_trips_through_world_to_grid() {
        let g = grid(7, 5, 2.5, Vec3::new(-3.0, 4.0, 0.0));
        for x in 0..7 {
            for y in 0..5 {
                let center = g.grid_to_world_center(x, y);
                assert_eq!(g.world_to_grid(center), IVec2::new(x, y));
            }
        }
    }

    #[test]
    fn center_is_half_a_cell_from_corner() {
        let g = grid(4, 4, 3.0, Vec3::new(10.0, -2.0, 0.0));
        for (x, y) in [(0, 0), (2, 3), (-1, -4), (7, 1)] {
            let delta = g.grid_to_world_center(x, y) - g.grid_to_world_corner(x, y);
            assert_eq!(delta, Vec3::new(1.5, 1.5, 0.0));
        }
    }

    #[test]
    fn validity_matches_bounds() {
        let g = grid(3, 2, 1.0, Vec3::ZERO);
        assert!(g.is_valid_grid_position(0, 0));
        assert!(g.is_valid_grid_position(2, 1));
        assert!(!g.is_valid_grid_position(3, 0));
        assert!(!g.is_valid_grid_position(0, 2));
        assert!(!g.is_valid_grid_position(-1, 0));
        assert!(!g.is_valid_grid_position(0, -1));
        assert!(!g.is_valid_grid_position(i32::MIN, i32::MIN));
        assert!(g.is_valid_cell(IVec2::new(1, 1)));
        assert!(!g.is_valid_cell(IVec2::new(1, 5)));
    }

    #[test]
    fn world_to_grid_floors_negative_offsets() {
        let g = grid(3, 3, 1.0, Vec3::ZERO);
        assert_eq!(g.world_to_grid(Vec3::new(-0.5, -0.5, 0.0)), IVec2::new(-1, -1));
        assert_eq!(g.world_to_grid(Vec3::new(-0.1, 0.1, 0.0)), IVec2::new(-1, 0));
        assert_eq!(g.world_to_grid(Vec3::new(0.9, 1.0, 0.0)), IVec2::new(0, 1));
    }

    #[test]
    fn unit_grid_scenario() {
        let g = grid(3, 2, 1.0, Vec3::ZERO);
        assert_eq!(g.grid_to_world_center(1, 1), Vec3::new(1.5, 1.5, 0.0));
        assert_eq!(g.cell_center(IVec2::new(1, 1)), Vec3::new(1.5, 1.5, 0.0));
        assert!(!g.is_valid_grid_position(3, 0));
        assert!(g.is_valid_grid_position(2, 1));
    }

    #[test]
    fn origin_offsets_every_conversion() {
        let origin = Vec3::new(100.0, -50.0, 0.0);
        let g = grid(2, 2, 4.0, origin);
        assert_eq!(g.grid_to_world_corner(0, 0), origin);
        assert_eq!(g.grid_to_world_corner(1, 1), origin + Vec3::new(4.0, 4.0, 0.0));
        assert_eq!(g.world_to_grid(origin + Vec3::new(0.1, 0.1, 0.0)), IVec2::ZERO);
        assert_eq!(g.world_to_grid(origin - Vec3::new(0.1, 0.1, 0.0)), IVec2::NEG_ONE);
    }
}
