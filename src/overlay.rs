use bevy::prelude::*;
use crate::resources::grid::GridSettings;

/// Immediate-mode twin of the spawned line batch: identical boundary geometry,
/// recomputed from the live settings every frame, nothing persisted. Runs
/// independently of the runtime toggle.
pub fn draw_grid_overlay(mut gizmos: Gizmos, settings: Res<GridSettings>) {
    if !settings.show_debug {
        return;
    }

    let width = settings.width as i32;
    let height = settings.height as i32;
    for x in 0..=width {
        gizmos.line_2d(
            settings.grid_to_world_corner(x, 0).truncate(),
            settings.grid_to_world_corner(x, height).truncate(),
            settings.debug_color,
        );
    }
    for y in 0..=height {
        gizmos.line_2d(
            settings.grid_to_world_corner(0, y).truncate(),
            settings.grid_to_world_corner(width, y).truncate(),
            settings.debug_color,
        );
    }
}
