use bevy::prelude::*;

pub const GRID_WIDTH: u32 = 10;
pub const GRID_HEIGHT: u32 = 10;
pub const CELL_SIZE: f32 = 50.0;
pub const LINE_WIDTH: f32 = 2.0;
pub const LINE_COLOR: Color = Color::srgb(0.0, 0.9, 0.2);
// Lines sit above the rest of the scene.
pub const LINE_Z: f32 = 100.0;
pub const MARKER_SIZE: f32 = 12.0;
pub const NUMBER_MARKERS: usize = 8;
