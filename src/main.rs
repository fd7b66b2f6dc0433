mod debug_render;
mod globals;
mod overlay;
mod resources;
mod ui;

use crate::debug_render::GridOverlayPlugin;
use crate::globals::*;
use crate::resources::grid::GridSettings;
use crate::ui::UiPlugin;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::prelude::*;

/// Demo occupant of a single grid cell, placed at the cell's center.
#[derive(Component)]
struct CellMarker {
    cell: IVec2,
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d::default());
}

fn generate_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    grid_settings: Res<GridSettings>,
) {
    let mut rng = rand::rng();

    let mesh = meshes.add(Circle::new(MARKER_SIZE));
    let material = materials.add(Color::srgb(0.9, 0.3, 0.3));

    for _ in 0..NUMBER_MARKERS {
        let cell = IVec2::new(
            rng.random_range(0..grid_settings.width as i32),
            rng.random_range(0..grid_settings.height as i32),
        );
        commands.spawn((
            CellMarker { cell },
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(grid_settings.cell_center(cell)),
        ));
    }
}

/// Left click toggles a marker in the cell under the cursor.
fn toggle_marker_on_click(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    markers: Query<(Entity, &CellMarker)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    grid_settings: Res<GridSettings>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let cell = grid_settings.world_to_grid(world_pos.extend(0.0));
    if !grid_settings.is_valid_cell(cell) {
        debug!("click outside the grid, cell {cell}");
        return;
    }

    if let Some((entity, _)) = markers.iter().find(|(_, marker)| marker.cell == cell) {
        commands.entity(entity).despawn();
        return;
    }
    commands.spawn((
        CellMarker { cell },
        Mesh2d(meshes.add(Circle::new(MARKER_SIZE))),
        MeshMaterial2d(materials.add(Color::srgb(0.9, 0.3, 0.3))),
        Transform::from_translation(grid_settings.cell_center(cell)),
    ));
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(UiPlugin)
        .add_plugins(GridOverlayPlugin)
        .init_resource::<GridSettings>()
        .add_systems(Startup, (setup, generate_markers))
        .add_systems(Update, toggle_marker_on_click)
        .run();
}
