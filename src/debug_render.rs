use bevy::prelude::*;
use crate::globals::LINE_Z;
use crate::resources::grid::GridSettings;

/// Spawns and owns the persistent grid-line entities, and redraws the gizmo
/// overlay. Both renderers read the same corner math from [`GridSettings`].
pub struct GridOverlayPlugin;

impl Plugin for GridOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridLines>()
            .add_event::<RefreshGrid>()
            .add_systems(Startup, setup_grid_overlay)
            .add_systems(Update, (refresh_grid_lines, crate::overlay::draw_grid_overlay));
    }
}

#[derive(Component)]
pub struct GridLine;

/// Handles of every live line entity, in spawn order (verticals then
/// horizontals). The batch is torn down as a whole before every redraw.
#[derive(Resource, Default)]
pub struct GridLines(pub Vec<Entity>);

/// Parent entity all line entities are spawned under.
#[derive(Resource)]
pub struct GridRoot(pub Entity);

#[derive(Resource)]
pub struct GridLineAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
    /// False when the material came from [`CustomLineMaterial`]; the plugin
    /// only restyles materials it created itself.
    pub owns_material: bool,
}

/// Insert before startup to render lines with your own material instead of
/// the default unlit one.
#[derive(Resource, Clone)]
pub struct CustomLineMaterial(pub Handle<ColorMaterial>);

/// Requests a full clear-and-redraw of the line batch. Settings edits are
/// picked up by change detection on [`GridSettings`] without this.
#[derive(Event, Default)]
pub struct RefreshGrid;

fn setup_grid_overlay(
    mut commands: Commands,
    settings: Res<GridSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    custom: Option<Res<CustomLineMaterial>>,
) {
    let root = commands
        .spawn((Transform::default(), Visibility::default()))
        .id();
    commands.insert_resource(GridRoot(root));

    // One unit rectangle shared by every line, stretched per segment.
    let mesh = meshes.add(Rectangle::new(1.0, 1.0));
    let (material, owns_material) = match custom {
        Some(custom) => (custom.0.clone(), false),
        None => (materials.add(settings.debug_color), true),
    };
    commands.insert_resource(GridLineAssets {
        mesh,
        material,
        owns_material,
    });
}

/// Redraws on any settings change (including the initial add, which covers the
/// on-start draw) or an explicit [`RefreshGrid`] request. Turning the runtime
/// toggle off clears the batch without respawning.
pub fn refresh_grid_lines(
    mut commands: Commands,
    settings: Res<GridSettings>,
    assets: Res<GridLineAssets>,
    root: Res<GridRoot>,
    mut lines: ResMut<GridLines>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut refresh_events: EventReader<RefreshGrid>,
) {
    let requested = !refresh_events.is_empty();
    refresh_events.clear();
    if !settings.is_changed() && !requested {
        return;
    }

    if assets.owns_material {
        if let Some(material) = materials.get_mut(&assets.material) {
            material.color = settings.debug_color;
        }
    }

    if settings.show_runtime_debug {
        debug!(
            "redrawing grid lines for a {}x{} grid",
            settings.width, settings.height
        );
        draw_grid_borders(&mut commands, &settings, &assets, root.0, &mut lines);
    } else {
        clear_grid_lines(&mut commands, &mut lines);
    }
}

/// Tears down the previous batch, then spawns one line per cell boundary:
/// `width + 1` verticals followed by `height + 1` horizontals.
pub fn draw_grid_borders(
    commands: &mut Commands,
    settings: &GridSettings,
    assets: &GridLineAssets,
    root: Entity,
    lines: &mut GridLines,
) {
    clear_grid_lines(commands, lines);

    let width = settings.width as i32;
    let height = settings.height as i32;
    for x in 0..=width {
        let start = settings.grid_to_world_corner(x, 0);
        let end = settings.grid_to_world_corner(x, height);
        lines.0.push(create_line(commands, settings, assets, root, start, end));
    }
    for y in 0..=height {
        let start = settings.grid_to_world_corner(0, y);
        let end = settings.grid_to_world_corner(width, y);
        lines.0.push(create_line(commands, settings, assets, root, start, end));
    }
}

/// Despawns every live line, skipping handles whose entity is already gone.
pub fn clear_grid_lines(commands: &mut Commands, lines: &mut GridLines) {
    for entity in lines.0.drain(..) {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }
}

fn create_line(
    commands: &mut Commands,
    settings: &GridSettings,
    assets: &GridLineAssets,
    root: Entity,
    start: Vec3,
    end: Vec3,
) -> Entity {
    let segment = (end - start).truncate();
    commands
        .spawn((
            GridLine,
            Mesh2d(assets.mesh.clone()),
            MeshMaterial2d(assets.material.clone()),
            Transform {
                translation: start.midpoint(end).with_z(LINE_Z),
                rotation: Quat::from_rotation_z(segment.to_angle()),
                scale: Vec3::new(segment.length(), settings.line_width, 1.0),
            },
            ChildOf(root),
        ))
        .id()
}
