use bevy::prelude::*;
use bevy_egui::*;
use crate::resources::grid::GridSettings;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        });
        app.add_systems(EguiContextPass, ui_system);
    }
}

fn ui_system(mut contexts: EguiContexts, mut grid_settings: ResMut<GridSettings>) {
    // Mutate through the bypass so the line batch only redraws on an actual
    // edit, not on every frame the window is open.
    let settings = grid_settings.bypass_change_detection();
    let mut changed = false;

    egui::Window::new("Grid Settings").show(contexts.ctx_mut(), |ui| {
        ui.heading("Geometry");
        changed |= ui
            .add(egui::Slider::new(&mut settings.width, 1..=64).text("Width"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut settings.height, 1..=64).text("Height"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut settings.cell_size, 1.0..=200.0).text("Cell Size"))
            .changed();
        ui.horizontal(|ui| {
            ui.label("Origin");
            changed |= ui
                .add(egui::DragValue::new(&mut settings.origin.x).speed(1.0).prefix("x: "))
                .changed();
            changed |= ui
                .add(egui::DragValue::new(&mut settings.origin.y).speed(1.0).prefix("y: "))
                .changed();
        });

        ui.heading("Debug Display");
        // The gizmo overlay is stateless, its toggle needs no redraw.
        ui.checkbox(&mut settings.show_debug, "Gizmo Overlay");
        changed |= ui
            .checkbox(&mut settings.show_runtime_debug, "Runtime Lines")
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut settings.line_width, 0.5..=10.0).text("Line Width"))
            .changed();
        ui.horizontal(|ui| {
            ui.label("Line Color");
            let [r, g, b, a] = settings.debug_color.to_srgba().to_u8_array();
            let mut color = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
            if ui.color_edit_button_srgba(&mut color).changed() {
                settings.debug_color =
                    Color::srgba_u8(color.r(), color.g(), color.b(), color.a());
                changed = true;
            }
        });
    });

    if changed {
        grid_settings.set_changed();
    }
}
