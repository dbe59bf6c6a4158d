use eframe::egui;

use crate::ui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    egui::SidePanel::left("options")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Options");
            ui.separator();

            ui.label("UI Scale");
            if ui
                .add(egui::Slider::new(&mut app.settings.ui_scale, 0.75..=2.0))
                .changed()
            {
                app.settings_dirty = true;
            }

            ui.add_space(8.0);
            ui.label("Typing speed (ms/char)");
            if ui
                .add(egui::Slider::new(
                    &mut app.settings.typing_interval_ms,
                    10..=120,
                ))
                .changed()
            {
                app.settings_dirty = true;
            }

            ui.add_space(8.0);
            ui.label("Server URL");
            if ui
                .text_edit_singleline(&mut app.settings.server_url)
                .changed()
            {
                app.settings_dirty = true;
            }
            ui.small("Applies at next launch.");
        });
}
