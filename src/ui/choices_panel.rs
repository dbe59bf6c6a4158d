use eframe::egui;

use crate::ui::app::{App, Phase};

/// One button per server-provided choice, in server order. Only visible
/// while the app is waiting on the player, which is what keeps story
/// cycles single-flight from the UI side.
pub fn draw(ctx: &egui::Context, app: &mut App) {
    if app.ui.phase != Phase::Choosing || app.ui.choices.is_empty() {
        return;
    }

    let mut clicked: Option<usize> = None;

    egui::TopBottomPanel::bottom("choices").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.label("What do you do?");
        ui.horizontal_wrapped(|ui| {
            for (index, label) in app.ui.choices.iter().enumerate() {
                if ui.button(label).clicked() {
                    clicked = Some(index);
                }
            }
        });
        ui.add_space(6.0);
    });

    if let Some(index) = clicked {
        app.choose(index);
    }
}
