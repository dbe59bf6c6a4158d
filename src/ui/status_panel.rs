use egui::Color32;

use crate::model::wizard::HealthBand;
use crate::ui::app::UiState;

/// Health bar banding colors, matching the classic traffic-light scheme.
fn band_color(band: HealthBand) -> Color32 {
    match band {
        HealthBand::Success => Color32::from_rgb(0x4c, 0xaf, 0x50),
        HealthBand::Warning => Color32::from_rgb(0xff, 0x98, 0x00),
        HealthBand::Danger => Color32::from_rgb(0xf4, 0x43, 0x36),
    }
}

/// Name and health bar. Hidden until the first complete status arrives;
/// incomplete payloads never reach the UI, so the panel keeps whatever it
/// showed last.
pub fn draw(ctx: &egui::Context, ui_state: &UiState) {
    let Some(status) = &ui_state.status else {
        return;
    };

    egui::TopBottomPanel::top("wizard_status").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading(&status.name);
            ui.label(format!("{} / 100", status.display_health()));
        });

        let fraction = status.display_health() as f32 / 100.0;
        ui.add(egui::ProgressBar::new(fraction).fill(band_color(status.band())));
        ui.add_space(4.0);
    });
}
