use eframe::egui;

use crate::ui::app::{App, Phase};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let mut start_clicked = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        match app.ui.phase {
            Phase::Title => {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.heading("Wizard's Journey");
                    ui.add_space(12.0);
                    if ui.button("Begin your journey").clicked() {
                        start_clicked = true;
                    }
                    draw_notice(ui, app);
                });
            }

            Phase::Starting => {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.spinner();
                });
            }

            Phase::Streaming => {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.spinner();
                    ui.label("Loading story…");
                });
            }

            Phase::Typing | Phase::Choosing => {
                draw_story_text(ui, app, app.ui.phase == Phase::Typing);
                draw_notice(ui, app);
            }

            Phase::GameOver => {
                draw_story_text(ui, app, false);
                ui.add_space(12.0);
                draw_notice(ui, app);
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    if ui.button("Begin a new journey").clicked() {
                        start_clicked = true;
                    }
                });
            }
        }
    });

    if start_clicked {
        app.start_game();
    }
}

fn draw_story_text(ui: &mut egui::Ui, app: &App, follow: bool) {
    egui::ScrollArea::vertical()
        .stick_to_bottom(follow)
        .show(ui, |ui| {
            // Newlines in the story text become line breaks here.
            ui.label(egui::RichText::new(app.story_display()).size(16.0));
        });
}

fn draw_notice(ui: &mut egui::Ui, app: &App) {
    if let Some(notice) = &app.ui.notice {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(notice).weak().italics());
    }
}
