use eframe::egui;

use super::{BACKGROUND, card};
use crate::ScribbleApp;
use crate::command::Command;
use crate::components::mode_chip;
use crate::state::Mode;

const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xE2, 0xB5);
const FREEHAND_TITLE: &str = "Let's make something magical!";
const FREEHAND_BLURB: &str =
    "Pick your favorite colors, swirl your brush, and see what pops into life!";

pub fn header_panel(app: &mut ScribbleApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("header_panel")
        .frame(egui::Frame::none().fill(BACKGROUND).inner_margin(16.0))
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.heading("Scribble Pals");
            ui.add_space(8.0);

            let mode = app.state().mode();
            let can_undo = app.state().can_undo();
            let (title, blurb) = match mode {
                Mode::Freehand => (FREEHAND_TITLE, FREEHAND_BLURB),
                Mode::Puzzle => {
                    let prompt = app.state().prompt();
                    (prompt.title, prompt.encouragement)
                }
            };

            card(HEADER_FILL).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(title).size(22.0).strong());
                ui.label(egui::RichText::new(blurb).size(16.0));
                ui.add_space(12.0);

                ui.horizontal_wrapped(|ui| {
                    if mode_chip(ui, "🖌", "Drawing", mode == Mode::Freehand).clicked() {
                        app.execute(Command::SetMode(Mode::Freehand));
                    }
                    if mode_chip(ui, "✨", "Puzzle", mode == Mode::Puzzle).clicked() {
                        app.execute(Command::SetMode(Mode::Puzzle));
                    }
                    if ui.button("🗑 Clear").clicked() {
                        app.execute(Command::Clear);
                    }
                    if ui
                        .add_enabled(can_undo, egui::Button::new("↶ Undo"))
                        .clicked()
                    {
                        app.execute(Command::Undo);
                    }
                });
            });
        });
}
