use eframe::egui;

use super::{BACKGROUND, card};
use crate::ScribbleApp;
use crate::command::Command;
use crate::components::ColorSwatch;
use crate::palette::{BRUSH_WIDTH_RANGE, PALETTE};
use crate::state::Mode;

const FOOTER_FILL: egui::Color32 = egui::Color32::from_rgb(0xDB, 0xEA, 0xFE);
const BRUSH_FILL: egui::Color32 = egui::Color32::from_rgb(0xDC, 0xFC, 0xE7);

/// Prompt footer (puzzle mode only) and the brush controls below the canvas.
pub fn controls_panel(app: &mut ScribbleApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("controls_panel")
        .frame(egui::Frame::none().fill(BACKGROUND).inner_margin(16.0))
        .show_separator_line(false)
        .show(ctx, |ui| {
            if app.state().mode() == Mode::Puzzle {
                prompt_footer(app, ui);
            } else {
                ui.add_space(12.0);
            }
            ui.add_space(16.0);
            brush_controls(app, ui);
        });
}

fn prompt_footer(app: &mut ScribbleApp, ui: &mut egui::Ui) {
    let hint = app.state().prompt().hint;
    card(FOOTER_FILL).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Can you draw this?").size(18.0).strong());
        ui.label(egui::RichText::new(hint).size(18.0));
        ui.add_space(8.0);
        if ui.button("New Prompt").clicked() {
            app.execute(Command::NextPrompt);
        }
    });
}

fn brush_controls(app: &mut ScribbleApp, ui: &mut egui::Ui) {
    let selected_color = app.state().brush_color();
    let mut width = app.state().brush_width();

    card(BRUSH_FILL).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Pick a color").size(18.0).strong());
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;
                for color in PALETTE {
                    if ColorSwatch::new(color, color == selected_color)
                        .show(ui)
                        .clicked()
                    {
                        app.execute(Command::SelectColor(color));
                    }
                }
            });
        });

        ui.add_space(8.0);
        ui.label(egui::RichText::new("Brush Size").size(18.0).strong());
        if ui
            .add(egui::Slider::new(&mut width, BRUSH_WIDTH_RANGE))
            .changed()
        {
            app.execute(Command::SetBrushWidth(width));
        }
    });
}
