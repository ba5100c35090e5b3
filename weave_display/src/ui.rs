// ui.rs - egui front end: controls, canvas painting and input wiring

use eframe::egui;
use egui::{Align2, FontId, Key, Painter, Sense, Vec2};
use punch_card::PRESETS;

use crate::app::{Command, WeaveApp};
use crate::swatch::{self, LABEL_SIZE, Mark};

impl eframe::App for WeaveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Export shortcuts, unless the text field is taking keys
        if !ctx.wants_keyboard_input() {
            let (png, json) = ctx.input(|i| {
                (
                    i.modifiers.shift && i.key_pressed(Key::S),
                    i.modifiers.shift && i.key_pressed(Key::J),
                )
            });
            if png {
                self.apply(Command::ExportPng);
            }
            if json {
                self.apply(Command::ExportJson);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Punch Card Loom");

            // Controls
            ui.horizontal(|ui| {
                ui.label("Text:");
                let response = ui.text_edit_singleline(&mut self.text);
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    self.apply(Command::Encode(self.text.clone()));
                }

                ui.separator();

                ui.label("Preset:");
                egui::ComboBox::from_id_source("preset_selector")
                    .selected_text(PRESETS[self.selected_preset].name)
                    .show_ui(ui, |ui| {
                        for (i, preset) in PRESETS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_preset, i, preset.name);
                        }
                    });
                if ui.button("Apply Preset").clicked() {
                    self.apply(Command::Preset(self.selected_preset));
                }

                ui.separator();

                if ui.button("⏹ Clear").clicked() {
                    self.apply(Command::Clear);
                }
                if ui.button("➡ Repeat").clicked() {
                    self.apply(Command::Repeat);
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Save PNG (Shift+S)").clicked() {
                    self.apply(Command::ExportPng);
                }
                if ui.button("Save JSON (Shift+J)").clicked() {
                    self.apply(Command::ExportJson);
                }
                ui.separator();
                ui.label(self.status.as_str());
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.resize(ui.available_width());
                let size = Vec2::new(self.layout.width(), self.layout.height());
                let (response, painter) = ui.allocate_painter(size, Sense::click());
                let origin = response.rect.min;

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.press(pos.x - origin.x, pos.y - origin.y);
                    }
                }

                painter.rect_filled(response.rect, 0.0, self.palette.background);
                let marks = swatch::build(&self.card, &self.layout, &self.palette);
                paint(&painter, origin.to_vec2(), &marks);
            });

            ui.separator();

            let last = self
                .card
                .last_used_column()
                .map_or_else(|| "none".to_string(), |c| c.to_string());
            ui.horizontal(|ui| {
                ui.label(format!("Set cells: {}", self.card.count_set()));
                ui.label(format!("Last used column: {last}"));
                ui.label(format!("Grid: {}x{}", self.card.rows(), self.card.cols()));
            });
        });
    }
}

fn paint(painter: &Painter, offset: Vec2, marks: &[Mark]) {
    for mark in marks {
        match *mark {
            Mark::Rect { rect, rounding, color } => {
                painter.rect_filled(rect.translate(offset), rounding, color);
            }
            Mark::Circle { center, radius, color } => {
                painter.circle_filled(center + offset, radius, color);
            }
            Mark::Label { pos, text, color } => {
                painter.text(
                    pos + offset,
                    Align2::LEFT_TOP,
                    text,
                    FontId::proportional(LABEL_SIZE),
                    color,
                );
            }
        }
    }
}
