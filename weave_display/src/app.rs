// app.rs - Viewer state and the commands input events turn into

use log::error;
use punch_card::{PRESETS, PunchCard, apply_preset, export};

use crate::config::{Config, ExportConfig, LayoutConfig};
use crate::layout::Layout;
use crate::snapshot;
use crate::swatch::{self, Palette};

/// Everything the input side can ask of the card.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Toggle { row: usize, col: usize },
    Clear,
    Encode(String),
    Preset(usize),
    Repeat,
    ExportPng,
    ExportJson,
}

pub struct WeaveApp {
    pub card: PunchCard,
    pub text: String,
    pub selected_preset: usize,
    pub palette: Palette,
    pub layout_config: LayoutConfig,
    pub export: ExportConfig,
    pub layout: Layout,
    pub status: String,
}

impl WeaveApp {
    pub fn new(card: PunchCard, config: &Config) -> Self {
        let layout = Layout::compute(0.0, card.rows(), card.cols(), &config.layout);
        Self {
            card,
            text: String::new(),
            selected_preset: 0,
            palette: Palette::default(),
            layout_config: config.layout.clone(),
            export: config.export.clone(),
            layout,
            status: String::new(),
        }
    }

    /// Recomputes cell size for the current window width.
    pub fn resize(&mut self, available_width: f32) {
        self.layout = Layout::compute(
            available_width,
            self.card.rows(),
            self.card.cols(),
            &self.layout_config,
        );
    }

    /// Pointer press at canvas-relative coordinates.
    pub fn press(&mut self, x: f32, y: f32) {
        if let Some((row, col)) = self.layout.hit_test(x, y) {
            self.apply(Command::Toggle { row, col });
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Toggle { row, col } => {
                self.card.toggle(row, col);
            }
            Command::Clear => {
                self.card.clear();
                self.status = "Cleared".to_string();
            }
            Command::Encode(text) => {
                self.card.encode_text(&text);
                self.status = format!("Encoded {text:?}");
            }
            Command::Preset(index) => match PRESETS.get(index) {
                Some(preset) => {
                    apply_preset(&mut self.card, preset);
                    self.text = preset.text.to_string();
                    self.status = format!("Preset {}", preset.name);
                }
                None => self.status = format!("No preset {index}"),
            },
            Command::Repeat => {
                self.status = match self.card.repeat_to_right() {
                    Some(cols) => format!("Repeated into columns {}..{}", cols.start, cols.end),
                    None => "Nothing to repeat".to_string(),
                };
            }
            Command::ExportPng => self.export_png(),
            Command::ExportJson => self.export_json(),
        }
    }

    fn export_png(&mut self) {
        let path = self.export.png_path();
        let marks = swatch::build(&self.card, &self.layout, &self.palette);
        let img = snapshot::render(&marks, &self.layout, self.palette.background);
        self.status = match snapshot::save_png(&img, &path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                error!("PNG export to {} failed: {e}", path.display());
                format!("PNG export failed: {e}")
            }
        };
    }

    fn export_json(&mut self) {
        let path = self.export.json_path();
        self.status = match export::save_json(&self.card, &path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                error!("JSON export to {} failed: {e}", path.display());
                format!("JSON export failed: {e}")
            }
        };
    }
}
