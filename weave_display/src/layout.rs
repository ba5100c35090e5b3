// layout.rs - Canvas geometry for the two stacked panels

use crate::config::LayoutConfig;

/// Pixel geometry of the punch card (top) and woven swatch (bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub cell: f32,
    pub gap: f32,
}

impl Layout {
    /// Sizes cells from the available width, clamped for readability.
    pub fn compute(available_width: f32, rows: usize, cols: usize, cfg: &LayoutConfig) -> Self {
        let width = available_width.max(cfg.min_width);
        let cell = (width / cols as f32).floor().clamp(cfg.min_cell, cfg.max_cell);
        Self { rows, cols, cell, gap: cfg.gap }
    }

    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell
    }

    pub fn panel_height(&self) -> f32 {
        self.rows as f32 * self.cell
    }

    pub fn height(&self) -> f32 {
        self.panel_height() * 2.0 + self.gap
    }

    /// Top edge of the woven swatch.
    pub fn swatch_top(&self) -> f32 {
        self.panel_height() + self.gap
    }

    /// Maps a point relative to the canvas origin to a punch card cell.
    /// Points in the gap or the swatch map to nothing.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let inside = x >= 0.0 && x < self.width() && y >= 0.0 && y < self.panel_height();
        if !inside {
            return None;
        }
        let col = ((x / self.cell).floor() as usize).min(self.cols - 1);
        let row = ((y / self.cell).floor() as usize).min(self.rows - 1);
        Some((row, col))
    }
}
