// swatch.rs - Display list for the punch card and the woven swatch
//
// Marks are in canvas coordinates (origin top-left of the punch card). The UI
// paints them through egui, the snapshot rasterises them to PNG.

use egui::{Color32, Pos2, Rect, Vec2, pos2};
use punch_card::PunchCard;

use crate::layout::Layout;

pub const PUNCH_LABEL: &str = "Punch Card (click to toggle 0/1)";
pub const WEAVE_LABEL: &str = "Woven Swatch (rendered from card)";
pub const LABEL_SIZE: f32 = 14.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Rect { rect: Rect, rounding: f32, color: Color32 },
    Circle { center: Pos2, radius: f32, color: Color32 },
    Label { pos: Pos2, text: &'static str, color: Color32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub card: Color32,
    pub hole: Color32,
    pub raised: Color32,
    pub sunk: Color32,
    pub weft: Color32,
    pub warp: Color32,
    pub label: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            card: Color32::from_gray(245),
            hole: Color32::BLACK,
            raised: Color32::from_gray(224),
            sunk: Color32::from_gray(172),
            weft: Color32::WHITE,
            warp: Color32::from_rgba_unmultiplied(120, 120, 120, 80),
            label: Color32::from_rgb(0x0f, 0x76, 0x6e),
        }
    }
}

fn cell_rect(layout: &Layout, top: f32, row: usize, col: usize) -> Rect {
    Rect::from_min_size(
        pos2(col as f32 * layout.cell, top + row as f32 * layout.cell),
        Vec2::splat(layout.cell),
    )
}

/// Builds both panels for one frame. Cells come first, labels last so they
/// sit on top.
pub fn build(card: &PunchCard, layout: &Layout, palette: &Palette) -> Vec<Mark> {
    let mut marks = Vec::with_capacity(layout.rows * layout.cols * 5 + 2);
    let cell = layout.cell;

    for (row, bits) in card.rows_iter().enumerate() {
        for (col, &bit) in bits.iter().enumerate() {
            let rect = cell_rect(layout, 0.0, row, col);
            marks.push(Mark::Rect { rect, rounding: 6.0, color: palette.card });
            if bit == 1 {
                marks.push(Mark::Circle {
                    center: rect.center(),
                    radius: cell * 0.55 / 2.0,
                    color: palette.hole,
                });
            }
        }
    }

    let top = layout.swatch_top();
    for (row, bits) in card.rows_iter().enumerate() {
        for (col, &bit) in bits.iter().enumerate() {
            let rect = cell_rect(layout, top, row, col);
            let color = if bit == 1 { palette.raised } else { palette.sunk };
            marks.push(Mark::Rect { rect, rounding: 0.0, color });

            // thread accents
            let weft = Rect::from_min_size(
                pos2(rect.min.x, rect.min.y + cell * 0.45),
                Vec2::new(cell, cell * 0.1),
            );
            marks.push(Mark::Rect { rect: weft, rounding: 2.0, color: palette.weft });
            let warp = Rect::from_min_size(
                pos2(rect.min.x + cell * 0.45, rect.min.y),
                Vec2::new(cell * 0.1, cell),
            );
            marks.push(Mark::Rect { rect: warp, rounding: 2.0, color: palette.warp });
        }
    }

    marks.push(Mark::Label { pos: pos2(8.0, 2.0), text: PUNCH_LABEL, color: palette.label });
    marks.push(Mark::Label { pos: pos2(8.0, top + 2.0), text: WEAVE_LABEL, color: palette.label });
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    fn setup() -> (PunchCard, Layout) {
        let card = PunchCard::new(8, 2).unwrap();
        let cfg = LayoutConfig { min_width: 0.0, ..Default::default() };
        let layout = Layout::compute(40.0, 8, 2, &cfg);
        (card, layout)
    }

    fn circles(marks: &[Mark]) -> Vec<Pos2> {
        marks
            .iter()
            .filter_map(|m| match m {
                Mark::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn blank_card_has_no_holes_and_sunk_swatch() {
        let (card, layout) = setup();
        let palette = Palette::default();
        let marks = build(&card, &layout, &palette);
        assert!(circles(&marks).is_empty());
        // 16 card cells + 16 swatch cells with two accents each + 2 labels
        assert_eq!(marks.len(), 16 + 16 * 3 + 2);
        let sunk = marks
            .iter()
            .filter(|m| matches!(m, Mark::Rect { color, .. } if *color == palette.sunk))
            .count();
        assert_eq!(sunk, 16);
    }

    #[test]
    fn set_bits_punch_holes_and_raise_threads() {
        let (mut card, layout) = setup();
        card.toggle(1, 1);
        let palette = Palette::default();
        let marks = build(&card, &layout, &palette);

        assert_eq!(circles(&marks), vec![pos2(30.0, 30.0)]);
        let raised: Vec<Rect> = marks
            .iter()
            .filter_map(|m| match m {
                Mark::Rect { rect, color, .. } if *color == palette.raised => Some(*rect),
                _ => None,
            })
            .collect();
        let top = layout.swatch_top();
        assert_eq!(raised, vec![Rect::from_min_size(pos2(20.0, top + 20.0), Vec2::splat(20.0))]);
    }

    #[test]
    fn labels_come_last() {
        let (card, layout) = setup();
        let marks = build(&card, &layout, &Palette::default());
        assert!(matches!(marks[marks.len() - 2], Mark::Label { text: PUNCH_LABEL, .. }));
        assert!(matches!(marks[marks.len() - 1], Mark::Label { text: WEAVE_LABEL, .. }));
    }
}
