//! PNG export of the rendered panels.
//!
//! Rasterises the same display list the UI paints, without going through the
//! GPU. Labels are skipped since there is no font rasteriser here.

use std::fs;
use std::path::Path;

use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage};
use log::info;
use thiserror::Error;

use crate::layout::Layout;
use crate::swatch::Mark;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub fn render(marks: &[Mark], layout: &Layout, background: Color32) -> RgbaImage {
    let width = layout.width().ceil() as u32;
    let height = layout.height().ceil() as u32;
    let mut img = RgbaImage::from_pixel(width, height, Rgba(background.to_array()));

    for mark in marks {
        match *mark {
            Mark::Rect { rect, rounding, color } => {
                fill(&mut img, rect, color, |p| inside_rounded(rect, rounding, p));
            }
            Mark::Circle { center, radius, color } => {
                let bounds = Rect::from_center_size(center, egui::Vec2::splat(radius * 2.0));
                fill(&mut img, bounds, color, |p| p.distance(center) <= radius);
            }
            Mark::Label { .. } => {}
        }
    }
    img
}

pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    img.save_with_format(path, image::ImageFormat::Png)?;
    info!("Saved {}x{} snapshot to {}", img.width(), img.height(), path.display());
    Ok(())
}

fn fill(img: &mut RgbaImage, bounds: Rect, color: Color32, covers: impl Fn(Pos2) -> bool) {
    let x0 = bounds.min.x.floor().max(0.0) as u32;
    let y0 = bounds.min.y.floor().max(0.0) as u32;
    let x1 = (bounds.max.x.ceil() as u32).min(img.width());
    let y1 = (bounds.max.y.ceil() as u32).min(img.height());

    for y in y0..y1 {
        for x in x0..x1 {
            // sample at pixel centre
            if covers(Pos2::new(x as f32 + 0.5, y as f32 + 0.5)) {
                let dst = img.get_pixel_mut(x, y);
                *dst = blend(*dst, color);
            }
        }
    }
}

fn inside_rounded(rect: Rect, rounding: f32, p: Pos2) -> bool {
    if !rect.contains(p) {
        return false;
    }
    let r = rounding.min(rect.width() / 2.0).min(rect.height() / 2.0);
    if r <= 0.0 {
        return true;
    }
    let inner = rect.shrink(r);
    let nearest = inner.clamp(p);
    p.distance(nearest) <= r
}

// Color32 is premultiplied, so "over" is src + dst * (1 - src_alpha).
fn blend(dst: Rgba<u8>, src: Color32) -> Rgba<u8> {
    let keep = 255 - u16::from(src.a());
    let mix = |s: u8, d: u8| (u16::from(s) + (u16::from(d) * keep + 127) / 255).min(255) as u8;
    let [dr, dg, db, da] = dst.0;
    Rgba([mix(src.r(), dr), mix(src.g(), dg), mix(src.b(), db), mix(src.a(), da)])
}
