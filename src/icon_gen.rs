//! Procedural renderer for the RayLink app icon.
//!
//! Paints an aurora gradient, a soft radial highlight made of concentric
//! rings, and a centered "R" glyph with a glow, then persists the canvas as
//! `AppIcon.png` and rewrites the asset catalog descriptor beside it.

use crate::contents_json::{self, ContentsFile, ImageEntry};
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::{fs::File, path::Path, str::FromStr};

/// Edge length of the generated icon in pixels.
pub const ICON_SIZE: u32 = 1024;

/// Gradient endpoints, top to bottom (CSS hex).
const GRADIENT_TOP: &str = "#6432ff";
const GRADIENT_BOTTOM: &str = "#2864ff";

/// The letter drawn in the icon center.
const GLYPH: &str = "R";

/// Low-alpha glyph passes rendered under the solid pass.
const GLOW_PASSES: u32 = 10;

/// Font files tried in order for the center glyph. The first one that
/// parses wins; a missing file is a capability fallback, not an error.
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Renders the icon at `ICON_SIZE`, writes `AppIcon.png` into `out_dir`,
/// then overwrites `Contents.json` with the single-entry catalog document.
pub fn generate_app_icon(out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir).context("Can't create appiconset directory")?;

    let icon = render_icon(ICON_SIZE);
    let icon_path = out_dir.join(crate::ICON_FILENAME);
    save_png(&icon, &icon_path)?;
    println!("✓ Created app icon: {}", icon_path.display());

    let mut contents = ContentsFile::new("xcode".to_string());
    contents.add_image(ImageEntry::new(
        crate::ICON_FILENAME.to_string(),
        "universal".to_string(),
        "ios".to_string(),
        format!("{ICON_SIZE}x{ICON_SIZE}"),
    ));
    contents_json::write_contents_json(out_dir, &contents)?;
    println!("✓ Updated Contents.json");

    Ok(())
}

/// Renders the full icon at the given edge length.
pub fn render_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);

    let top = parse_color(GRADIENT_TOP, Rgba([100, 50, 255, 255]));
    let bottom = parse_color(GRADIENT_BOTTOM, Rgba([40, 100, 255, 255]));
    paint_gradient(&mut img, top, bottom);
    paint_vignette(&mut img);
    paint_glyph(&mut img);

    img
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let mut file = File::create(path).context("Failed to create PNG file")?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    Ok(())
}

/// Parses a CSS color string, falling back to `fallback` on bad input.
fn parse_color(css: &str, fallback: Rgba<u8>) -> Rgba<u8> {
    css_color::Srgb::from_str(css)
        .map(|color| {
            Rgba([
                (color.red * 255.) as u8,
                (color.green * 255.) as u8,
                (color.blue * 255.) as u8,
                255,
            ])
        })
        .unwrap_or(fallback)
}

/// Paints a vertical linear gradient, one opaque full-width row at a time.
fn paint_gradient(img: &mut RgbaImage, top: Rgba<u8>, bottom: Rgba<u8>) {
    let (width, height) = img.dimensions();
    for y in 0..height {
        let progress = y as f32 / height as f32;
        let blend = |a: u8, b: u8| (a as f32 * (1.0 - progress) + b as f32 * progress) as u8;
        let row = Rgba([
            blend(top[0], bottom[0]),
            blend(top[1], bottom[1]),
            blend(top[2], bottom[2]),
            255,
        ]);
        for x in 0..width {
            img.put_pixel(x, y, row);
        }
    }
}

/// Overlays the radial highlight: white rings shrinking from a quarter of
/// the edge length down to one pixel, brightening toward the center.
fn paint_vignette(img: &mut RgbaImage) {
    let size = img.width();
    let max_radius = size / 4;
    let center = size as f32 / 2.0;

    for radius in (1..=max_radius).rev() {
        let alpha = (1.0 - radius as f32 / max_radius as f32) * 0.3;
        draw_ring(img, center, center, radius as f32, 2.0, alpha);
    }
}

/// Blends a white circle outline stroked `width` pixels inward from `radius`.
fn draw_ring(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, width: f32, alpha: f32) {
    let (w, h) = img.dimensions();
    let min_x = ((cx - radius - 1.0).floor() as i64).max(0) as u32;
    let max_x = ((cx + radius + 1.0).ceil() as i64).min(w as i64 - 1) as u32;
    let min_y = ((cy - radius - 1.0).floor() as i64).max(0) as u32;
    let max_y = ((cy + radius + 1.0).ceil() as i64).min(h as i64 - 1) as u32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist <= radius && dist > radius - width {
                blend_white(img.get_pixel_mut(x, y), alpha);
            }
        }
    }
}

/// Source-over blend of white at the given alpha onto one pixel. White
/// keeps every channel on the same formula, alpha included.
fn blend_white(pixel: &mut Rgba<u8>, alpha: f32) {
    let a = alpha.clamp(0.0, 1.0);
    for channel in pixel.0.iter_mut() {
        *channel = (255.0 * a + *channel as f32 * (1.0 - a)) as u8;
    }
}

/// Rasterized glyph coverage, cropped to the ink bounding box.
struct GlyphMask {
    width: u32,
    height: u32,
    coverage: Vec<f32>,
}

/// Rasterizes the glyph and composites it centered with a glow: ten passes
/// of increasing low alpha, then one solid pass for the bright core.
fn paint_glyph(img: &mut RgbaImage) {
    let size = img.width();
    let font_size = (size / 2) as f32;

    let mask = match load_font().and_then(|font| rasterize_glyph(&font, GLYPH, font_size)) {
        Some(mask) => mask,
        None => {
            println!("⚠ No usable font found, drawing block glyph instead");
            fallback_glyph_mask(size)
        }
    };

    let (left, top) = glyph_origin(size, mask.width, mask.height);

    for offset in (1..=GLOW_PASSES).rev() {
        let alpha = (1.0 - offset as f32 / GLOW_PASSES as f32) * 0.5;
        draw_glyph_pass(img, &mask, left, top, alpha);
    }
    draw_glyph_pass(img, &mask, left, top, 1.0);
}

/// Tries each candidate font file and returns the first that parses.
fn load_font() -> Option<Font<'static>> {
    for path in FONT_CANDIDATES {
        if let Ok(data) = std::fs::read(path) {
            if let Some(font) = Font::try_from_vec_and_index(data, 0) {
                return Some(font);
            }
        }
    }
    None
}

/// Lays out `text` at the given pixel scale and collects per-pixel coverage
/// over the ink bounding box. Returns `None` for glyphs with no ink.
fn rasterize_glyph(font: &Font<'_>, text: &str, px: f32) -> Option<GlyphMask> {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<_> = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .collect();

    let boxes: Vec<_> = glyphs
        .iter()
        .filter_map(|g| g.pixel_bounding_box())
        .collect();
    let min_x = boxes.iter().map(|b| b.min.x).min()?;
    let min_y = boxes.iter().map(|b| b.min.y).min()?;
    let max_x = boxes.iter().map(|b| b.max.x).max()?;
    let max_y = boxes.iter().map(|b| b.max.y).max()?;

    let width = (max_x - min_x) as u32;
    let height = (max_y - min_y) as u32;
    let mut coverage = vec![0.0f32; (width * height) as usize];

    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let x = gx as i32 + bb.min.x - min_x;
                let y = gy as i32 + bb.min.y - min_y;
                if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
                    let idx = (y as u32 * width + x as u32) as usize;
                    coverage[idx] = coverage[idx].max(v);
                }
            });
        }
    }

    Some(GlyphMask {
        width,
        height,
        coverage,
    })
}

/// Crude block-capital "R" used when no system font can be loaded: plain
/// axis-aligned bars plus one diagonal leg.
fn fallback_glyph_mask(canvas: u32) -> GlyphMask {
    let height = canvas * 2 / 5;
    let width = height * 3 / 5;
    let stroke = (height / 6).max(1);
    let mut coverage = vec![0.0f32; (width * height) as usize];

    let mut fill_rect = |x0: u32, y0: u32, w: u32, h: u32| {
        for y in y0..(y0 + h).min(height) {
            for x in x0..(x0 + w).min(width) {
                coverage[(y * width + x) as usize] = 1.0;
            }
        }
    };

    fill_rect(0, 0, stroke, height); // stem
    fill_rect(0, 0, width, stroke); // top bar
    fill_rect(width - stroke, 0, stroke, height / 2); // bowl right side
    fill_rect(0, height / 2 - stroke, width, stroke); // bowl bottom

    // Diagonal leg from the bowl corner down to the baseline.
    let leg_top = height / 2;
    let run = width - stroke;
    for y in leg_top..height {
        let x0 = stroke + (y - leg_top) * run / (height - leg_top);
        for x in x0..(x0 + stroke).min(width) {
            coverage[(y * width + x) as usize] = 1.0;
        }
    }

    GlyphMask {
        width,
        height,
        coverage,
    }
}

/// Centers the ink box horizontally and vertically, biased upward by one
/// tenth of the ink height.
fn glyph_origin(canvas: u32, mask_width: u32, mask_height: u32) -> (i64, i64) {
    let x = (canvas as i64 - mask_width as i64) / 2;
    let y = (canvas as i64 - mask_height as i64) / 2 - mask_height as i64 / 10;
    (x, y)
}

/// Blends one white pass of the glyph mask at the given base alpha.
fn draw_glyph_pass(img: &mut RgbaImage, mask: &GlyphMask, left: i64, top: i64, alpha: f32) {
    let (w, h) = img.dimensions();
    for my in 0..mask.height {
        for mx in 0..mask.width {
            let coverage = mask.coverage[(my * mask.width + mx) as usize];
            if coverage <= 0.0 {
                continue;
            }
            let x = left + mx as i64;
            let y = top + my as i64;
            if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
                continue;
            }
            blend_white(img.get_pixel_mut(x as u32, y as u32), coverage * alpha);
        }
    }
}
