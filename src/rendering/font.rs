//! Glyph measurement and coverage for the fixed monospace face

use crate::{Error, Result};
use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use std::path::Path;

/// Em size, in pixels, text is rendered at.
pub const FONT_SIZE: f32 = 20.0;

/// Monospace faces tried, in order, when no font bytes are supplied.
pub const MONOSPACE_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
    "/usr/share/fonts/gnu-free/FreeMono.otf",
    "/usr/share/fonts/truetype/ubuntu/UbuntuMono-R.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/Library/Fonts/Courier New.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// Source of glyph metrics and coverage.
///
/// `draw_text` reports every covered pixel through `plot(x, y, coverage)`
/// with coverage in `0.0..=1.0`. Coordinates may fall outside the canvas;
/// the caller clips.
pub trait GlyphSource {
    /// Advance width of `text` in whole pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Rasterize `text` with its origin at `x` and its baseline at `baseline`.
    fn draw_text(&self, text: &str, x: i32, baseline: i32, plot: &mut dyn FnMut(i32, i32, f32));
}

/// Outline monospace font rendered through `ab_glyph`.
pub struct MonospaceFont {
    font: FontVec,
    scale: PxScale,
    origin: String,
}

impl MonospaceFont {
    /// Check the well-known system locations and load the first usable face.
    pub fn discover() -> Result<Self> {
        let mut rejected = 0usize;
        for candidate in MONOSPACE_CANDIDATES {
            let path = Path::new(candidate);
            if !path.is_file() {
                continue;
            }
            match Self::load(path) {
                Ok(font) => {
                    log::debug!("using monospace font {}", font.origin());
                    return Ok(font);
                }
                Err(e) => {
                    log::warn!("skipping font {}: {}", path.display(), e);
                    rejected += 1;
                }
            }
        }
        let detail = if rejected == 0 {
            format!("checked {} locations", MONOSPACE_CANDIDATES.len())
        } else {
            format!("{} candidate(s) failed to parse", rejected)
        };
        Err(Error::FontUnavailable(detail))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data, path.display().to_string())
    }

    /// Build from raw TrueType/OpenType bytes; `origin` names the source in errors.
    pub fn from_bytes(data: Vec<u8>, origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        let font = FontVec::try_from_vec(data).map_err(|_| Error::InvalidFont(origin.clone()))?;
        let scale = em_scale(&font, FONT_SIZE);
        Ok(Self { font, scale, origin })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

// PxScale is ascent-to-descent height; convert an em size into it.
fn em_scale(font: &FontVec, em_px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(em_px * font.height_unscaled() / upem),
        _ => PxScale::from(em_px),
    }
}

impl GlyphSource for MonospaceFont {
    fn text_width(&self, text: &str) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        let width: f32 = text
            .chars()
            .map(|c| scaled.h_advance(self.font.glyph_id(c)))
            .sum();
        width.round().max(0.0) as u32
    }

    fn draw_text(&self, text: &str, x: i32, baseline: i32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = x as f32;
        for c in text.chars() {
            let mut glyph = scaled.scaled_glyph(c);
            glyph.position = point(caret, baseline as f32);
            caret += scaled.h_advance(glyph.id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (ox, oy) = (bounds.min.x as i32, bounds.min.y as i32);
                outlined.draw(|gx, gy, coverage| {
                    plot(ox + gx as i32, oy + gy as i32, coverage);
                });
            }
        }
    }
}

/// Deterministic stand-in face: every non-whitespace character is a solid
/// `advance` × `ascent` cell sitting on the baseline.
///
/// Used by tests and benchmarks where pixel-exact output must not depend on
/// which fonts the host has installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCellFont {
    pub advance: u32,
    pub ascent: u32,
}

impl FixedCellFont {
    pub fn new(advance: u32, ascent: u32) -> Self {
        Self { advance, ascent }
    }
}

impl Default for FixedCellFont {
    fn default() -> Self {
        Self::new(12, 15)
    }
}

impl GlyphSource for FixedCellFont {
    fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.advance
    }

    fn draw_text(&self, text: &str, x: i32, baseline: i32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let advance = self.advance as i32;
        let top = baseline - self.ascent as i32;
        for (i, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let left = x + i as i32 * advance;
            for py in top..baseline {
                for px in left..left + advance {
                    plot(px, py, 1.0);
                }
            }
        }
    }
}
