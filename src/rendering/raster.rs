/// Rasterizer: allocates the canvas and executes paint commands on it

use crate::config::SnapConfig;
use crate::rendering::font::{GlyphSource, MonospaceFont};
use crate::rendering::layout::{compute_layout, LayoutSpec};
use crate::rendering::paint::{build_display_list, Background, PaintCommand};
use crate::source::SourceText;
use crate::Result;
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use sha2::{Digest, Sha256};

/// Pixel buffer being drawn into before encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Canvas {
    /// RGB, white background
    Opaque(RgbImage),
    /// RGBA, clear background
    Transparent(RgbaImage),
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Background) -> Self {
        match background {
            Background::White => Canvas::Opaque(RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))),
            Background::Transparent => {
                Canvas::Transparent(RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])))
            }
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Canvas::Opaque(img) => img.width(),
            Canvas::Transparent(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Canvas::Opaque(img) => img.height(),
            Canvas::Transparent(img) => img.height(),
        }
    }

    pub fn background(&self) -> Background {
        match self {
            Canvas::Opaque(_) => Background::White,
            Canvas::Transparent(_) => Background::Transparent,
        }
    }

    pub fn as_raw(&self) -> &[u8] {
        match self {
            Canvas::Opaque(img) => img.as_raw(),
            Canvas::Transparent(img) => img.as_raw(),
        }
    }

    /// Composite `rgb` at `coverage` (0..=1) source-over onto pixel (x, y).
    /// Pixels outside the canvas are ignored.
    pub fn cover(&mut self, x: i32, y: i32, rgb: (u8, u8, u8), coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let a = coverage.clamp(0.0, 1.0);
        if a == 0.0 {
            return;
        }
        let src = [rgb.0, rgb.1, rgb.2];
        match self {
            Canvas::Opaque(img) => {
                let px = img.get_pixel_mut(x as u32, y as u32);
                for (d, s) in px.0.iter_mut().zip(src) {
                    *d = mix(*d as f32, s as f32, a);
                }
            }
            Canvas::Transparent(img) => {
                let px = img.get_pixel_mut(x as u32, y as u32);
                let da = px.0[3] as f32 / 255.0;
                let out_a = a + da * (1.0 - a);
                for i in 0..3 {
                    let c = (src[i] as f32 * a + px.0[i] as f32 * da * (1.0 - a)) / out_a;
                    px.0[i] = c.round().clamp(0.0, 255.0) as u8;
                }
                px.0[3] = (out_a * 255.0).round() as u8;
            }
        }
    }

    /// Hex SHA-256 over dimensions, format and raw pixels.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width().to_be_bytes());
        hasher.update(self.height().to_be_bytes());
        hasher.update([matches!(self, Canvas::Transparent(_)) as u8]);
        hasher.update(self.as_raw());
        hex::encode(hasher.finalize())
    }

    pub fn into_dynamic(self) -> DynamicImage {
        match self {
            Canvas::Opaque(img) => DynamicImage::ImageRgb8(img),
            Canvas::Transparent(img) => DynamicImage::ImageRgba8(img),
        }
    }
}

fn mix(dst: f32, src: f32, a: f32) -> u8 {
    (dst * (1.0 - a) + src * a).round().clamp(0.0, 255.0) as u8
}

/// Turns source text into a finished canvas using one fixed face.
pub struct TextRasterizer<F: GlyphSource = MonospaceFont> {
    font: F,
    antialias: bool,
    max_dimension: u32,
}

impl TextRasterizer<MonospaceFont> {
    /// Rasterizer backed by the first monospace font found on the system.
    pub fn with_system_font(config: &SnapConfig) -> Result<Self> {
        Ok(Self::new(MonospaceFont::discover()?, config))
    }
}

impl<F: GlyphSource> TextRasterizer<F> {
    pub fn new(font: F, config: &SnapConfig) -> Self {
        Self {
            font,
            antialias: config.antialias,
            max_dimension: config.max_dimension,
        }
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    pub fn layout(&self, source: &SourceText) -> Result<LayoutSpec> {
        compute_layout(source, &self.font, self.max_dimension)
    }

    /// Trim and split `text`, lay it out and draw the interior lines.
    pub fn rasterize(&self, text: &str, transparent: bool) -> Result<Canvas> {
        self.rasterize_source(&SourceText::parse(text), transparent)
    }

    pub fn rasterize_source(&self, source: &SourceText, transparent: bool) -> Result<Canvas> {
        let layout = self.layout(source)?;
        let background = Background::from_transparent(transparent);
        let cmds = build_display_list(&layout, source, background);
        let canvas = self.paint(layout.width, layout.height, &cmds);
        log::debug!("rasterized {}x{} canvas, digest {}", canvas.width(), canvas.height(), canvas.digest());
        Ok(canvas)
    }

    /// Execute a display list on a fresh `width` × `height` canvas.
    ///
    /// A leading `Clear` picks the canvas format (white when absent). The
    /// canvas is filled once on allocation, so a `Clear` anywhere else is
    /// skipped.
    pub fn paint(&self, width: u32, height: u32, cmds: &[PaintCommand]) -> Canvas {
        let (background, rest) = match cmds.split_first() {
            Some((PaintCommand::Clear { background }, rest)) => (*background, rest),
            _ => (Background::White, cmds),
        };
        let mut canvas = Canvas::new(width, height, background);
        for cmd in rest {
            match cmd {
                PaintCommand::Clear { .. } => {
                    log::warn!("skipping Clear that is not the first paint command");
                }
                PaintCommand::Text { x, y, text, rgb } => {
                    let antialias = self.antialias;
                    self.font.draw_text(text, *x, *y, &mut |px, py, coverage| {
                        let coverage = if antialias {
                            coverage
                        } else if coverage >= 0.5 {
                            1.0
                        } else {
                            0.0
                        };
                        canvas.cover(px, py, *rgb, coverage);
                    });
                }
            }
        }
        canvas
    }
}
