//! Rendering pipeline: layout, paint list, raster and PNG encoding

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use crate::Result;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use raster::Canvas;

/// An encoded PNG ready to be persisted.
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub width: u32,
    pub height: u32,
    pub transparent: bool,
    pub png_data: Vec<u8>,
}

/// Encode a canvas as PNG: RGB8 for opaque canvases, RGBA8 for transparent ones.
pub fn encode_png(canvas: &Canvas) -> Result<RenderedOutput> {
    let (width, height) = (canvas.width(), canvas.height());
    let (color, transparent) = match canvas {
        Canvas::Opaque(_) => (ExtendedColorType::Rgb8, false),
        Canvas::Transparent(_) => (ExtendedColorType::Rgba8, true),
    };

    let mut png_data = Vec::new();
    PngEncoder::new(&mut png_data).write_image(canvas.as_raw(), width, height, color)?;
    log::debug!("encoded {}x{} PNG ({} bytes)", width, height, png_data.len());

    Ok(RenderedOutput {
        width,
        height,
        transparent,
        png_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::Background;

    #[test]
    fn encoded_png_decodes_to_same_size_and_format() {
        let out = encode_png(&Canvas::new(30, 20, Background::Transparent)).unwrap();
        assert!(out.transparent);
        assert_eq!(&out.png_data[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&out.png_data).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!(decoded.to_rgba8().dimensions(), (30, 20));
    }

    #[test]
    fn opaque_canvas_encodes_without_alpha() {
        let out = encode_png(&Canvas::new(8, 8, Background::White)).unwrap();
        let decoded = image::load_from_memory(&out.png_data).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert!(decoded.to_rgb8().pixels().all(|p| p.0 == [255, 255, 255]));
    }
}
