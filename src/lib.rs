//! AsciiSnap
//!
//! Renders the lines of a plain-text file onto a PNG. Every line is centered
//! horizontally in a fixed 20px monospace face and the canvas is sized to the
//! widest line.
//!
//! Layout quirk kept for compatibility with earlier AsciiSnap output: the first and
//! last lines of the (trimmed) document count toward the canvas size but are
//! never drawn. Inputs with fewer than two lines are rejected with
//! [`Error::InvalidDimensions`].
//!
//! # Example
//!
//! ```no_run
//! use asciisnap::{SnapConfig, TextRasterizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rasterizer = TextRasterizer::with_system_font(&SnapConfig::default())?;
//! let canvas = rasterizer.rasterize("title\nHello\nWorld\nfooter", true)?;
//! let png = asciisnap::rendering::encode_png(&canvas)?;
//! asciisnap::output::write_png("hello.png".as_ref(), &png)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::SnapConfig;

pub mod source;
pub use source::SourceText;

pub mod rendering;
pub use rendering::font::{FixedCellFont, GlyphSource, MonospaceFont};
pub use rendering::raster::{Canvas, TextRasterizer};
pub use rendering::RenderedOutput;

pub mod output;

// Dialog and notice traits standing in for the desktop UI
pub mod platform;

pub mod session;
pub use session::Session;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_compose() {
        let r = TextRasterizer::new(FixedCellFont::default(), &SnapConfig::default());
        let canvas = r.rasterize("a\nmiddle\nz", false).unwrap();
        let png = rendering::encode_png(&canvas).unwrap();
        assert_eq!((png.width, png.height), (canvas.width(), canvas.height()));
        assert_eq!(png.height, 60);
    }
}
