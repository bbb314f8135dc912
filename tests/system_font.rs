//! Rendering with the real monospace face. Skips when the host has none.

use asciisnap::{GlyphSource, MonospaceFont, SnapConfig, SourceText, TextRasterizer};

fn system_rasterizer() -> Option<TextRasterizer<MonospaceFont>> {
    match TextRasterizer::with_system_font(&SnapConfig::default()) {
        Ok(r) => Some(r),
        Err(e) => {
            println!("No system monospace font ({}); skipping.", e);
            None
        }
    }
}

#[test]
fn centered_lines_stay_inside_the_canvas() {
    let Some(r) = system_rasterizer() else { return };
    let text = "title\nHello\nWorld\nfooter";
    let layout = r.layout(&SourceText::parse(text)).unwrap();
    assert_eq!(layout.height, 80);
    assert_eq!(layout.width, r.font().text_width("footer") + 40);
    for line in &layout.lines {
        assert!(line.x >= 20);
        assert!(line.x as u32 + line.width <= layout.width);
    }

    let canvas = r.rasterize(text, false).unwrap();
    let rgb = canvas.into_dynamic().to_rgb8();
    let inked: Vec<(u32, u32)> = rgb
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0 != [255, 255, 255])
        .map(|(x, y, _)| (x, y))
        .collect();
    assert!(!inked.is_empty());
    // glyphs sit between the top margin and the last baseline's descenders
    assert!(inked.iter().all(|&(_, y)| y >= 20 && y < 80));
}

#[test]
fn aliased_text_is_pure_black_on_white() {
    let Some(r) = system_rasterizer() else { return };
    let rgb = r
        .rasterize("-\nMonospace 20px\n-", false)
        .unwrap()
        .into_dynamic()
        .to_rgb8();
    assert!(rgb
        .pixels()
        .all(|p| p.0 == [255, 255, 255] || p.0 == [0, 0, 0]));
}
