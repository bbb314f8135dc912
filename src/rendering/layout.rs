/// Canvas sizing and line placement for centered text

use crate::rendering::font::GlyphSource;
use crate::source::SourceText;
use crate::{Error, Result};

/// Vertical distance between consecutive baselines.
pub const LINE_HEIGHT: u32 = 20;

/// Total horizontal padding and total vertical padding (both sides combined).
pub const PADDING: u32 = 40;

/// Baseline of the first drawn line.
pub const FIRST_BASELINE: i32 = LINE_HEIGHT as i32 + 20;

/// Where one source line lands on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePlacement {
    /// Index into `SourceText::lines`
    pub index: usize,
    pub x: i32,
    pub baseline: i32,
    pub width: u32,
}

/// Canvas dimensions plus placement of every drawn line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSpec {
    pub line_height: u32,
    /// Widest line over all source lines, including the undrawn ones
    pub max_width: u32,
    pub width: u32,
    pub height: u32,
    pub lines: Vec<LinePlacement>,
}

/// Compute the layout for `source`.
///
/// Width and height count every line, while only the interior lines (all but
/// the first and last) are placed. Fewer than two lines, or a canvas outside
/// `1..=max_dimension` on either axis, is rejected with `InvalidDimensions`.
pub fn compute_layout(
    source: &SourceText,
    font: &dyn GlyphSource,
    max_dimension: u32,
) -> Result<LayoutSpec> {
    let line_count = source.line_count();
    let widths: Vec<u32> = source.lines().iter().map(|l| font.text_width(l)).collect();
    let max_width = widths.iter().copied().max().unwrap_or(0);

    let width = i64::from(max_width) + i64::from(PADDING);
    let height = i64::from(LINE_HEIGHT) * (line_count as i64 - 2) + i64::from(PADDING);

    let limit = i64::from(max_dimension);
    if line_count < 2 || width <= 0 || height <= 0 || width > limit || height > limit {
        log::warn!(
            "rejecting {}x{} canvas for {} line(s)",
            width,
            height,
            line_count
        );
        return Err(Error::InvalidDimensions {
            width,
            height,
            line_count,
        });
    }
    let width = width as u32;
    let height = height as u32;

    let mut baseline = FIRST_BASELINE;
    let mut lines = Vec::with_capacity(line_count.saturating_sub(2));
    for (index, _) in source.interior() {
        let line_width = widths[index];
        let x = (width as i32 - line_width as i32) / 2;
        lines.push(LinePlacement {
            index,
            x,
            baseline,
            width: line_width,
        });
        baseline += LINE_HEIGHT as i32;
    }

    log::debug!(
        "layout: {} lines, max width {}, canvas {}x{}",
        line_count,
        max_width,
        width,
        height
    );

    Ok(LayoutSpec {
        line_height: LINE_HEIGHT,
        max_width,
        width,
        height,
        lines,
    })
}
