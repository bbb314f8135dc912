/// Paint command set: what the rasterizer is asked to draw, in order

use crate::rendering::layout::LayoutSpec;
use crate::source::SourceText;

/// Canvas fill chosen by the transparency flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// RGB canvas filled with solid white
    White,
    /// RGBA canvas filled with fully clear pixels
    Transparent,
}

impl Background {
    pub fn from_transparent(transparent: bool) -> Self {
        if transparent {
            Background::Transparent
        } else {
            Background::White
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Clear {
        background: Background,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        rgb: (u8, u8, u8),
    },
}

pub const TEXT_COLOR: (u8, u8, u8) = (0, 0, 0);

/// Turn a layout into a display list: one clear followed by one text run per
/// placed line.
pub fn build_display_list(
    layout: &LayoutSpec,
    source: &SourceText,
    background: Background,
) -> Vec<PaintCommand> {
    let mut cmds = Vec::with_capacity(layout.lines.len() + 1);
    cmds.push(PaintCommand::Clear { background });
    for placement in &layout.lines {
        cmds.push(PaintCommand::Text {
            x: placement.x,
            y: placement.baseline,
            text: source.lines()[placement.index].clone(),
            rgb: TEXT_COLOR,
        });
    }
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::font::FixedCellFont;
    use crate::rendering::layout::compute_layout;

    #[test]
    fn display_list_clears_then_draws_interior_lines() {
        let source = SourceText::parse("title\nHello\nWorld\nfooter");
        let layout = compute_layout(&source, &FixedCellFont::default(), 4096).unwrap();
        let cmds = build_display_list(&layout, &source, Background::Transparent);

        assert_eq!(cmds.len(), 3);
        assert_eq!(
            cmds[0],
            PaintCommand::Clear {
                background: Background::Transparent
            }
        );
        match &cmds[2] {
            PaintCommand::Text { x, y, text, rgb } => {
                assert_eq!(text, "World");
                assert_eq!((*x, *y), (26, 60));
                assert_eq!(*rgb, (0, 0, 0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn background_follows_flag() {
        assert_eq!(Background::from_transparent(true), Background::Transparent);
        assert_eq!(Background::from_transparent(false), Background::White);
    }
}
