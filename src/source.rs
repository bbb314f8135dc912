//! Source text: the ordered lines of the input document

use crate::Result;
use std::path::Path;

/// Lines of a document after whole-document trimming.
///
/// Line separators are normalized first (`\r\n`, `\r` and `\n` all end a line),
/// then leading and trailing whitespace of the entire document is removed
/// and the remainder is split on `\n`. Interior blank lines survive. An empty
/// document yields a single empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
        let trimmed = normalized.trim_matches(is_trimmable);
        let lines = trimmed.split('\n').map(str::to_string).collect();
        Self { lines }
    }

    /// Read a text file fully into memory. Bytes that are not valid UTF-8
    /// decode to U+FFFD instead of failing.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let raw = String::from_utf8_lossy(&bytes);
        if let std::borrow::Cow::Owned(_) = raw {
            log::debug!("{} is not valid UTF-8; decoded lossily", path.display());
        }
        Ok(Self::parse(&raw))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines that end up on the canvas: everything except the first and last.
    pub fn interior(&self) -> impl Iterator<Item = (usize, &str)> {
        let end = self.lines.len().saturating_sub(1);
        self.lines
            .iter()
            .enumerate()
            .take(end)
            .skip(1)
            .map(|(i, l)| (i, l.as_str()))
    }
}

// Control characters and space, the same set a line-oriented trim strips.
fn is_trimmable(c: char) -> bool {
    c <= ' '
}
