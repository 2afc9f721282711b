// src/toc/render.rs
// =============================================================================
// Renders headings as nested Markdown bullets.
//
//   depth 1  ->  "* text"
//   depth 2  ->  "  * text"
//   depth 3  ->  "    * text"
//
// Each extra level adds one two-space unit in front of the "* " marker.
// =============================================================================

use std::fmt;

use serde::Serialize;

const INDENT_UNIT: &str = "  ";
const BULLET: &str = "* ";

/// Title line placed above the bullets when a ToC is displayed.
pub const TOC_TITLE: &str = "# ToC";

// Renders a single ToC line for a heading of the given depth
//
// `depth` is the number of leading '#' characters and is always >= 1 when it
// comes from the scanner. A depth of 0 renders like depth 1.
pub fn render_toc_line(depth: usize, text: &str) -> String {
    let indent = depth.saturating_sub(1);
    let mut line = String::with_capacity(indent * INDENT_UNIT.len() + BULLET.len() + text.len());
    for _ in 0..indent {
        line.push_str(INDENT_UNIT);
    }
    line.push_str(BULLET);
    line.push_str(text);
    line
}

/// An ordered list of rendered ToC lines, ready to display.
///
/// Serializes as a plain JSON array of lines (no title).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TocDocument {
    lines: Vec<String>,
}

impl TocDocument {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for TocDocument {
    // "# ToC" followed by one bullet per line, every line newline-terminated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TOC_TITLE)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_top_level() {
        assert_eq!(render_toc_line(1, "Intro"), "* Intro");
    }

    #[test]
    fn test_render_nested_levels() {
        assert_eq!(render_toc_line(2, "Usage"), "  * Usage");
        assert_eq!(render_toc_line(3, "Flags"), "    * Flags");
        assert_eq!(render_toc_line(7, "deep"), format!("{}* deep", " ".repeat(12)));
    }

    #[test]
    fn test_render_keeps_text_verbatim() {
        assert_eq!(render_toc_line(1, " spaced  "), "*  spaced  ");
        assert_eq!(render_toc_line(2, ""), "  * ");
    }

    #[test]
    fn test_display_adds_title() {
        let toc = TocDocument::new(vec!["* a".to_string(), "  * b".to_string()]);
        assert_eq!(toc.to_string(), "# ToC\n* a\n  * b\n");
    }

    #[test]
    fn test_display_empty_document_is_just_the_title() {
        assert_eq!(TocDocument::default().to_string(), "# ToC\n");
    }

    #[test]
    fn test_is_empty() {
        assert!(TocDocument::default().is_empty());
        assert!(!TocDocument::new(vec!["* a".to_string()]).is_empty());
    }
}
