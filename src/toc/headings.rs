// src/toc/headings.rs
// =============================================================================
// This module finds ATX headings in Markdown text.
//
// How it works:
// 1. Split the document on '\n'
// 2. Keep lines matching `^(#+) ?(.*)$`
// 3. depth = number of leading '#', text = the rest of the line
//
// A single space right after the '#' run is the ATX delimiter and is not part
// of the text. Anything beyond it is kept verbatim: "##   x  " has text
// "  x  ". There is no upper limit on depth. Lines that don't start with '#'
// are skipped silently.
//
// Rust concepts:
// - Lifetimes: HeadingLine<'a> borrows its text from the document
// - Iterators: scan_headings is lazy, compile_heading_toc collects it
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

use super::render::{render_toc_line, TocDocument};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+) ?(.*)$").expect("heading pattern is valid"));

/// One heading line found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    /// Count of leading '#' characters, always at least 1.
    pub depth: usize,
    /// Rest of the line after the '#' run and its delimiter space.
    pub text: &'a str,
}

impl HeadingLine<'_> {
    pub fn render(&self) -> String {
        render_toc_line(self.depth, self.text)
    }
}

// Yields every heading line of `document` in document order
pub fn scan_headings(document: &str) -> impl Iterator<Item = HeadingLine<'_>> {
    document.split('\n').filter_map(|line| {
        let caps = HEADING.captures(line)?;
        let marks = caps.get(1)?.as_str();
        let text = caps.get(2).map_or("", |m| m.as_str());

        if marks.is_empty() {
            return None;
        }

        Some(HeadingLine {
            depth: marks.len(),
            text,
        })
    })
}

// Compiles a document into rendered ToC lines, one per heading
//
// Example input:
//   "# a\n## b\n### c\n## d\n# e"
//
// Example output:
//   ["* a", "  * b", "    * c", "  * d", "* e"]
pub fn compile_heading_toc(document: &str) -> Vec<String> {
    scan_headings(document)
        .map(|heading| {
            tracing::trace!(depth = heading.depth, text = heading.text, "heading");
            heading.render()
        })
        .collect()
}

impl TocDocument {
    /// Scans `document` and wraps the rendered lines.
    pub fn compile(document: &str) -> Self {
        TocDocument::new(compile_heading_toc(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_nested_headings() {
        let toc = compile_heading_toc("# a\n## b\n### c\n## d\n# e");
        assert_eq!(toc, vec!["* a", "  * b", "    * c", "  * d", "* e"]);
    }

    #[test]
    fn test_compile_empty_document() {
        assert!(compile_heading_toc("").is_empty());
    }

    #[test]
    fn test_bullets_are_not_headings() {
        assert!(compile_heading_toc("* a\n* * b").is_empty());
    }

    #[test]
    fn test_toc_output_is_not_heading_like() {
        let toc = compile_heading_toc("# a\n## b\n### c");
        let rescanned = compile_heading_toc(&toc.join("\n"));
        assert!(rescanned.is_empty());
    }

    #[test]
    fn test_non_heading_lines_are_skipped() {
        let document = r#"
Intro paragraph

# Install

Run `cargo install`.
 # indented, not a heading
## Usage
text with a # in the middle
"#;
        let toc = compile_heading_toc(document);
        assert_eq!(toc, vec!["* Install", "  * Usage"]);
    }

    #[test]
    fn test_heading_text_is_not_trimmed() {
        let headings: Vec<_> = scan_headings("#no space\n##   padded   \n###").collect();
        assert_eq!(
            headings,
            vec![
                HeadingLine { depth: 1, text: "no space" },
                HeadingLine { depth: 2, text: "  padded   " },
                HeadingLine { depth: 3, text: "" },
            ]
        );
    }

    #[test]
    fn test_depth_has_no_ceiling() {
        let line = format!("{} deep", "#".repeat(9));
        let toc = compile_heading_toc(&line);
        assert_eq!(toc, vec![format!("{}* deep", "  ".repeat(8))]);
    }

    #[test]
    fn test_carriage_returns_stay_in_text() {
        let toc = compile_heading_toc("# a\r\n## b\r\n");
        assert_eq!(toc, vec!["* a\r", "  * b\r"]);
    }

    #[test]
    fn test_toc_document_compile() {
        let toc = TocDocument::compile("# Title\n## Part");
        assert_eq!(toc.to_string(), "# ToC\n* Title\n  * Part\n");
    }
}
