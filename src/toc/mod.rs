// src/toc/mod.rs
// =============================================================================
// This module builds a table of contents from Markdown headings.
//
// Submodules:
// - headings: finds ATX heading lines ("# Title", "## Sub", ...)
// - render: turns one heading into an indented bullet ("  * Sub")
//
// Only lines that START with '#' count as headings. Everything else
// (paragraphs, bullets, code fences) is skipped. This is not a Markdown
// parser and does not try to be one.
// =============================================================================

mod headings;
mod render;

pub use headings::{compile_heading_toc, scan_headings, HeadingLine};
pub use render::{render_toc_line, TocDocument, TOC_TITLE};
